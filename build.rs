use std::process::Command;

/// Exposes the latest release tag as `GIT_TAG` for the version label.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    else {
        return;
    };
    if !output.status.success() {
        return;
    }
    let Ok(tag) = String::from_utf8(output.stdout) else {
        return;
    };
    let tag = tag.trim();
    if !tag.is_empty() {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
