pub const APP_NAME: &str = "MRO Duration & CBA";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version shown in the UI. A release tag captured at build time wins over the
/// crate version.
pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, crate_version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{crate_version}"),
    }
}
