use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Error => "toast toast--error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, message));
}

fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    // Repeated save failures on every keystroke collapse into the visible toast.
    if entries
        .iter()
        .any(|entry| entry.kind == message.kind && entry.text == message.text)
    {
        return;
    }
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let dismiss_id = message.id.clone();
    let mut toasts = toasts;
    rsx! {
        li {
            class: message.kind.class(),
            span { class: "toast__icon", "{message.kind.icon()}" }
            p { class: "toast__text", "{message.text}" }
            button {
                class: "toast__dismiss",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_latest_five() {
        let mut entries = Vec::new();
        for n in 0..7 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("msg {n}")));
        }
        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries[0].text, "msg 2");
        assert_eq!(entries[4].text, "msg 6");
    }

    #[test]
    fn identical_visible_toast_is_not_repeated() {
        let mut entries = Vec::new();
        for _ in 0..3 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Warning, "not saved"));
        }
        enqueue(&mut entries, ToastMessage::new(ToastKind::Error, "not saved"));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, ToastKind::Warning);
        assert_eq!(entries[0].class(), "toast toast--warning");
    }
}
