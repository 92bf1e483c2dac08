use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CostsPage, PredictPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state, PersistSaveError},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/predict")]
    Predict {},
    #[route("/costs")]
    Costs {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                tracing::info!("restored saved form inputs");
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Saves the form inputs after every edit. Failures are logged and surfaced as a warning toast.
pub fn persist_user_state(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!(%err, "failed to persist form inputs");
        push_toast(toasts, ToastKind::Warning, save_failure_message(&err));
    }
}

fn save_failure_message(err: &PersistSaveError) -> String {
    format!("Form inputs were not saved and will reset on restart: {err}")
}

#[component]
pub fn Predict() -> Element {
    rsx! { Shell { PredictPage {} } }
}

#[component]
pub fn Costs() -> Element {
    rsx! { Shell { CostsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
