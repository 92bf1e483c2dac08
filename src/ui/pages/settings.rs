use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, MroRegion, FALLBACK_LABOR_RATE, MODEL_COEFFICIENTS},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let has_prediction = state.with(|st| st.last_prediction.is_some());

    let on_reset = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.reset_forms());
            persist_user_state(&state, toasts);
            tracing::info!("form inputs reset to defaults");
            push_toast(toasts, ToastKind::Info, "Restored default form inputs.");
        }
    };

    let on_clear_prediction = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.clear_prediction());
            push_toast(
                toasts,
                ToastKind::Info,
                "Cleared the session prediction. The cost page now uses manual downtime.",
            );
        }
    };

    let labor_rates = MroRegion::ALL
        .iter()
        .map(|region| (region.label(), format!("${:.0}/h", region.attributes().labor_rate)))
        .chain(std::iter::once((
            "Other / unspecified",
            format!("${FALLBACK_LABOR_RATE:.0}/h"),
        )))
        .collect::<Vec<_>>();

    let coefficients = MODEL_COEFFICIENTS
        .named_terms()
        .into_iter()
        .map(|(name, value)| (name, format!("{value:+}")))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page",
            section { class: "panel",
                h3 { class: "panel__title", "Session" }
                p { class: "muted", "Form inputs are saved between launches. Predictions are kept for this session only." }
                div { class: "panel__actions",
                    button { class: "btn btn--primary", onclick: on_reset, "Reset Defaults" }
                    button {
                        class: "btn btn--secondary",
                        disabled: !has_prediction,
                        onclick: on_clear_prediction,
                        "Clear Prediction"
                    }
                }
            }

            section { class: "panel",
                h3 { class: "panel__title", "Labor Rates" }
                ul { class: "key-value-list",
                    for (label, rate) in labor_rates {
                        li {
                            span { "{label}" }
                            span { class: "numeric", "{rate}" }
                        }
                    }
                }
            }

            section { class: "panel",
                h3 { class: "panel__title", "Duration Model Coefficients" }
                p { class: "muted", "Fixed coefficients of the fitted regression. East Asia and the 777 are the baseline." }
                ul { class: "key-value-list",
                    for (name, value) in coefficients {
                        li {
                            span { "{name}" }
                            span { class: "numeric", "{value}" }
                        }
                    }
                }
            }

            section { class: "panel panel--centered",
                h3 { class: "panel__title", "About" }
                p { "{APP_NAME}" }
                p { class: "muted", "{version_label()}" }
            }
        }
    }
}
