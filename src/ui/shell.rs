use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app__header",
                div { class: "app__brand",
                    span { class: "app__logo", "🛩️" }
                    div {
                        h1 { class: "app__title", "{APP_NAME}" }
                        p { class: "app__tagline", "Predict C-check downtime and what it costs" }
                    }
                }
                nav { class: "app__nav",
                    NavButton {
                        active: matches!(current_route, Route::Predict {}),
                        onclick: move |_| { nav.push(Route::Predict {}); },
                        label: "📈 Predict Duration",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Costs {}),
                        onclick: move |_| { nav.push(Route::Costs {}); },
                        label: "💰 Cost-Benefit",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "⚙️",
                    }
                }
            }
            main { class: "app__main",
                {children}
            }
            footer { class: "app__footer", "{version_label()}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button nav-button--active" } else { "nav-button" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
