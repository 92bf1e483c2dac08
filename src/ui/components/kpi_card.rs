use dioxus::prelude::*;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    #[props(default)] highlight: bool,
) -> Element {
    let class = if highlight { "kpi-card kpi-card--highlight" } else { "kpi-card" };
    rsx! {
        div {
            class: "{class}",
            h3 { class: "kpi-card__title", "{title}" }
            p { class: "kpi-card__value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-card__description", "{desc}" }
            }
        }
    }
}
