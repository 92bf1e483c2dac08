//! Labelled form controls shared by the input pages.

use dioxus::prelude::*;

use crate::domain::InputRange;

#[component]
pub fn TextField(
    label: String,
    value: String,
    hint: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field__label", "{label}" }
            input {
                class: "field__input",
                inputmode: "decimal",
                value: value,
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(hint) = hint {
                p { class: "field__hint", "{hint}" }
            }
        }
    }
}

#[component]
pub fn SelectField(
    label: String,
    options: Vec<String>,
    selected: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field__label", "{label}" }
            select {
                class: "field__input",
                value: selected.clone(),
                onchange: move |evt| onchange.call(evt.value()),
                for option_label in options {
                    option {
                        value: option_label.clone(),
                        selected: option_label == selected,
                        "{option_label}"
                    }
                }
            }
        }
    }
}

/// Integer slider bound to an [`InputRange`].
#[component]
pub fn SliderField(
    label: String,
    value: String,
    range: InputRange,
    suffix: String,
    oninput: EventHandler<String>,
) -> Element {
    let min = format!("{:.0}", range.min);
    let max = format!("{:.0}", range.max);
    rsx! {
        div { class: "field",
            label { class: "field__label", "{label}: {value}{suffix}" }
            input {
                class: "field__slider",
                r#type: "range",
                min: min,
                max: max,
                step: "1",
                value: value,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

/// Hint text describing a widget's bounds.
pub fn range_hint(range: InputRange) -> String {
    format!("{} to {}", trim_number(range.min), trim_number(range.max))
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
