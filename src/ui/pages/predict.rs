//! Prediction form: aircraft and MRO inputs in, downtime in days out.

use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, Route},
    domain::{
        entities::{
            AGE_RANGE, ANNUAL_CYCLES_RANGE, ANNUAL_HOURS_RANGE, CUMULATIVE_CYCLES_RANGE,
            DAILY_UTILISATION_RANGE,
        },
        predict, AircraftType, AppState, MroRegion, PredictionForm,
    },
    ui::components::{
        field::{range_hint, SelectField, TextField},
        kpi_card::KpiCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::format::format_days,
};

#[component]
pub fn PredictPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let form = state.with(|st| st.prediction_form.clone());
    let last_prediction = state.with(|st| st.last_prediction);

    let mut update = move |apply: fn(&mut PredictionForm, String), value: String| {
        state.with_mut(|st| apply(&mut st.prediction_form, value));
        persist_user_state(&state, toasts);
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = state.with(|st| st.prediction_form.clone());
        match form.parse() {
            Ok((profile, region)) => {
                let prediction = predict(&profile, region);
                tracing::debug!(
                    ?profile,
                    region = region.label(),
                    duration_days = prediction.duration_days,
                    "predicted MRO duration"
                );
                state.with_mut(|st| {
                    st.prediction_form = PredictionForm::from_profile(&profile, region);
                    st.record_prediction(prediction, region);
                });
                persist_user_state(&state, toasts);
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!(
                        "Predicted MRO duration: {} days",
                        format_days(prediction.duration_days)
                    ),
                );
            }
            Err(err) => {
                tracing::debug!(%err, "rejected prediction form");
                push_toast(toasts, ToastKind::Error, err.to_string());
            }
        }
    };

    let type_options = AircraftType::ALL
        .iter()
        .map(|kind| kind.label().to_string())
        .collect::<Vec<_>>();
    let region_options = MroRegion::ALL
        .iter()
        .map(|region| region.label().to_string())
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page",
            section { class: "page__intro",
                h2 { "Predict MRO Duration" }
                p { class: "muted", "Estimate heavy-maintenance downtime from the fitted regression model." }
            }

            form {
                class: "panel",
                onsubmit: on_submit,
                h3 { class: "panel__title", "✈️ Aircraft & MRO Inputs" }
                div { class: "form-grid",
                    SelectField {
                        label: "Aircraft Type".to_string(),
                        options: type_options,
                        selected: form.aircraft_type.clone(),
                        onchange: move |value: String| update(|f, v| f.aircraft_type = v, value),
                    }
                    SelectField {
                        label: "MRO Region".to_string(),
                        options: region_options,
                        selected: form.region.clone(),
                        onchange: move |value: String| update(|f, v| f.region = v, value),
                    }
                    TextField {
                        label: "Aircraft Age (Years)".to_string(),
                        value: form.age_years.clone(),
                        hint: Some(range_hint(AGE_RANGE)),
                        oninput: move |value: String| update(|f, v| f.age_years = v, value),
                    }
                    TextField {
                        label: "Cumulative Flight Cycles".to_string(),
                        value: form.cumulative_flight_cycles.clone(),
                        hint: Some(range_hint(CUMULATIVE_CYCLES_RANGE)),
                        oninput: move |value: String| update(|f, v| f.cumulative_flight_cycles = v, value),
                    }
                    TextField {
                        label: "Average Annual Flight Cycles".to_string(),
                        value: form.avg_annual_cycles.clone(),
                        hint: Some(range_hint(ANNUAL_CYCLES_RANGE)),
                        oninput: move |value: String| update(|f, v| f.avg_annual_cycles = v, value),
                    }
                    TextField {
                        label: "Average Annual Flight Hours".to_string(),
                        value: form.avg_annual_hours.clone(),
                        hint: Some(range_hint(ANNUAL_HOURS_RANGE)),
                        oninput: move |value: String| update(|f, v| f.avg_annual_hours = v, value),
                    }
                    TextField {
                        label: "Average Daily Utilisation (hrs)".to_string(),
                        value: form.avg_daily_utilisation_hrs.clone(),
                        hint: Some(range_hint(DAILY_UTILISATION_RANGE)),
                        oninput: move |value: String| update(|f, v| f.avg_daily_utilisation_hrs = v, value),
                    }
                }
                div { class: "panel__actions",
                    button { class: "btn btn--primary", r#type: "submit", "Predict MRO Duration" }
                }
            }

            if let Some(prediction) = last_prediction {
                section { class: "kpi-grid",
                    KpiCard {
                        title: "Predicted MRO Duration".to_string(),
                        value: format!("{} days", format_days(prediction.duration_days)),
                        description: Some(format!(
                            "Cost analysis uses {:.0} whole days",
                            prediction.rounded_days()
                        )),
                        highlight: true,
                    }
                    div { class: "kpi-card kpi-card--action",
                        p { class: "muted", "Carry this downtime into the cost-benefit analysis." }
                        button {
                            class: "btn btn--secondary",
                            onclick: move |_| { nav.push(Route::Costs {}); },
                            "Open Cost-Benefit →"
                        }
                    }
                }
            }
        }
    }
}
