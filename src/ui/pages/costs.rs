//! Cost-benefit analysis of the maintenance downtime.

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        app_state::DEFAULT_MANUAL_DOWNTIME_DAYS, compute_costs, parse_manual_downtime,
        resolve_downtime, AppState, CostBreakdown, CostForm, DowntimeSource, FormError,
        MroRegion, DEPRECIATION_RATE_RANGE, MANUAL_DOWNTIME_RANGE,
    },
    ui::components::{
        cost_table::CostTable,
        field::{range_hint, SelectField, SliderField, TextField},
        kpi_card::KpiCard,
        toast::ToastMessage,
    },
    util::format::format_usd,
};

const UNSPECIFIED_REGION: &str = "Unspecified";

/// Resolves downtime and evaluates the cost breakdown for the current session.
pub fn evaluate_session(state: &AppState) -> Result<(DowntimeSource, CostBreakdown), FormError> {
    // The manual field is only read, and only has to parse, when no prediction exists.
    let manual_days = match state.last_prediction {
        Some(_) => DEFAULT_MANUAL_DOWNTIME_DAYS,
        None => parse_manual_downtime(&state.manual_downtime)?,
    };
    let source = resolve_downtime(state.last_prediction, manual_days);
    let inputs = state.cost_form.parse()?;
    let breakdown = compute_costs(source.days(), state.cost_region, &inputs);
    Ok((source, breakdown))
}

fn region_options() -> Vec<String> {
    MroRegion::ALL
        .iter()
        .map(|region| region.label().to_string())
        .chain(std::iter::once(UNSPECIFIED_REGION.to_string()))
        .collect()
}

fn region_label(region: Option<MroRegion>) -> String {
    region
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| UNSPECIFIED_REGION.to_string())
}

#[component]
pub fn CostsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let snapshot = state.with(|st| st.clone());
    let evaluation = evaluate_session(&snapshot);
    if let Ok((source, breakdown)) = &evaluation {
        tracing::debug!(
            downtime_days = source.days(),
            predicted = source.is_predicted(),
            region = %region_label(snapshot.cost_region),
            total_cost = breakdown.total_cost,
            "evaluated cost breakdown"
        );
    }

    let mut update = move |apply: fn(&mut CostForm, String), value: String| {
        state.with_mut(|st| apply(&mut st.cost_form, value));
        persist_user_state(&state, toasts);
    };

    let predicted_days = snapshot
        .last_prediction
        .map(|p| format!("{:.0}", p.rounded_days()));
    let form = snapshot.cost_form.clone();

    rsx! {
        div { class: "page",
            section { class: "page__intro",
                h2 { "Maintenance Cost-Benefit Analysis" }
                p { class: "muted", "Labor, lost revenue, idle lease and residual value loss over the downtime." }
            }

            section { class: "panel",
                h3 { class: "panel__title", "Downtime" }
                if let Some(days) = predicted_days {
                    div { class: "downtime-banner",
                        p { "Using predicted downtime of {days} days." }
                        button {
                            class: "btn btn--secondary",
                            onclick: move |_| state.with_mut(|st| st.clear_prediction()),
                            "Enter downtime manually"
                        }
                    }
                } else {
                    TextField {
                        label: "Enter Predicted Downtime (Days)".to_string(),
                        value: snapshot.manual_downtime.clone(),
                        hint: Some(format!("{} days, no prediction made this session", range_hint(MANUAL_DOWNTIME_RANGE))),
                        oninput: move |value: String| {
                            state.with_mut(|st| st.manual_downtime = value);
                            persist_user_state(&state, toasts);
                        },
                    }
                }
            }

            section { class: "panel",
                h3 { class: "panel__title", "Cost Inputs" }
                div { class: "form-grid",
                    SelectField {
                        label: "MRO Region (labor rate)".to_string(),
                        options: region_options(),
                        selected: region_label(snapshot.cost_region),
                        onchange: move |value: String| {
                            state.with_mut(|st| st.cost_region = MroRegion::from_label(&value));
                            persist_user_state(&state, toasts);
                        },
                    }
                    TextField {
                        label: "Total Labor Hours (C-Check)".to_string(),
                        value: form.labor_hours.clone(),
                        hint: None,
                        oninput: move |value: String| update(|f, v| f.labor_hours = v, value),
                    }
                    TextField {
                        label: "Lost Revenue per Hour (USD)".to_string(),
                        value: form.lost_revenue_per_hour.clone(),
                        hint: None,
                        oninput: move |value: String| update(|f, v| f.lost_revenue_per_hour = v, value),
                    }
                    TextField {
                        label: "Daily Lease Rate (USD)".to_string(),
                        value: form.lease_rate_daily.clone(),
                        hint: None,
                        oninput: move |value: String| update(|f, v| f.lease_rate_daily = v, value),
                    }
                    TextField {
                        label: "Aircraft Half-Life Value (USD)".to_string(),
                        value: form.half_life_value.clone(),
                        hint: None,
                        oninput: move |value: String| update(|f, v| f.half_life_value = v, value),
                    }
                    SliderField {
                        label: "Annual Depreciation Rate".to_string(),
                        value: form.depreciation_rate_pct.clone(),
                        range: DEPRECIATION_RATE_RANGE,
                        suffix: "%".to_string(),
                        oninput: move |value: String| update(|f, v| f.depreciation_rate_pct = v, value),
                    }
                }
            }

            match evaluation {
                Ok((_, breakdown)) => rsx! {
                    section { class: "kpi-grid",
                        KpiCard {
                            title: "Maintenance Cost".to_string(),
                            value: format_usd(breakdown.maintenance_cost),
                            description: Some("Labor plus 30% materials".to_string()),
                        }
                        KpiCard {
                            title: "Opportunity Cost".to_string(),
                            value: format_usd(breakdown.opportunity_cost),
                            description: Some("Lost revenue while grounded".to_string()),
                        }
                        KpiCard {
                            title: "Lease Loss".to_string(),
                            value: format_usd(breakdown.lease_loss),
                            description: Some("Idle asset lease payments".to_string()),
                        }
                        KpiCard {
                            title: "Residual Value Loss".to_string(),
                            value: format_usd(breakdown.residual_value_loss),
                            description: Some("Depreciation accrued during downtime".to_string()),
                        }
                        KpiCard {
                            title: "Total Estimated Cost".to_string(),
                            value: format_usd(breakdown.total_cost),
                            description: None,
                            highlight: true,
                        }
                    }
                    CostTable { breakdown }
                },
                Err(err) => rsx! {
                    section { class: "panel panel--error",
                        p { "Cannot compute costs: {err}" }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PredictionResult;

    #[test]
    fn manual_downtime_drives_costs_without_prediction() {
        let state = AppState::default();
        let (source, breakdown) = evaluate_session(&state).unwrap();
        assert_eq!(source, DowntimeSource::Manual { days: 17.0 });
        assert_eq!(breakdown.labor_rate, 75.0);
        assert_eq!(breakdown.lease_loss, 17.0 * 85_000.0);
    }

    #[test]
    fn prediction_overrides_invalid_manual_text() {
        let mut state = AppState::default();
        state.manual_downtime = "soon".into();
        assert!(evaluate_session(&state).is_err());

        state.record_prediction(
            PredictionResult {
                duration_days: 22.4535,
            },
            MroRegion::EastAsia,
        );
        let (source, breakdown) = evaluate_session(&state).unwrap();
        assert_eq!(source.days(), 22.0);
        assert_eq!(breakdown.labor_rate, 95.0);
    }

    #[test]
    fn unspecified_region_maps_to_fallback() {
        assert_eq!(MroRegion::from_label(UNSPECIFIED_REGION), None);
        let mut state = AppState::default();
        state.cost_region = None;
        let (_, breakdown) = evaluate_session(&state).unwrap();
        assert_eq!(breakdown.labor_rate, 100.0);
        assert_eq!(region_label(None), UNSPECIFIED_REGION);
        assert_eq!(region_options().len(), 5);
    }

    #[test]
    fn cost_form_errors_surface() {
        let mut state = AppState::default();
        state.cost_form.lease_rate_daily = "lots".into();
        assert!(matches!(
            evaluate_session(&state),
            Err(FormError::NotNumeric { field: "Daily lease rate", .. })
        ));
    }
}
