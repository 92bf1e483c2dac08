use dioxus::prelude::*;

use crate::domain::{CostBreakdown, CostComponent};
use crate::util::format::{format_percent, format_usd};

#[derive(Clone, PartialEq)]
struct CostRow {
    label: &'static str,
    amount: String,
    share: String,
    detail: String,
}

fn rows_for(breakdown: &CostBreakdown) -> Vec<CostRow> {
    CostComponent::ALL
        .iter()
        .map(|component| CostRow {
            label: component.label(),
            amount: format_usd(breakdown.component(*component)),
            share: format_percent(breakdown.share_of_total(*component)),
            detail: component_detail(*component, breakdown),
        })
        .collect()
}

fn component_detail(component: CostComponent, breakdown: &CostBreakdown) -> String {
    match component {
        CostComponent::Maintenance => format!(
            "labor {} at ${:.0}/h + materials {}",
            format_usd(breakdown.labor_cost),
            breakdown.labor_rate,
            format_usd(breakdown.material_cost)
        ),
        CostComponent::Opportunity => format!("{:.0} downtime hours", breakdown.downtime_hours),
        CostComponent::Lease => "daily lease rate over the downtime".to_string(),
        CostComponent::ResidualValue => format!(
            "{} per day of {} annual depreciation",
            format_usd(breakdown.daily_depreciation),
            format_usd(breakdown.annual_depreciation)
        ),
    }
}

#[component]
pub fn CostTable(breakdown: CostBreakdown) -> Element {
    let rows = rows_for(&breakdown);
    let total = format_usd(breakdown.total_cost);

    rsx! {
        div {
            class: "table-container",
            table {
                class: "cost-table",
                thead {
                    tr {
                        th { "Component" }
                        th { class: "numeric", "Amount" }
                        th { class: "numeric", "Share" }
                        th { "Basis" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            td { "{row.label}" }
                            td { class: "numeric", "{row.amount}" }
                            td { class: "numeric", "{row.share}" }
                            td { class: "muted", "{row.detail}" }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { "Total Estimated Cost" }
                        td { class: "numeric", "{total}" }
                        td { class: "numeric", "100.0%" }
                        td {}
                    }
                }
            }
        }
    }
}
