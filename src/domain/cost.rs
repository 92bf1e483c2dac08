use super::entities::{labor_rate_for, CostBreakdown, CostInputs, MroRegion};

/// Materials are priced as a fixed share of labor.
pub const MATERIAL_FACTOR: f64 = 0.3;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Aggregates the cost of taking the aircraft out of service for `duration_days`.
///
/// `region` of `None` prices labor at the fallback rate. Zero or negative
/// durations are not rejected; the downtime-driven components scale with the
/// sign of the duration.
pub fn compute_costs(
    duration_days: f64,
    region: Option<MroRegion>,
    inputs: &CostInputs,
) -> CostBreakdown {
    let labor_rate = labor_rate_for(region);
    let labor_cost = inputs.labor_hours * labor_rate;
    let material_cost = MATERIAL_FACTOR * labor_cost;
    let maintenance_cost = labor_cost + material_cost;

    let downtime_hours = duration_days * HOURS_PER_DAY;
    let opportunity_cost = downtime_hours * inputs.lost_revenue_per_hour;

    let lease_loss = duration_days * inputs.lease_rate_daily;

    let annual_depreciation = inputs.half_life_value * (inputs.depreciation_rate_pct / 100.0);
    let daily_depreciation = annual_depreciation / DAYS_PER_YEAR;
    let residual_value_loss = duration_days * daily_depreciation;

    let total_cost = maintenance_cost + opportunity_cost + lease_loss + residual_value_loss;

    CostBreakdown {
        maintenance_cost,
        opportunity_cost,
        lease_loss,
        residual_value_loss,
        total_cost,
        labor_rate,
        labor_cost,
        material_cost,
        downtime_hours,
        annual_depreciation,
        daily_depreciation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CostComponent, FALLBACK_LABOR_RATE};

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn middle_east_reference_scenario() {
        let breakdown = compute_costs(17.0, Some(MroRegion::MiddleEast), &CostInputs::default());

        assert_eq!(breakdown.labor_rate, 75.0);
        assert_close(breakdown.labor_cost, 375_000.0);
        assert_close(breakdown.material_cost, 112_500.0);
        assert_close(breakdown.maintenance_cost, 487_500.0);
        assert_close(breakdown.downtime_hours, 408.0);
        assert_close(breakdown.opportunity_cost, 8_568_000.0);
        assert_close(breakdown.lease_loss, 1_445_000.0);
        assert_close(breakdown.annual_depreciation, 1_448_500.0);
        assert_close(breakdown.daily_depreciation, 1_448_500.0 / 365.0);
        assert_close(breakdown.residual_value_loss, 17.0 * 1_448_500.0 / 365.0);
        assert_close(
            breakdown.total_cost,
            487_500.0 + 8_568_000.0 + 1_445_000.0 + 17.0 * 1_448_500.0 / 365.0,
        );
    }

    #[test]
    fn total_is_sum_of_components() {
        for region in MroRegion::ALL.into_iter().map(Some).chain([None]) {
            let breakdown = compute_costs(23.7, region, &CostInputs::default());
            let sum: f64 = CostComponent::ALL
                .iter()
                .map(|component| breakdown.component(*component))
                .sum();
            assert_close(breakdown.total_cost, sum);
            let shares: f64 = CostComponent::ALL
                .iter()
                .map(|component| breakdown.share_of_total(*component))
                .sum();
            assert_close(shares, 1.0);
        }
    }

    #[test]
    fn unmapped_region_uses_fallback_rate() {
        let breakdown = compute_costs(10.0, None, &CostInputs::default());
        assert_eq!(breakdown.labor_rate, FALLBACK_LABOR_RATE);
        assert_close(breakdown.maintenance_cost, 5_000.0 * 100.0 * 1.3);
    }

    #[test]
    fn depreciation_bounds_scale_residual_loss_linearly() {
        let at_rate = |depreciation_rate_pct| {
            let inputs = CostInputs {
                depreciation_rate_pct,
                ..CostInputs::default()
            };
            compute_costs(17.0, Some(MroRegion::Usa), &inputs).residual_value_loss
        };

        let low = at_rate(2.0);
        let mid = at_rate(5.0);
        let high = at_rate(10.0);
        assert_close(low, 28_970_000.0 * 0.02 / 365.0 * 17.0);
        assert_close(high, 28_970_000.0 * 0.10 / 365.0 * 17.0);
        assert_close(high / low, 5.0);
        assert_close(mid / low, 2.5);
    }

    #[test]
    fn zero_duration_leaves_only_maintenance() {
        let breakdown = compute_costs(0.0, Some(MroRegion::EastAsia), &CostInputs::default());
        assert_eq!(breakdown.opportunity_cost, 0.0);
        assert_eq!(breakdown.lease_loss, 0.0);
        assert_eq!(breakdown.residual_value_loss, 0.0);
        assert_close(breakdown.total_cost, 5_000.0 * 95.0 * 1.3);
    }

    #[test]
    fn negative_duration_is_signed_not_rejected() {
        let breakdown = compute_costs(-2.0, Some(MroRegion::SeAsia), &CostInputs::default());
        assert_close(breakdown.opportunity_cost, -48.0 * 21_000.0);
        assert_close(breakdown.lease_loss, -170_000.0);
        assert!(breakdown.residual_value_loss < 0.0);
        assert!(breakdown.maintenance_cost > 0.0);
    }
}
