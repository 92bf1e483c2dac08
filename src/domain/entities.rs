use serde::{Deserialize, Serialize};

/// Labor rate (USD/hour) used when the MRO region is not known.
pub const FALLBACK_LABOR_RATE: f64 = 100.0;

/// Aircraft families the regression model was fitted on. The 777 is the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftType {
    #[default]
    #[serde(rename = "777")]
    B777,
    #[serde(rename = "787")]
    B787,
    #[serde(rename = "A350")]
    A350,
}

impl AircraftType {
    pub const ALL: [AircraftType; 3] = [AircraftType::B777, AircraftType::B787, AircraftType::A350];

    pub fn label(&self) -> &'static str {
        match self {
            AircraftType::B777 => "777",
            AircraftType::B787 => "787",
            AircraftType::A350 => "A350",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }

    /// One-hot encoding against the 777 baseline.
    pub fn dummies(&self) -> TypeDummies {
        match self {
            AircraftType::B777 => TypeDummies {
                type_787: 0.0,
                type_a350: 0.0,
            },
            AircraftType::B787 => TypeDummies {
                type_787: 1.0,
                type_a350: 0.0,
            },
            AircraftType::A350 => TypeDummies {
                type_787: 0.0,
                type_a350: 1.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeDummies {
    pub type_787: f64,
    pub type_a350: f64,
}

/// Region where the maintenance event is performed. East Asia is the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MroRegion {
    MiddleEast,
    EastAsia,
    SeAsia,
    Usa,
}

impl MroRegion {
    pub const ALL: [MroRegion; 4] = [
        MroRegion::MiddleEast,
        MroRegion::EastAsia,
        MroRegion::SeAsia,
        MroRegion::Usa,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MroRegion::MiddleEast => "Middle East",
            MroRegion::EastAsia => "East Asia",
            MroRegion::SeAsia => "SE Asia",
            MroRegion::Usa => "USA",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.label().eq_ignore_ascii_case(label.trim()))
    }

    /// The canonical attribute row for this region. Both the duration model
    /// and the cost aggregator read from here.
    pub fn attributes(&self) -> RegionAttributes {
        match self {
            MroRegion::MiddleEast => RegionAttributes {
                labor_rate: 75.0,
                region_me: 1.0,
                region_se: 0.0,
                region_usa: 0.0,
            },
            MroRegion::EastAsia => RegionAttributes {
                labor_rate: 95.0,
                region_me: 0.0,
                region_se: 0.0,
                region_usa: 0.0,
            },
            MroRegion::SeAsia => RegionAttributes {
                labor_rate: 85.0,
                region_me: 0.0,
                region_se: 1.0,
                region_usa: 0.0,
            },
            MroRegion::Usa => RegionAttributes {
                labor_rate: 120.0,
                region_me: 0.0,
                region_se: 0.0,
                region_usa: 1.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionAttributes {
    /// USD per labor hour.
    pub labor_rate: f64,
    pub region_me: f64,
    pub region_se: f64,
    pub region_usa: f64,
}

/// Hourly labor rate for a region, falling back to [`FALLBACK_LABOR_RATE`].
pub fn labor_rate_for(region: Option<MroRegion>) -> f64 {
    region
        .map(|r| r.attributes().labor_rate)
        .unwrap_or(FALLBACK_LABOR_RATE)
}

/// Inclusive bounds enforced by an input widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const AGE_RANGE: InputRange = InputRange::new(0.0, 40.0);
pub const CUMULATIVE_CYCLES_RANGE: InputRange = InputRange::new(5_000.0, 60_000.0);
pub const ANNUAL_CYCLES_RANGE: InputRange = InputRange::new(100.0, 2_000.0);
pub const ANNUAL_HOURS_RANGE: InputRange = InputRange::new(1_000.0, 7_000.0);
pub const DAILY_UTILISATION_RANGE: InputRange = InputRange::new(1.0, 24.0);
pub const MANUAL_DOWNTIME_RANGE: InputRange = InputRange::new(1.0, 60.0);
pub const DEPRECIATION_RATE_RANGE: InputRange = InputRange::new(2.0, 10.0);

/// Aircraft inputs for a single duration prediction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub aircraft_type: AircraftType,
    pub age_years: f64,
    pub cumulative_flight_cycles: u32,
    pub avg_annual_cycles: u32,
    pub avg_annual_hours: u32,
    pub avg_daily_utilisation_hrs: f64,
}

impl Default for AircraftProfile {
    fn default() -> Self {
        Self {
            aircraft_type: AircraftType::B777,
            age_years: 12.0,
            cumulative_flight_cycles: 20_000,
            avg_annual_cycles: 1_200,
            avg_annual_hours: 4_200,
            avg_daily_utilisation_hrs: 12.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub duration_days: f64,
}

impl PredictionResult {
    /// Whole days handed to the cost aggregator. Ties round to even.
    pub fn rounded_days(&self) -> f64 {
        self.duration_days.round_ties_even()
    }
}

/// Monetary inputs of the cost-benefit analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    pub labor_hours: f64,
    pub lost_revenue_per_hour: f64,
    pub lease_rate_daily: f64,
    pub half_life_value: f64,
    pub depreciation_rate_pct: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            labor_hours: 5_000.0,
            lost_revenue_per_hour: 21_000.0,
            lease_rate_daily: 85_000.0,
            half_life_value: 28_970_000.0,
            depreciation_rate_pct: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CostComponent {
    Maintenance,
    Opportunity,
    Lease,
    ResidualValue,
}

impl CostComponent {
    pub const ALL: [CostComponent; 4] = [
        CostComponent::Maintenance,
        CostComponent::Opportunity,
        CostComponent::Lease,
        CostComponent::ResidualValue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostComponent::Maintenance => "Maintenance Cost",
            CostComponent::Opportunity => "Opportunity Cost (Lost Revenue)",
            CostComponent::Lease => "Lease Loss (Idle Asset)",
            CostComponent::ResidualValue => "Residual Value Loss",
        }
    }
}

/// Result of the cost aggregation. `total_cost` is the sum of the four components;
/// the remaining fields are the intermediates it was built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub maintenance_cost: f64,
    pub opportunity_cost: f64,
    pub lease_loss: f64,
    pub residual_value_loss: f64,
    pub total_cost: f64,
    pub labor_rate: f64,
    pub labor_cost: f64,
    pub material_cost: f64,
    pub downtime_hours: f64,
    pub annual_depreciation: f64,
    pub daily_depreciation: f64,
}

impl CostBreakdown {
    pub fn component(&self, component: CostComponent) -> f64 {
        match component {
            CostComponent::Maintenance => self.maintenance_cost,
            CostComponent::Opportunity => self.opportunity_cost,
            CostComponent::Lease => self.lease_loss,
            CostComponent::ResidualValue => self.residual_value_loss,
        }
    }

    /// Fraction of the total attributable to `component`, 0 when the total is 0.
    pub fn share_of_total(&self, component: CostComponent) -> f64 {
        if self.total_cost == 0.0 {
            0.0
        } else {
            self.component(component) / self.total_cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_groups_are_mutually_exclusive() {
        for kind in AircraftType::ALL {
            for region in MroRegion::ALL {
                let t = kind.dummies();
                let r = region.attributes();
                let type_active = t.type_787 + t.type_a350;
                let region_active = r.region_me + r.region_se + r.region_usa;
                assert!(type_active <= 1.0, "{kind:?}/{region:?}");
                assert!(region_active <= 1.0, "{kind:?}/{region:?}");
                assert_eq!(type_active == 0.0, kind == AircraftType::B777);
                assert_eq!(region_active == 0.0, region == MroRegion::EastAsia);
            }
        }
    }

    #[test]
    fn labor_rates_match_region_table() {
        assert_eq!(labor_rate_for(Some(MroRegion::MiddleEast)), 75.0);
        assert_eq!(labor_rate_for(Some(MroRegion::EastAsia)), 95.0);
        assert_eq!(labor_rate_for(Some(MroRegion::SeAsia)), 85.0);
        assert_eq!(labor_rate_for(Some(MroRegion::Usa)), 120.0);
        assert_eq!(labor_rate_for(None), FALLBACK_LABOR_RATE);
    }

    #[test]
    fn labels_resolve_back_to_variants() {
        for kind in AircraftType::ALL {
            assert_eq!(AircraftType::from_label(kind.label()), Some(kind));
        }
        for region in MroRegion::ALL {
            assert_eq!(MroRegion::from_label(region.label()), Some(region));
        }
        assert_eq!(MroRegion::from_label(" se asia "), Some(MroRegion::SeAsia));
        assert_eq!(AircraftType::from_label("747"), None);
        assert_eq!(MroRegion::from_label("Europe"), None);
    }

    #[test]
    fn rounded_days_ties_to_even() {
        let at = |duration_days| PredictionResult { duration_days }.rounded_days();
        assert_eq!(at(22.4535), 22.0);
        assert_eq!(at(16.5), 16.0);
        assert_eq!(at(17.5), 18.0);
        assert_eq!(at(17.51), 18.0);
    }

    #[test]
    fn input_range_clamps_to_widget_bounds() {
        assert_eq!(AGE_RANGE.clamp(-3.0), 0.0);
        assert_eq!(AGE_RANGE.clamp(55.0), 40.0);
        assert_eq!(DEPRECIATION_RATE_RANGE.clamp(5.0), 5.0);
        assert_eq!(MANUAL_DOWNTIME_RANGE.clamp(0.5), 1.0);
    }

    #[test]
    fn shares_are_zero_for_empty_total() {
        let breakdown = CostBreakdown {
            maintenance_cost: 0.0,
            opportunity_cost: 0.0,
            lease_loss: 0.0,
            residual_value_loss: 0.0,
            total_cost: 0.0,
            labor_rate: 95.0,
            labor_cost: 0.0,
            material_cost: 0.0,
            downtime_hours: 0.0,
            annual_depreciation: 0.0,
            daily_depreciation: 0.0,
        };
        for component in CostComponent::ALL {
            assert_eq!(breakdown.share_of_total(component), 0.0);
        }
    }
}
