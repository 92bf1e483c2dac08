//! Fixed-coefficient linear model for MRO downtime (days).
//!
//! The coefficients come from an externally fitted regression and are kept
//! verbatim. The model performs no validation: inputs outside the widget
//! ranges still produce a number, which may be negative.

use super::entities::{AircraftProfile, AircraftType, MroRegion, PredictionResult};

/// Every predictor the model consumes, after dummies and interactions are expanded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionTerms {
    pub age: f64,
    pub age_squared: f64,
    pub cumulative_fc: f64,
    pub avg_annual_cycles: f64,
    pub avg_annual_hours: f64,
    pub utilisation: f64,
    pub type_787: f64,
    pub type_a350: f64,
    pub region_me: f64,
    pub region_se: f64,
    pub region_usa: f64,
    pub age_x_util: f64,
    pub age_x_787: f64,
    pub age_x_a350: f64,
    pub fc_x_me: f64,
    pub util_x_787: f64,
}

impl RegressionTerms {
    pub fn derive(profile: &AircraftProfile, region: MroRegion) -> Self {
        let age = profile.age_years;
        let utilisation = profile.avg_daily_utilisation_hrs;
        let cumulative_fc = f64::from(profile.cumulative_flight_cycles);
        let kind = profile.aircraft_type.dummies();
        let place = region.attributes();

        Self {
            age,
            age_squared: age * age,
            cumulative_fc,
            avg_annual_cycles: f64::from(profile.avg_annual_cycles),
            avg_annual_hours: f64::from(profile.avg_annual_hours),
            utilisation,
            type_787: kind.type_787,
            type_a350: kind.type_a350,
            region_me: place.region_me,
            region_se: place.region_se,
            region_usa: place.region_usa,
            age_x_util: age * utilisation,
            age_x_787: if profile.aircraft_type == AircraftType::B787 { age } else { 0.0 },
            age_x_a350: if profile.aircraft_type == AircraftType::A350 { age } else { 0.0 },
            fc_x_me: if region == MroRegion::MiddleEast { cumulative_fc } else { 0.0 },
            util_x_787: if profile.aircraft_type == AircraftType::B787 {
                utilisation
            } else {
                0.0
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub intercept: f64,
    pub age: f64,
    pub age_squared: f64,
    pub cumulative_fc: f64,
    pub avg_annual_cycles: f64,
    pub avg_annual_hours: f64,
    pub utilisation: f64,
    pub type_787: f64,
    pub type_a350: f64,
    pub region_me: f64,
    pub region_se: f64,
    pub region_usa: f64,
    pub age_x_util: f64,
    pub age_x_787: f64,
    pub age_x_a350: f64,
    pub fc_x_me: f64,
    pub util_x_787: f64,
}

pub const MODEL_COEFFICIENTS: Coefficients = Coefficients {
    intercept: 18.54,
    age: -1.67,
    age_squared: 0.069,
    cumulative_fc: 0.0007,
    avg_annual_cycles: -0.0078,
    avg_annual_hours: 0.0014,
    utilisation: 0.731,
    type_787: 0.9049,
    type_a350: 0.0468,
    region_me: -9.05,
    region_se: -0.19,
    region_usa: -6.57,
    age_x_util: -0.0376,
    age_x_787: 0.5442,
    age_x_a350: 0.2048,
    fc_x_me: -0.0006,
    util_x_787: -0.6286,
};

impl Coefficients {
    /// Coefficients paired with the name of the term they multiply.
    pub fn named_terms(&self) -> [(&'static str, f64); 17] {
        [
            ("intercept", self.intercept),
            ("age", self.age),
            ("age²", self.age_squared),
            ("cumulative flight cycles", self.cumulative_fc),
            ("annual flight cycles", self.avg_annual_cycles),
            ("annual flight hours", self.avg_annual_hours),
            ("daily utilisation", self.utilisation),
            ("type 787", self.type_787),
            ("type A350", self.type_a350),
            ("region Middle East", self.region_me),
            ("region SE Asia", self.region_se),
            ("region USA", self.region_usa),
            ("age × utilisation", self.age_x_util),
            ("age × 787", self.age_x_787),
            ("age × A350", self.age_x_a350),
            ("cycles × Middle East", self.fc_x_me),
            ("utilisation × 787", self.util_x_787),
        ]
    }

    pub fn evaluate(&self, terms: &RegressionTerms) -> f64 {
        self.intercept
            + self.age * terms.age
            + self.age_squared * terms.age_squared
            + self.cumulative_fc * terms.cumulative_fc
            + self.avg_annual_cycles * terms.avg_annual_cycles
            + self.avg_annual_hours * terms.avg_annual_hours
            + self.utilisation * terms.utilisation
            + self.type_787 * terms.type_787
            + self.type_a350 * terms.type_a350
            + self.region_me * terms.region_me
            + self.region_se * terms.region_se
            + self.region_usa * terms.region_usa
            + self.age_x_util * terms.age_x_util
            + self.age_x_787 * terms.age_x_787
            + self.age_x_a350 * terms.age_x_a350
            + self.fc_x_me * terms.fc_x_me
            + self.util_x_787 * terms.util_x_787
    }
}

/// Predicted downtime in days at full precision.
pub fn estimate_duration(profile: &AircraftProfile, region: MroRegion) -> f64 {
    MODEL_COEFFICIENTS.evaluate(&RegressionTerms::derive(profile, region))
}

pub fn predict(profile: &AircraftProfile, region: MroRegion) -> PredictionResult {
    PredictionResult {
        duration_days: estimate_duration(profile, region),
    }
}
