//! Text-field parsing for the input forms. Widget range clamps happen here and
//! nowhere else; the estimator and cost aggregator take whatever they are given.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{
    AircraftProfile, AircraftType, CostInputs, InputRange, MroRegion, AGE_RANGE,
    ANNUAL_CYCLES_RANGE, ANNUAL_HOURS_RANGE, CUMULATIVE_CYCLES_RANGE, DAILY_UTILISATION_RANGE,
    DEPRECIATION_RATE_RANGE, MANUAL_DOWNTIME_RANGE,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{field} is required")]
    Empty { field: &'static str },
    #[error("{field} must be a number (got \"{value}\")")]
    NotNumeric { field: &'static str, value: String },
    #[error("{field} must be a whole number (got \"{value}\")")]
    NotInteger { field: &'static str, value: String },
    #[error("unknown aircraft type \"{0}\"")]
    UnknownAircraftType(String),
    #[error("unknown MRO region \"{0}\"")]
    UnknownRegion(String),
}

/// Raw contents of the prediction form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub aircraft_type: String,
    pub region: String,
    pub age_years: String,
    pub cumulative_flight_cycles: String,
    pub avg_annual_cycles: String,
    pub avg_annual_hours: String,
    pub avg_daily_utilisation_hrs: String,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::from_profile(&AircraftProfile::default(), MroRegion::MiddleEast)
    }
}

impl PredictionForm {
    pub fn from_profile(profile: &AircraftProfile, region: MroRegion) -> Self {
        Self {
            aircraft_type: profile.aircraft_type.label().to_string(),
            region: region.label().to_string(),
            age_years: profile.age_years.to_string(),
            cumulative_flight_cycles: profile.cumulative_flight_cycles.to_string(),
            avg_annual_cycles: profile.avg_annual_cycles.to_string(),
            avg_annual_hours: profile.avg_annual_hours.to_string(),
            avg_daily_utilisation_hrs: profile.avg_daily_utilisation_hrs.to_string(),
        }
    }

    pub fn parse(&self) -> Result<(AircraftProfile, MroRegion), FormError> {
        let aircraft_type = AircraftType::from_label(&self.aircraft_type)
            .ok_or_else(|| FormError::UnknownAircraftType(self.aircraft_type.clone()))?;
        let region = MroRegion::from_label(&self.region)
            .ok_or_else(|| FormError::UnknownRegion(self.region.clone()))?;

        let profile = AircraftProfile {
            aircraft_type,
            age_years: parse_clamped("Aircraft age", &self.age_years, AGE_RANGE)?,
            cumulative_flight_cycles: parse_whole(
                "Cumulative flight cycles",
                &self.cumulative_flight_cycles,
                CUMULATIVE_CYCLES_RANGE,
            )?,
            avg_annual_cycles: parse_whole(
                "Average annual flight cycles",
                &self.avg_annual_cycles,
                ANNUAL_CYCLES_RANGE,
            )?,
            avg_annual_hours: parse_whole(
                "Average annual flight hours",
                &self.avg_annual_hours,
                ANNUAL_HOURS_RANGE,
            )?,
            avg_daily_utilisation_hrs: parse_clamped(
                "Average daily utilisation",
                &self.avg_daily_utilisation_hrs,
                DAILY_UTILISATION_RANGE,
            )?,
        };

        Ok((profile, region))
    }
}

/// Raw contents of the cost-benefit form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostForm {
    pub labor_hours: String,
    pub lost_revenue_per_hour: String,
    pub lease_rate_daily: String,
    pub half_life_value: String,
    pub depreciation_rate_pct: String,
}

impl Default for CostForm {
    fn default() -> Self {
        Self::from_inputs(&CostInputs::default())
    }
}

impl CostForm {
    pub fn from_inputs(inputs: &CostInputs) -> Self {
        Self {
            labor_hours: format!("{:.0}", inputs.labor_hours),
            lost_revenue_per_hour: format!("{:.0}", inputs.lost_revenue_per_hour),
            lease_rate_daily: format!("{:.0}", inputs.lease_rate_daily),
            half_life_value: format!("{:.0}", inputs.half_life_value),
            depreciation_rate_pct: format!("{:.0}", inputs.depreciation_rate_pct),
        }
    }

    pub fn parse(&self) -> Result<CostInputs, FormError> {
        Ok(CostInputs {
            labor_hours: parse_number("Total labor hours", &self.labor_hours)?,
            lost_revenue_per_hour: parse_number("Lost revenue per hour", &self.lost_revenue_per_hour)?,
            lease_rate_daily: parse_number("Daily lease rate", &self.lease_rate_daily)?,
            half_life_value: parse_number("Aircraft half-life value", &self.half_life_value)?,
            depreciation_rate_pct: parse_clamped(
                "Annual depreciation rate",
                &self.depreciation_rate_pct,
                DEPRECIATION_RATE_RANGE,
            )?,
        })
    }
}

/// Downtime typed by the user when no prediction exists in the session.
pub fn parse_manual_downtime(input: &str) -> Result<f64, FormError> {
    parse_whole::<u32>("Predicted downtime", input, MANUAL_DOWNTIME_RANGE).map(f64::from)
}

/// Accepts plain numbers as well as thousands separators ("28,970,000").
fn parse_number(field: &'static str, input: &str) -> Result<f64, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormError::Empty { field });
    }
    let cleaned: String = trimmed.chars().filter(|ch| *ch != ',' && *ch != '_').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FormError::NotNumeric {
            field,
            value: trimmed.to_string(),
        })
}

fn parse_clamped(field: &'static str, input: &str, range: InputRange) -> Result<f64, FormError> {
    parse_number(field, input).map(|value| range.clamp(value))
}

fn parse_whole<T>(field: &'static str, input: &str, range: InputRange) -> Result<T, FormError>
where
    T: TryFrom<u64>,
{
    let value = parse_number(field, input)?;
    if value.fract() != 0.0 {
        return Err(FormError::NotInteger {
            field,
            value: input.trim().to_string(),
        });
    }
    let clamped = range.clamp(value) as u64;
    T::try_from(clamped).map_err(|_| FormError::NotInteger {
        field,
        value: input.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prediction_form_round_trips_default_profile() {
        let (profile, region) = PredictionForm::default().parse().unwrap();
        assert_eq!(profile, AircraftProfile::default());
        assert_eq!(region, MroRegion::MiddleEast);
    }

    #[test]
    fn form_rebuilt_from_profile_keeps_full_precision() {
        let profile = AircraftProfile {
            aircraft_type: AircraftType::A350,
            age_years: 12.35,
            cumulative_flight_cycles: 20_001,
            avg_annual_cycles: 1_234,
            avg_annual_hours: 4_321,
            avg_daily_utilisation_hrs: 12.25,
        };
        let form = PredictionForm::from_profile(&profile, MroRegion::SeAsia);
        assert_eq!(form.age_years, "12.35");
        assert_eq!(form.avg_daily_utilisation_hrs, "12.25");
        assert_eq!(form.parse(), Ok((profile, MroRegion::SeAsia)));
    }

    #[test]
    fn prediction_form_clamps_to_widget_ranges() {
        let form = PredictionForm {
            aircraft_type: "787".into(),
            region: "USA".into(),
            age_years: "55".into(),
            cumulative_flight_cycles: "1000".into(),
            avg_annual_cycles: "2500".into(),
            avg_annual_hours: "500".into(),
            avg_daily_utilisation_hrs: "0".into(),
        };
        let (profile, region) = form.parse().unwrap();
        assert_eq!(region, MroRegion::Usa);
        assert_eq!(profile.aircraft_type, AircraftType::B787);
        assert_eq!(profile.age_years, 40.0);
        assert_eq!(profile.cumulative_flight_cycles, 5_000);
        assert_eq!(profile.avg_annual_cycles, 2_000);
        assert_eq!(profile.avg_annual_hours, 1_000);
        assert_eq!(profile.avg_daily_utilisation_hrs, 1.0);
    }

    #[test]
    fn prediction_form_reports_bad_fields() {
        let mut form = PredictionForm::default();
        form.age_years = "twelve".into();
        assert!(matches!(
            form.parse(),
            Err(FormError::NotNumeric { field: "Aircraft age", .. })
        ));

        let mut form = PredictionForm::default();
        form.avg_annual_cycles = "1200.5".into();
        assert!(matches!(form.parse(), Err(FormError::NotInteger { .. })));

        let mut form = PredictionForm::default();
        form.avg_annual_hours = "   ".into();
        assert_eq!(
            form.parse(),
            Err(FormError::Empty {
                field: "Average annual flight hours"
            })
        );

        let mut form = PredictionForm::default();
        form.aircraft_type = "A380".into();
        assert_eq!(
            form.parse(),
            Err(FormError::UnknownAircraftType("A380".into()))
        );

        let mut form = PredictionForm::default();
        form.region = "Europe".into();
        assert_eq!(form.parse(), Err(FormError::UnknownRegion("Europe".into())));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut form = PredictionForm::default();
        form.avg_daily_utilisation_hrs = "NaN".into();
        assert!(matches!(form.parse(), Err(FormError::NotNumeric { .. })));
    }

    #[test]
    fn cost_form_accepts_thousands_separators() {
        let form = CostForm {
            half_life_value: "28,970,000".into(),
            ..CostForm::default()
        };
        assert_eq!(form.parse().unwrap(), CostInputs::default());
    }

    #[test]
    fn cost_form_clamps_only_depreciation() {
        let form = CostForm {
            labor_hours: "-10".into(),
            depreciation_rate_pct: "25".into(),
            ..CostForm::default()
        };
        let inputs = form.parse().unwrap();
        assert_eq!(inputs.labor_hours, -10.0);
        assert_eq!(inputs.depreciation_rate_pct, 10.0);
    }

    #[test]
    fn manual_downtime_is_whole_days_within_bounds() {
        assert_eq!(parse_manual_downtime("17"), Ok(17.0));
        assert_eq!(parse_manual_downtime("0"), Ok(1.0));
        assert_eq!(parse_manual_downtime("90"), Ok(60.0));
        assert!(matches!(
            parse_manual_downtime("3.5"),
            Err(FormError::NotInteger { .. })
        ));
    }

    #[test]
    fn errors_render_field_names() {
        let err = FormError::NotNumeric {
            field: "Daily lease rate",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "Daily lease rate must be a number (got \"abc\")");
    }
}
