use serde::{Deserialize, Serialize};

use super::entities::{MroRegion, PredictionResult};
use super::forms::{CostForm, PredictionForm};

/// Downtime used when the session has no prediction yet.
pub const DEFAULT_MANUAL_DOWNTIME_DAYS: f64 = 17.0;

#[derive(Clone, Debug)]
pub struct AppState {
    pub prediction_form: PredictionForm,
    pub cost_form: CostForm,
    /// Text of the manual downtime field on the cost page.
    pub manual_downtime: String,
    /// `None` prices labor at the fallback rate.
    pub cost_region: Option<MroRegion>,
    /// Latest prediction of this session. Never persisted.
    pub last_prediction: Option<PredictionResult>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            prediction_form: PredictionForm::default(),
            cost_form: CostForm::default(),
            manual_downtime: format!("{DEFAULT_MANUAL_DOWNTIME_DAYS:.0}"),
            cost_region: Some(MroRegion::MiddleEast),
            last_prediction: None,
        }
    }
}

impl AppState {
    /// Stores a fresh prediction and aligns the cost page with the region it was made for.
    pub fn record_prediction(&mut self, prediction: PredictionResult, region: MroRegion) {
        self.last_prediction = Some(prediction);
        self.cost_region = Some(region);
    }

    pub fn clear_prediction(&mut self) {
        self.last_prediction = None;
    }

    pub fn reset_forms(&mut self) {
        let defaults = AppState::default();
        self.prediction_form = defaults.prediction_form;
        self.cost_form = defaults.cost_form;
        self.manual_downtime = defaults.manual_downtime;
        self.cost_region = defaults.cost_region;
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.prediction_form = persisted.prediction_form;
        self.cost_form = persisted.cost_form;
        self.manual_downtime = persisted.manual_downtime;
        self.cost_region = persisted.cost_region;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            prediction_form: self.prediction_form.clone(),
            cost_form: self.cost_form.clone(),
            manual_downtime: self.manual_downtime.clone(),
            cost_region: self.cost_region,
        }
    }
}

/// Where the downtime fed into the cost aggregator came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DowntimeSource {
    Predicted { days: f64 },
    Manual { days: f64 },
}

impl DowntimeSource {
    pub fn days(&self) -> f64 {
        match self {
            DowntimeSource::Predicted { days } | DowntimeSource::Manual { days } => *days,
        }
    }

    pub fn is_predicted(&self) -> bool {
        matches!(self, DowntimeSource::Predicted { .. })
    }
}

/// A prediction, when present, wins and is rounded to whole days.
pub fn resolve_downtime(prediction: Option<PredictionResult>, manual_days: f64) -> DowntimeSource {
    match prediction {
        Some(result) => DowntimeSource::Predicted {
            days: result.rounded_days(),
        },
        None => DowntimeSource::Manual { days: manual_days },
    }
}

/// Form inputs saved between launches. Predictions and results are not stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub prediction_form: PredictionForm,
    #[serde(default)]
    pub cost_form: CostForm,
    #[serde(default = "default_manual_downtime")]
    pub manual_downtime: String,
    #[serde(default = "default_cost_region")]
    pub cost_region: Option<MroRegion>,
}

impl Default for PersistedState {
    fn default() -> Self {
        AppState::default().to_persisted()
    }
}

fn default_manual_downtime() -> String {
    AppState::default().manual_downtime
}

fn default_cost_region() -> Option<MroRegion> {
    AppState::default().cost_region
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_takes_precedence_over_manual_value() {
        let prediction = PredictionResult {
            duration_days: 22.4535,
        };
        let source = resolve_downtime(Some(prediction), 17.0);
        assert_eq!(source, DowntimeSource::Predicted { days: 22.0 });
        assert!(source.is_predicted());
    }

    #[test]
    fn manual_value_used_without_prediction() {
        let source = resolve_downtime(None, 17.0);
        assert_eq!(source, DowntimeSource::Manual { days: 17.0 });
        assert_eq!(source.days(), 17.0);
        assert!(!source.is_predicted());
    }

    #[test]
    fn recording_prediction_moves_cost_region() {
        let mut state = AppState::default();
        state.cost_region = None;
        state.record_prediction(PredictionResult { duration_days: 9.2 }, MroRegion::Usa);
        assert_eq!(state.cost_region, Some(MroRegion::Usa));
        assert_eq!(state.last_prediction.map(|p| p.rounded_days()), Some(9.0));

        state.clear_prediction();
        assert!(state.last_prediction.is_none());
    }

    #[test]
    fn persisted_state_excludes_prediction() {
        let mut state = AppState::default();
        state.manual_downtime = "30".into();
        state.record_prediction(PredictionResult { duration_days: 12.0 }, MroRegion::SeAsia);

        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        assert!(!json.contains("duration_days"));

        let mut restored = AppState::default();
        restored.apply_persisted(serde_json::from_str(&json).unwrap());
        assert_eq!(restored.manual_downtime, "30");
        assert_eq!(restored.cost_region, Some(MroRegion::SeAsia));
        assert!(restored.last_prediction.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let persisted: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(persisted.manual_downtime, "17");
        assert_eq!(persisted.cost_region, Some(MroRegion::MiddleEast));
        assert_eq!(persisted.cost_form, CostForm::default());
    }

    #[test]
    fn reset_keeps_session_prediction() {
        let mut state = AppState::default();
        state.cost_form.labor_hours = "1".into();
        state.record_prediction(PredictionResult { duration_days: 5.0 }, MroRegion::Usa);
        state.reset_forms();
        assert_eq!(state.cost_form, CostForm::default());
        assert!(state.last_prediction.is_some());
    }
}
