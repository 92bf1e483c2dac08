//! Domain logic for MRO downtime prediction and cost-benefit analysis lives here.

pub mod app_state;
pub mod cost;
pub mod entities;
pub mod estimator;
pub mod forms;

#[allow(unused_imports)]
pub use app_state::{resolve_downtime, AppState, DowntimeSource, PersistedState};
#[allow(unused_imports)]
pub use cost::compute_costs;
#[allow(unused_imports)]
pub use entities::{
    labor_rate_for, AircraftProfile, AircraftType, CostBreakdown, CostComponent, CostInputs,
    InputRange, MroRegion, PredictionResult, DEPRECIATION_RATE_RANGE, FALLBACK_LABOR_RATE,
    MANUAL_DOWNTIME_RANGE,
};
#[allow(unused_imports)]
pub use estimator::{estimate_duration, predict, RegressionTerms, MODEL_COEFFICIENTS};
#[allow(unused_imports)]
pub use forms::{parse_manual_downtime, CostForm, FormError, PredictionForm};
