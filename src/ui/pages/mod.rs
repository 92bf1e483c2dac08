pub mod costs;
pub mod predict;
pub mod settings;

pub use costs::CostsPage;
pub use predict::PredictPage;
pub use settings::SettingsPage;
