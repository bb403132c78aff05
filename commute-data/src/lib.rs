//! CSV import and export of scenarios.

mod loader;

pub use loader::{LoadSummary, ScenarioLoader, ScenarioLoaderError, ScenarioRecord};
