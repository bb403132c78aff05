pub mod calculations;
pub mod db;
pub mod format;
pub mod models;
pub mod presets;
pub mod scenarios;

pub use db::repository::{RepositoryError, ScenarioStore};
pub use models::*;
