use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ComparisonRecord, NewComparisonRecord, NewScenario, Scenario, ScenarioUpdate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[async_trait]
pub trait ScenarioStore: Send + Sync {
    // Scenarios
    /// Newest first; equal timestamps fall back to the higher id first.
    async fn list_scenarios(&self) -> Result<Vec<Scenario>, RepositoryError>;

    async fn get_scenario(&self, id: i64) -> Result<Scenario, RepositoryError>;

    /// The shared (`user_id IS NULL`) scenario flagged as default, if any.
    async fn find_default_scenario(&self) -> Result<Option<Scenario>, RepositoryError>;

    async fn create_scenario(
        &self,
        scenario: NewScenario,
    ) -> Result<Scenario, RepositoryError>;

    /// Applies `update` to the stored row, bumps `updated_at` and returns
    /// the stored result.
    async fn update_scenario(
        &self,
        id: i64,
        update: &ScenarioUpdate,
    ) -> Result<Scenario, RepositoryError>;

    /// Also removes the scenario's comparison history.
    async fn delete_scenario(&self, id: i64) -> Result<(), RepositoryError>;

    // Comparison history
    async fn record_comparison(
        &self,
        record: NewComparisonRecord,
    ) -> Result<ComparisonRecord, RepositoryError>;

    async fn list_comparison_history(
        &self,
        scenario_id: i64,
        limit: u32,
    ) -> Result<Vec<ComparisonRecord>, RepositoryError>;
}
