//! Scenario lifecycle on top of a [`ScenarioStore`].
//!
//! The service seeds a default scenario from a preset the first time the
//! store is empty and stamps every view into the comparison history.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use crate::calculations::ComparisonResult;
use crate::db::{RepositoryError, ScenarioStore};
use crate::models::{
    ComparisonRecord, NewComparisonRecord, NewScenario, Scenario, ScenarioInputs, ScenarioUpdate,
};
use crate::presets::{PresetPicker, pick_preset};

pub const NEW_SCENARIO_NAME: &str = "New Scenario";

/// Salary used for a new scenario when there is nothing to inherit from.
pub const FALLBACK_ANNUAL_SALARY: Decimal = dec!(600000);

pub struct ScenarioService<'a> {
    store: &'a dyn ScenarioStore,
    picker: &'a dyn PresetPicker,
}

impl<'a> ScenarioService<'a> {
    pub fn new(
        store: &'a dyn ScenarioStore,
        picker: &'a dyn PresetPicker,
    ) -> Self {
        Self { store, picker }
    }

    /// Returns the shared default scenario, creating it from a preset if
    /// none exists yet.
    pub async fn get_or_create_default(&self) -> Result<Scenario, RepositoryError> {
        if let Some(existing) = self.store.find_default_scenario().await? {
            debug!(id = existing.id, "Using existing default scenario");
            return Ok(existing);
        }

        let preset = pick_preset(self.picker);
        info!(preset = preset.name, "Seeding default scenario");

        self.store
            .create_scenario(NewScenario {
                user_id: None,
                name: preset.name.to_string(),
                inputs: preset.inputs,
                is_default: true,
            })
            .await
            .inspect_err(|e| warn!("Failed to create default scenario: {e}"))
    }

    /// All scenarios, newest first. An empty store yields just the default.
    pub async fn load_scenarios(&self) -> Result<Vec<Scenario>, RepositoryError> {
        let scenarios = self.store.list_scenarios().await?;
        if scenarios.is_empty() {
            return Ok(vec![self.get_or_create_default().await?]);
        }

        debug!(count = scenarios.len(), "Loaded scenarios");
        Ok(scenarios)
    }

    pub async fn get_scenario(&self, id: i64) -> Result<Scenario, RepositoryError> {
        self.store.get_scenario(id).await
    }

    /// Creates a blank scenario, keeping the salary of `based_on` when it
    /// has one.
    pub async fn create_scenario(
        &self,
        based_on: Option<&Scenario>,
    ) -> Result<Scenario, RepositoryError> {
        let annual_salary = based_on
            .map(|s| s.inputs.annual_salary)
            .filter(|salary| !salary.is_zero())
            .unwrap_or(FALLBACK_ANNUAL_SALARY);

        let scenario = self
            .store
            .create_scenario(NewScenario {
                user_id: based_on.and_then(|s| s.user_id.clone()),
                name: NEW_SCENARIO_NAME.to_string(),
                inputs: blank_inputs(annual_salary),
                is_default: false,
            })
            .await?;

        info!(id = scenario.id, "Created scenario");
        Ok(scenario)
    }

    pub async fn duplicate_scenario(
        &self,
        original: &Scenario,
    ) -> Result<Scenario, RepositoryError> {
        let copy = self
            .store
            .create_scenario(original.to_new_scenario(format!("{} (Copy)", original.name)))
            .await?;

        info!(from = original.id, id = copy.id, "Duplicated scenario");
        Ok(copy)
    }

    /// Persists `update` and returns the stored scenario. An empty update
    /// skips the store and returns `scenario` unchanged.
    pub async fn apply_edit(
        &self,
        scenario: &Scenario,
        update: ScenarioUpdate,
    ) -> Result<Scenario, RepositoryError> {
        if update.is_empty() {
            debug!(id = scenario.id, "Nothing to update");
            return Ok(scenario.clone());
        }

        let stored = self
            .store
            .update_scenario(scenario.id, &update)
            .await
            .inspect_err(|e| warn!(id = scenario.id, "Failed to update scenario: {e}"))?;

        info!(id = stored.id, fields = ?update.changed_fields(), "Updated scenario");
        Ok(stored)
    }

    pub async fn delete_scenario(&self, id: i64) -> Result<(), RepositoryError> {
        self.store
            .delete_scenario(id)
            .await
            .inspect_err(|e| warn!(id, "Failed to delete scenario: {e}"))?;

        info!(id, "Deleted scenario");
        Ok(())
    }

    /// Appends the totals of `result` to the scenario's history.
    pub async fn record_view(
        &self,
        scenario: &Scenario,
        result: &ComparisonResult,
    ) -> Result<ComparisonRecord, RepositoryError> {
        let record = self
            .store
            .record_comparison(NewComparisonRecord {
                scenario_id: scenario.id,
                user_id: scenario.user_id.clone(),
                total_city_cost: result.total_city_cost,
                total_suburb_cost: result.total_suburb_cost,
            })
            .await?;

        debug!(scenario_id = scenario.id, record_id = record.id, "Recorded comparison");
        Ok(record)
    }

    pub async fn history(
        &self,
        scenario_id: i64,
        limit: u32,
    ) -> Result<Vec<ComparisonRecord>, RepositoryError> {
        self.store.list_comparison_history(scenario_id, limit).await
    }
}

fn blank_inputs(annual_salary: Decimal) -> ScenarioInputs {
    ScenarioInputs {
        annual_salary,
        days_in_office: 5,
        commute_distance: dec!(20),
        city_center_rent: dec!(35000),
        suburb_rent: dec!(18000),
        other_city_expenses: dec!(8000),
        other_suburb_expenses: dec!(5000),
    }
}
