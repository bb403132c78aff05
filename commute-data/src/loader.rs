use std::collections::HashMap;
use std::io::{Read, Write};

use commute_core::{
    NewScenario, RepositoryError, Scenario, ScenarioInputs, ScenarioStore, ScenarioUpdate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when importing or exporting scenarios.
#[derive(Debug, Error)]
pub enum ScenarioLoaderError {
    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<csv::Error> for ScenarioLoaderError {
    fn from(err: csv::Error) -> Self {
        ScenarioLoaderError::Csv(err.to_string())
    }
}

/// One row of a scenarios CSV file.
///
/// - `name`: unique key used to match rows against stored scenarios
/// - `annual_salary`: yearly salary
/// - `days_in_office`: office days per week, 1 to 5
/// - `commute_distance`: one-way distance in km
/// - `city_center_rent`, `suburb_rent`: monthly rent
/// - `other_city_expenses`, `other_suburb_expenses`: other monthly costs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioRecord {
    pub name: String,
    pub annual_salary: Decimal,
    pub days_in_office: i32,
    pub commute_distance: Decimal,
    pub city_center_rent: Decimal,
    pub suburb_rent: Decimal,
    pub other_city_expenses: Decimal,
    pub other_suburb_expenses: Decimal,
}

impl ScenarioRecord {
    pub fn inputs(&self) -> ScenarioInputs {
        ScenarioInputs {
            annual_salary: self.annual_salary,
            days_in_office: self.days_in_office,
            commute_distance: self.commute_distance,
            city_center_rent: self.city_center_rent,
            suburb_rent: self.suburb_rent,
            other_city_expenses: self.other_city_expenses,
            other_suburb_expenses: self.other_suburb_expenses,
        }
    }

    fn to_update(&self) -> ScenarioUpdate {
        ScenarioUpdate {
            name: None,
            annual_salary: Some(self.annual_salary),
            days_in_office: Some(self.days_in_office),
            commute_distance: Some(self.commute_distance),
            city_center_rent: Some(self.city_center_rent),
            suburb_rent: Some(self.suburb_rent),
            other_city_expenses: Some(self.other_city_expenses),
            other_suburb_expenses: Some(self.other_suburb_expenses),
        }
    }

    fn validate(
        &self,
        row: usize,
    ) -> Result<(), ScenarioLoaderError> {
        let invalid = |message: String| ScenarioLoaderError::InvalidRecord { row, message };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if !(1..=5).contains(&self.days_in_office) {
            return Err(invalid(format!(
                "days_in_office must be between 1 and 5, got {}",
                self.days_in_office
            )));
        }

        let amounts = [
            ("annual_salary", self.annual_salary),
            ("commute_distance", self.commute_distance),
            ("city_center_rent", self.city_center_rent),
            ("suburb_rent", self.suburb_rent),
            ("other_city_expenses", self.other_city_expenses),
            ("other_suburb_expenses", self.other_suburb_expenses),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(invalid(format!("{field} must not be negative, got {value}")));
            }
        }

        Ok(())
    }
}

impl From<&Scenario> for ScenarioRecord {
    fn from(scenario: &Scenario) -> Self {
        let inputs = scenario.inputs;
        Self {
            name: scenario.name.clone(),
            annual_salary: inputs.annual_salary,
            days_in_office: inputs.days_in_office,
            commute_distance: inputs.commute_distance,
            city_center_rent: inputs.city_center_rent,
            suburb_rent: inputs.suburb_rent,
            other_city_expenses: inputs.other_city_expenses,
            other_suburb_expenses: inputs.other_suburb_expenses,
        }
    }
}

/// Counts of scenarios touched by [`ScenarioLoader::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub created: usize,
    pub updated: usize,
}

/// Moves scenarios between CSV files and any [`ScenarioStore`].
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parse and validate scenario records from a CSV reader.
    ///
    /// Row numbers in errors count the header as row 1.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, ScenarioLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let row = index + 2;
            let record: ScenarioRecord = result.map_err(|e| ScenarioLoaderError::InvalidRecord {
                row,
                message: e.to_string(),
            })?;
            record.validate(row)?;
            records.push(record);
        }

        Ok(records)
    }

    /// Upsert `records` into the store by name.
    ///
    /// A record whose name matches a stored scenario overwrites its inputs;
    /// any other record creates a new shared scenario. Loading the same file
    /// twice therefore leaves the store unchanged the second time.
    pub async fn load<S: ScenarioStore + ?Sized>(
        store: &S,
        records: &[ScenarioRecord],
    ) -> Result<LoadSummary, ScenarioLoaderError> {
        let mut summary = LoadSummary::default();

        let mut existing: HashMap<String, i64> = HashMap::new();
        for scenario in store.list_scenarios().await? {
            existing.entry(scenario.name).or_insert(scenario.id);
        }

        for record in records {
            match existing.get(&record.name) {
                Some(&id) => {
                    store.update_scenario(id, &record.to_update()).await?;
                    debug!(id, name = %record.name, "Updated scenario from CSV");
                    summary.updated += 1;
                }
                None => {
                    let created = store
                        .create_scenario(NewScenario {
                            user_id: None,
                            name: record.name.clone(),
                            inputs: record.inputs(),
                            is_default: false,
                        })
                        .await?;
                    debug!(id = created.id, name = %record.name, "Created scenario from CSV");
                    existing.insert(created.name, created.id);
                    summary.created += 1;
                }
            }
        }

        info!(created = summary.created, updated = summary.updated, "Loaded scenarios");
        Ok(summary)
    }

    /// Write every stored scenario, oldest first, in the import layout.
    /// Returns the number of rows written.
    pub async fn export<S: ScenarioStore + ?Sized, W: Write>(
        store: &S,
        writer: W,
    ) -> Result<usize, ScenarioLoaderError> {
        let scenarios = store.list_scenarios().await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        for scenario in scenarios.iter().rev() {
            csv_writer.serialize(ScenarioRecord::from(scenario))?;
        }
        csv_writer.flush()?;

        Ok(scenarios.len())
    }
}
