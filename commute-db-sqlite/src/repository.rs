use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use commute_core::{
    ComparisonRecord, NewComparisonRecord, NewScenario, RepositoryError, Scenario, ScenarioInputs,
    ScenarioStore, ScenarioUpdate,
};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use tracing::debug;

use crate::decimal::{decimal_to_f64, get_decimal};

const SCENARIO_COLUMNS: &str = "id, user_id, name, annual_salary, days_in_office, commute_distance,
    city_center_rent, suburb_rent, other_city_expenses, other_suburb_expenses,
    is_default, created_at, updated_at";

const HISTORY_COLUMNS: &str =
    "id, scenario_id, user_id, total_city_cost, total_suburb_cost, viewed_at";

pub struct SqliteScenarioStore {
    pool: SqlitePool,
}

impl SqliteScenarioStore {
    /// Opens `connection_string`, which is either a bare path (created if
    /// missing), `:memory:`, or a `sqlite:` URL.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let url = if connection_string.starts_with("sqlite:") {
            connection_string.to_string()
        } else {
            format!("sqlite:{}", connection_string)
        };

        let options = SqliteConnectOptions::from_str(&url)
            .with_context(|| format!("Invalid database location: {}", connection_string))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new();
        if url.contains(":memory:") {
            // every connection would otherwise see its own empty database
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to database: {}", connection_string))?;

        debug!(database = connection_string, "Opened SQLite database");
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

fn row_to_scenario(row: &SqliteRow) -> Result<Scenario, RepositoryError> {
    Ok(Scenario {
        id: row.try_get("id").map_err(db_error)?,
        user_id: row.try_get("user_id").map_err(db_error)?,
        name: row.try_get("name").map_err(db_error)?,
        inputs: ScenarioInputs {
            annual_salary: get_decimal(row, "annual_salary")?,
            days_in_office: row.try_get("days_in_office").map_err(db_error)?,
            commute_distance: get_decimal(row, "commute_distance")?,
            city_center_rent: get_decimal(row, "city_center_rent")?,
            suburb_rent: get_decimal(row, "suburb_rent")?,
            other_city_expenses: get_decimal(row, "other_city_expenses")?,
            other_suburb_expenses: get_decimal(row, "other_suburb_expenses")?,
        },
        is_default: row.try_get("is_default").map_err(db_error)?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| RepositoryError::Database(format!("Failed to get created_at: {}", e)))?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(|e| RepositoryError::Database(format!("Failed to get updated_at: {}", e)))?,
    })
}

fn row_to_comparison_record(row: &SqliteRow) -> Result<ComparisonRecord, RepositoryError> {
    Ok(ComparisonRecord {
        id: row.try_get("id").map_err(db_error)?,
        scenario_id: row.try_get("scenario_id").map_err(db_error)?,
        user_id: row.try_get("user_id").map_err(db_error)?,
        total_city_cost: get_decimal(row, "total_city_cost")?,
        total_suburb_cost: get_decimal(row, "total_suburb_cost")?,
        viewed_at: row
            .try_get::<DateTime<Utc>, _>("viewed_at")
            .map_err(|e| RepositoryError::Database(format!("Failed to get viewed_at: {}", e)))?,
    })
}

#[async_trait]
impl ScenarioStore for SqliteScenarioStore {
    async fn list_scenarios(&self) -> Result<Vec<Scenario>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM scenarios ORDER BY created_at DESC, id DESC",
            SCENARIO_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(row_to_scenario).collect()
    }

    async fn get_scenario(
        &self,
        id: i64,
    ) -> Result<Scenario, RepositoryError> {
        let row = sqlx::query(&format!("SELECT {} FROM scenarios WHERE id = ?", SCENARIO_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .ok_or(RepositoryError::NotFound)?;

        row_to_scenario(&row)
    }

    async fn find_default_scenario(&self) -> Result<Option<Scenario>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM scenarios
             WHERE user_id IS NULL AND is_default = 1
             ORDER BY id
             LIMIT 1",
            SCENARIO_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.as_ref().map(row_to_scenario).transpose()
    }

    async fn create_scenario(
        &self,
        scenario: NewScenario,
    ) -> Result<Scenario, RepositoryError> {
        let now = Utc::now();
        let inputs = scenario.inputs;

        let result = sqlx::query(
            "INSERT INTO scenarios (
                user_id, name, annual_salary, days_in_office, commute_distance,
                city_center_rent, suburb_rent, other_city_expenses, other_suburb_expenses,
                is_default, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&scenario.user_id)
        .bind(&scenario.name)
        .bind(decimal_to_f64(inputs.annual_salary))
        .bind(inputs.days_in_office)
        .bind(decimal_to_f64(inputs.commute_distance))
        .bind(decimal_to_f64(inputs.city_center_rent))
        .bind(decimal_to_f64(inputs.suburb_rent))
        .bind(decimal_to_f64(inputs.other_city_expenses))
        .bind(decimal_to_f64(inputs.other_suburb_expenses))
        .bind(scenario.is_default)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        self.get_scenario(result.last_insert_rowid()).await
    }

    async fn update_scenario(
        &self,
        id: i64,
        update: &ScenarioUpdate,
    ) -> Result<Scenario, RepositoryError> {
        let merged = self.get_scenario(id).await?.apply_update(update);
        let inputs = merged.inputs;

        let result = sqlx::query(
            "UPDATE scenarios SET
                name = ?, annual_salary = ?, days_in_office = ?, commute_distance = ?,
                city_center_rent = ?, suburb_rent = ?, other_city_expenses = ?,
                other_suburb_expenses = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&merged.name)
        .bind(decimal_to_f64(inputs.annual_salary))
        .bind(inputs.days_in_office)
        .bind(decimal_to_f64(inputs.commute_distance))
        .bind(decimal_to_f64(inputs.city_center_rent))
        .bind(decimal_to_f64(inputs.suburb_rent))
        .bind(decimal_to_f64(inputs.other_city_expenses))
        .bind(decimal_to_f64(inputs.other_suburb_expenses))
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        self.get_scenario(id).await
    }

    async fn delete_scenario(
        &self,
        id: i64,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM scenarios WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn record_comparison(
        &self,
        record: NewComparisonRecord,
    ) -> Result<ComparisonRecord, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO comparison_history (
                scenario_id, user_id, total_city_cost, total_suburb_cost, viewed_at
            ) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.scenario_id)
        .bind(&record.user_id)
        .bind(decimal_to_f64(record.total_city_cost))
        .bind(decimal_to_f64(record.total_suburb_cost))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        let row = sqlx::query(&format!(
            "SELECT {} FROM comparison_history WHERE id = ?",
            HISTORY_COLUMNS
        ))
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        row_to_comparison_record(&row)
    }

    async fn list_comparison_history(
        &self,
        scenario_id: i64,
        limit: u32,
    ) -> Result<Vec<ComparisonRecord>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM comparison_history
             WHERE scenario_id = ?
             ORDER BY viewed_at DESC, id DESC
             LIMIT ?",
            HISTORY_COLUMNS
        ))
        .bind(scenario_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(row_to_comparison_record).collect()
    }
}
