use std::io::Write;

use anyhow::{Context, Result};
use commute_core::ScenarioStore;
use commute_core::db::{DbConfig, StoreRegistry};
use commute_core::scenarios::ScenarioService;
use commute_db_sqlite::SqliteStoreFactory;
use tracing::debug;

use crate::cli::{Cli, Command, InputArgs};
use crate::config::{AppConfig, ConfigError};
use crate::report::{HistoryLine, ScenarioListLine, ScenarioReport};

/// Build a [`StoreRegistry`] with every available backend registered.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(SqliteStoreFactory));
    registry
}

/// Settings file merged with command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::discover(cli.config.as_deref())?;

    if let Some(backend) = &cli.backend {
        config.database.backend = backend.clone();
    }
    if let Some(db) = &cli.db {
        config.database.path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }

    Ok(config)
}

pub async fn open_store(db_config: &DbConfig) -> Result<Box<dyn ScenarioStore>> {
    debug!("connecting to {} backend", db_config.backend);
    build_registry()
        .create(db_config)
        .await
        .with_context(|| {
            format!(
                "Failed to open {} store at {}",
                db_config.backend, db_config.connection_string
            )
        })
}

/// `calc` needs no store.
pub fn run_calc(
    args: &InputArgs,
    out: &mut impl Write,
) -> Result<()> {
    let report = ScenarioReport::new("Ad-hoc comparison", args.to_inputs());
    writeln!(out, "{report}")?;
    Ok(())
}

/// Runs a storage-backed command, writing its output to `out`.
pub async fn run(
    command: &Command,
    service: &ScenarioService<'_>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Calc(args) => run_calc(args, out)?,

        Command::List => {
            let scenarios = service
                .load_scenarios()
                .await
                .context("Failed to load scenarios")?;
            for scenario in &scenarios {
                writeln!(out, "{}", ScenarioListLine::new(scenario))?;
            }
        }

        Command::Show { id, no_history } => {
            let scenario = match id {
                Some(id) => load(service, *id).await?,
                None => service
                    .load_scenarios()
                    .await
                    .context("Failed to load scenarios")?
                    .into_iter()
                    .next()
                    .context("No scenarios stored")?,
            };

            let report = ScenarioReport::for_scenario(&scenario);
            if !no_history {
                service
                    .record_view(&scenario, &report.result)
                    .await
                    .context("Failed to record comparison")?;
            }
            writeln!(out, "{report}")?;
        }

        Command::New { from } => {
            let base = match from {
                Some(id) => Some(load(service, *id).await?),
                None => None,
            };
            let created = service
                .create_scenario(base.as_ref())
                .await
                .context("Failed to create scenario")?;
            writeln!(out, "Created scenario {}: {}", created.id, created.name)?;
        }

        Command::Duplicate { id } => {
            let original = load(service, *id).await?;
            let copy = service
                .duplicate_scenario(&original)
                .await
                .context("Failed to duplicate scenario")?;
            writeln!(out, "Created scenario {}: {}", copy.id, copy.name)?;
        }

        Command::Edit { id, fields } => {
            let scenario = load(service, *id).await?;
            let edited = service
                .apply_edit(&scenario, fields.to_update())
                .await
                .with_context(|| format!("Failed to update scenario {id}"))?;
            writeln!(out, "{}", ScenarioReport::for_scenario(&edited))?;
        }

        Command::Delete { id } => {
            service
                .delete_scenario(*id)
                .await
                .with_context(|| format!("Failed to delete scenario {id}"))?;
            writeln!(out, "Deleted scenario {id}")?;
        }

        Command::History { id, limit } => {
            let scenario = load(service, *id).await?;
            let records = service
                .history(scenario.id, *limit)
                .await
                .context("Failed to load comparison history")?;
            if records.is_empty() {
                writeln!(out, "No comparisons recorded for {}", scenario.name)?;
            }
            for record in &records {
                writeln!(out, "{}", HistoryLine(record))?;
            }
        }
    }

    Ok(())
}

async fn load(
    service: &ScenarioService<'_>,
    id: i64,
) -> Result<commute_core::Scenario> {
    service
        .get_scenario(id)
        .await
        .with_context(|| format!("Failed to load scenario {id}"))
}
