use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commute_data::ScenarioLoader;
use commute_db_sqlite::SqliteScenarioStore;
use tracing_subscriber::EnvFilter;

/// Import scenarios from a CSV file, or export stored scenarios to one.
///
/// The CSV file has the following columns:
/// - name: Scenario name, used to match existing scenarios
/// - annual_salary: Yearly salary
/// - days_in_office: Office days per week (1-5)
/// - commute_distance: One-way distance in km
/// - city_center_rent, suburb_rent: Monthly rent for each option
/// - other_city_expenses, other_suburb_expenses: Other monthly costs
#[derive(Parser, Debug)]
#[command(name = "commute-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file to read, or to write with --export
    #[arg(short, long)]
    file: PathBuf,

    /// SQLite database file (created if missing)
    #[arg(short, long, default_value = "commute.db")]
    database: String,

    /// Write stored scenarios to the file instead of loading it
    #[arg(short, long, default_value_t = false)]
    export: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let store = SqliteScenarioStore::new(&args.database)
        .await
        .with_context(|| format!("Failed to open database: {}", args.database))?;
    store
        .run_migrations()
        .await
        .context("Failed to run migrations")?;

    if args.export {
        let file = File::create(&args.file)
            .with_context(|| format!("Failed to create: {}", args.file.display()))?;
        let written = ScenarioLoader::export(&store, file)
            .await
            .with_context(|| format!("Failed to export to: {}", args.file.display()))?;

        println!("Exported {} scenarios to {}.", written, args.file.display());
        return Ok(());
    }

    println!("Loading scenarios from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = ScenarioLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", records.len());

    let summary = ScenarioLoader::load(&store, &records)
        .await
        .context("Failed to load scenarios into database")?;

    println!(
        "Created {} and updated {} scenarios.",
        summary.created, summary.updated
    );

    Ok(())
}
