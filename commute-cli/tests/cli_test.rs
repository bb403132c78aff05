use std::path::PathBuf;

use clap::Parser;
use commute_cli::app;
use commute_cli::cli::{Cli, Command};
use commute_core::ScenarioStore;
use commute_core::db::DbConfig;
use commute_core::presets::FixedPresetPicker;
use commute_core::scenarios::ScenarioService;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("commute-arbitrage").chain(args.iter().copied()))
        .expect("arguments should parse")
}

async fn memory_store() -> Box<dyn ScenarioStore> {
    app::open_store(&DbConfig::default())
        .await
        .expect("Failed to open in-memory store")
}

async fn run_with(
    service: &ScenarioService<'_>,
    args: &[&str],
) -> anyhow::Result<String> {
    let cli = parse(args);
    let mut out = Vec::new();
    app::run(&cli.command, service, &mut out).await?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

// =============================================================================
// Configuration resolution
// =============================================================================

#[test]
fn resolve_config_reads_fixture() {
    let config_path = fixture("commute.toml");
    let cli = parse(&["--config", config_path.to_str().unwrap(), "list"]);

    let config = app::resolve_config(&cli).unwrap();

    assert_eq!(config.database.path, ":memory:");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.file, None);
}

#[test]
fn flags_override_config_file() {
    let config_path = fixture("commute.toml");
    let cli = parse(&[
        "--config",
        config_path.to_str().unwrap(),
        "--db",
        "other.db",
        "--log-level",
        "debug",
        "--log-file",
        "commute.log",
        "list",
    ]);

    let config = app::resolve_config(&cli).unwrap();

    assert_eq!(config.database.path, "other.db");
    assert_eq!(config.database.backend, "sqlite");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("commute.log")));
}

#[test]
fn missing_explicit_config_is_error() {
    let cli = parse(&["--config", "/nonexistent/commute.toml", "list"]);

    assert!(app::resolve_config(&cli).is_err());
}

#[tokio::test]
async fn unknown_backend_is_reported() {
    let config = DbConfig {
        backend: "postgres".to_string(),
        connection_string: "postgres://localhost/commute".to_string(),
    };

    let err = app::open_store(&config).await.err().expect("expected an error");

    let message = format!("{err:#}");
    assert!(message.contains("unknown backend 'postgres'"), "{message}");
    assert!(message.contains("sqlite"), "{message}");
}

// =============================================================================
// calc
// =============================================================================

#[test]
fn calc_prints_report_without_store() {
    let cli = parse(&[
        "calc",
        "--salary",
        "12,00,000",
        "--days",
        "5",
        "--distance",
        "15",
        "--city-rent",
        "50,000",
        "--suburb-rent",
        "20000",
        "--city-other",
        "12000",
        "--suburb-other",
        "6000",
    ]);
    let Command::Calc(args) = &cli.command else {
        panic!("expected calc");
    };
    let mut out = Vec::new();

    app::run_calc(args, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Verdict: Suburbs"), "{text}");
    assert!(text.contains("Savings: ₹13,989 a month (₹1.7L a year)"), "{text}");
}

// =============================================================================
// storage-backed commands
// =============================================================================

#[tokio::test]
async fn list_seeds_default_scenario() {
    let store = memory_store().await;
    let picker = FixedPresetPicker(0);
    let service = ScenarioService::new(&*store, &picker);

    let text = run_with(&service, &["list"]).await.unwrap();

    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("Mumbai: Software Engineer (Bandra to BKC)"), "{text}");
    assert!(text.contains("   1* Suburbs"), "{text}");
}

#[tokio::test]
async fn show_records_history_unless_disabled() {
    let store = memory_store().await;
    let picker = FixedPresetPicker(0);
    let service = ScenarioService::new(&*store, &picker);

    let text = run_with(&service, &["show"]).await.unwrap();
    run_with(&service, &["show", "1", "--no-history"]).await.unwrap();
    run_with(&service, &["show", "1"]).await.unwrap();

    assert!(text.contains("₹48,011"), "{text}");
    let history = store.list_comparison_history(1, 10).await.unwrap();
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn history_lists_recorded_views() {
    let store = memory_store().await;
    let picker = FixedPresetPicker(0);
    let service = ScenarioService::new(&*store, &picker);
    run_with(&service, &["show"]).await.unwrap();

    let text = run_with(&service, &["history", "1"]).await.unwrap();

    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("₹62,000"), "{text}");
    assert!(text.trim_end().ends_with("Suburbs"), "{text}");
}

#[tokio::test]
async fn history_without_views_says_so() {
    let store = memory_store().await;
    let picker = FixedPresetPicker(0);
    let service = ScenarioService::new(&*store, &picker);
    run_with(&service, &["list"]).await.unwrap();

    let text = run_with(&service, &["history", "1"]).await.unwrap();

    assert_eq!(
        text,
        "No comparisons recorded for Mumbai: Software Engineer (Bandra to BKC)\n"
    );
}

#[tokio::test]
async fn new_from_keeps_salary() {
    let store = memory_store().await;
    let picker = FixedPresetPicker(0);
    let service = ScenarioService::new(&*store, &picker);
    run_with(&service, &["list"]).await.unwrap();

    let text = run_with(&service, &["new", "--from", "1"]).await.unwrap();

    assert_eq!(text, "Created scenario 2: New Scenario\n");
    let created = store.get_scenario(2).await.unwrap();
    assert_eq!(created.inputs.annual_salary, rust_decimal_macros::dec!(1200000));
}

#[tokio::test]
async fn duplicate_edit_and_delete() {
    let store = memory_store().await;
    let picker = FixedPresetPicker(0);
    let service = ScenarioService::new(&*store, &picker);
    run_with(&service, &["list"]).await.unwrap();

    let text = run_with(&service, &["duplicate", "1"]).await.unwrap();
    assert_eq!(
        text,
        "Created scenario 2: Mumbai: Software Engineer (Bandra to BKC) (Copy)\n"
    );

    let text = run_with(&service, &["edit", "2", "--city-rent", "20,000", "--name", "Closer"])
        .await
        .unwrap();
    assert!(text.starts_with("Closer\n"), "{text}");
    assert!(text.contains("Verdict: City Center"), "{text}");

    let text = run_with(&service, &["delete", "2"]).await.unwrap();
    assert_eq!(text, "Deleted scenario 2\n");
    assert_eq!(store.list_scenarios().await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_scenario_is_error_with_context() {
    let store = memory_store().await;
    let picker = FixedPresetPicker(0);
    let service = ScenarioService::new(&*store, &picker);

    let err = run_with(&service, &["show", "99"]).await.unwrap_err();

    assert_eq!(format!("{err:#}"), "Failed to load scenario 99: Record not found");
}
