use anyhow::Context;
use clap::Parser;
use commute_core::presets::RandomPresetPicker;
use commute_core::scenarios::ScenarioService;
use tracing::{debug, warn};

use commute_cli::cli::{Cli, Command};
use commute_cli::{app, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = app::resolve_config(&cli).context("Failed to load configuration")?;

    if logging::env_filter_overridden() {
        debug!("RUST_LOG is set; ignoring configured log level");
    } else {
        logging::set_log_level(&config.logging.level)?;
    }
    if cli.quiet {
        logging::set_stderr_enabled(false)?;
    }
    if let Some(path) = &config.logging.file {
        if let Err(e) = logging::enable_file_logging(path) {
            warn!("{e:#}");
        }
    }

    let mut stdout = std::io::stdout().lock();

    if let Command::Calc(args) = &cli.command {
        return app::run_calc(args, &mut stdout);
    }

    let store = app::open_store(&config.db_config()).await?;
    let picker = RandomPresetPicker;
    let service = ScenarioService::new(&*store, &picker);

    app::run(&cli.command, &service, &mut stdout).await
}
