use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use commute_core::{ScenarioInputs, ScenarioUpdate};
use rust_decimal::Decimal;

use crate::utils::parse_amount;

/// Compare living in the city center with commuting from the suburbs.
///
/// Scenarios are stored in a local database. `calc` works without one.
#[derive(Debug, Parser)]
#[command(name = "commute-arbitrage", version, about)]
pub struct Cli {
    /// TOML settings file. Defaults to ./commute.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend, overriding the settings file.
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Database connection string, overriding the settings file.
    /// For SQLite this is a file path (e.g. `commute.db`) or `:memory:`.
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Log filter such as `debug` or `commute_core=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Do not print log records to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stored scenarios with their verdicts.
    List,

    /// Print the full report for a scenario.
    Show {
        /// Scenario id. The most recent scenario when omitted.
        id: Option<i64>,

        /// Do not add this view to the scenario's history.
        #[arg(long, default_value_t = false)]
        no_history: bool,
    },

    /// Compute a report from flags alone, without touching the database.
    Calc(InputArgs),

    /// Create a scenario with blank inputs.
    New {
        /// Keep the annual salary of this scenario.
        #[arg(long)]
        from: Option<i64>,
    },

    /// Copy a scenario under a new name.
    Duplicate { id: i64 },

    /// Change some fields of a scenario.
    Edit {
        id: i64,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Delete a scenario and its history.
    Delete { id: i64 },

    /// Show past views of a scenario, newest first.
    History {
        id: i64,

        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

/// Inputs for `calc`. Amounts accept thousands separators (`12,00,000`).
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Yearly salary
    #[arg(long, value_parser = parse_amount, default_value = "600000")]
    pub salary: Decimal,

    /// Office days per week
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5), default_value_t = 5)]
    pub days: i32,

    /// One-way commute distance in km
    #[arg(long, value_parser = parse_amount, default_value = "20")]
    pub distance: Decimal,

    /// Monthly rent in the city center
    #[arg(long, value_parser = parse_amount, default_value = "35000")]
    pub city_rent: Decimal,

    /// Monthly rent in the suburbs
    #[arg(long, value_parser = parse_amount, default_value = "18000")]
    pub suburb_rent: Decimal,

    /// Other monthly costs in the city center
    #[arg(long, value_parser = parse_amount, default_value = "8000")]
    pub city_other: Decimal,

    /// Other monthly costs in the suburbs
    #[arg(long, value_parser = parse_amount, default_value = "5000")]
    pub suburb_other: Decimal,
}

impl InputArgs {
    pub fn to_inputs(&self) -> ScenarioInputs {
        ScenarioInputs {
            annual_salary: self.salary,
            days_in_office: self.days,
            commute_distance: self.distance,
            city_center_rent: self.city_rent,
            suburb_rent: self.suburb_rent,
            other_city_expenses: self.city_other,
            other_suburb_expenses: self.suburb_other,
        }
    }
}

/// Fields for `edit`. Only the flags given are changed.
#[derive(Debug, Clone, Default, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, value_parser = parse_amount)]
    pub salary: Option<Decimal>,

    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=5))]
    pub days: Option<i32>,

    #[arg(long, value_parser = parse_amount)]
    pub distance: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub city_rent: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub suburb_rent: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub city_other: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub suburb_other: Option<Decimal>,
}

impl EditArgs {
    pub fn to_update(&self) -> ScenarioUpdate {
        ScenarioUpdate {
            name: self.name.clone(),
            annual_salary: self.salary,
            days_in_office: self.days,
            commute_distance: self.distance,
            city_center_rent: self.city_rent,
            suburb_rent: self.suburb_rent,
            other_city_expenses: self.city_other,
            other_suburb_expenses: self.suburb_other,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("commute-arbitrage").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn calc_defaults_match_blank_scenario() {
        let cli = parse(&["calc"]).unwrap();

        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(
            args.to_inputs(),
            ScenarioInputs {
                annual_salary: dec!(600000),
                days_in_office: 5,
                commute_distance: dec!(20),
                city_center_rent: dec!(35000),
                suburb_rent: dec!(18000),
                other_city_expenses: dec!(8000),
                other_suburb_expenses: dec!(5000),
            }
        );
    }

    #[test]
    fn calc_accepts_grouped_amounts() {
        let cli = parse(&["calc", "--salary", "12,00,000", "--distance", "15"]).unwrap();

        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(args.salary, dec!(1200000));
        assert_eq!(args.distance, dec!(15));
    }

    #[test]
    fn days_outside_one_to_five_are_rejected() {
        assert!(parse(&["calc", "--days", "0"]).is_err());
        assert!(parse(&["calc", "--days", "6"]).is_err());
        assert!(parse(&["edit", "1", "--days", "7"]).is_err());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(parse(&["calc", "--suburb-rent=-1"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list", "--db", ":memory:", "-q"]).unwrap();

        assert_eq!(cli.db.as_deref(), Some(":memory:"));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn show_id_is_optional() {
        let cli = parse(&["show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Show {
                id: None,
                no_history: false
            }
        ));

        let cli = parse(&["show", "3", "--no-history"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Show {
                id: Some(3),
                no_history: true
            }
        ));
    }

    #[test]
    fn edit_builds_partial_update() {
        let cli = parse(&["edit", "4", "--suburb-rent", "16,000", "--name", "Cheaper flat"]).unwrap();

        let Command::Edit { id, fields } = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(id, 4);
        assert_eq!(
            fields.to_update(),
            ScenarioUpdate {
                name: Some("Cheaper flat".to_string()),
                suburb_rent: Some(dec!(16000)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn history_limit_defaults_to_ten() {
        let cli = parse(&["history", "2"]).unwrap();

        assert!(matches!(cli.command, Command::History { id: 2, limit: 10 }));
    }
}
