//! Plain-text rendering of comparisons, scenario lists and history.

use std::fmt;

use commute_core::calculations::{CommuteAnalytics, ComparisonResult, calculate_comparison};
use commute_core::format::{format_currency, format_currency_compact, format_decimal, format_number};
use commute_core::{ComparisonRecord, Scenario, ScenarioInputs, Verdict};

use crate::utils::opt_display;

pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::CityCenter => "Move Closer! You are losing money sitting in traffic.",
        Verdict::Suburbs => "Commute! The rent savings are worth the travel.",
    }
}

/// Everything `show` and `calc` print for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub name: String,
    pub inputs: ScenarioInputs,
    pub result: ComparisonResult,
    pub analytics: CommuteAnalytics,
}

impl ScenarioReport {
    pub fn new(
        name: impl Into<String>,
        inputs: ScenarioInputs,
    ) -> Self {
        let result = calculate_comparison(&inputs);
        let analytics = CommuteAnalytics::from_comparison(&inputs, &result);
        Self {
            name: name.into(),
            inputs,
            result,
            analytics,
        }
    }

    pub fn for_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.name.clone(), scenario.inputs)
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let inputs = &self.inputs;
        let result = &self.result;
        let a = &self.analytics;
        let city = result.city_breakdown(inputs);
        let suburb = result.suburb_breakdown(inputs);

        writeln!(f, "{}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Inputs")?;
        writeln!(f, "  Annual salary:       {}", format_currency(inputs.annual_salary))?;
        writeln!(f, "  Days in office:      {} per week", inputs.days_in_office)?;
        writeln!(f, "  Commute distance:    {} km one way", format_decimal(inputs.commute_distance, 1))?;
        writeln!(f, "  City center rent:    {}", format_currency(inputs.city_center_rent))?;
        writeln!(f, "  Suburb rent:         {}", format_currency(inputs.suburb_rent))?;
        writeln!(f, "  Other city costs:    {}", format_currency(inputs.other_city_expenses))?;
        writeln!(f, "  Other suburb costs:  {}", format_currency(inputs.other_suburb_expenses))?;
        writeln!(f)?;

        writeln!(f, "{:<22}{:>14}{:>14}", "Monthly costs", "City center", "Suburbs")?;
        let rows = [
            ("Rent", city.rent, suburb.rent),
            ("Transport", city.transport, suburb.transport),
            ("Commute time", city.opportunity, suburb.opportunity),
            ("Other", city.other, suburb.other),
            ("Total", city.total, suburb.total),
        ];
        for (label, city_value, suburb_value) in rows {
            writeln!(
                f,
                "  {:<20}{:>14}{:>14}",
                label,
                format_currency(city_value),
                format_currency(suburb_value)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Verdict: {}", result.verdict.label())?;
        writeln!(f, "{}", verdict_message(result.verdict))?;
        writeln!(
            f,
            "Savings: {} a month ({} a year)",
            format_currency(result.monthly_savings),
            format_currency_compact(result.annual_savings)
        )?;
        writeln!(f)?;

        writeln!(f, "Commute analytics")?;
        writeln!(f, "  Commute time value:  {} a year", format_currency(a.yearly_opportunity_cost))?;
        writeln!(f, "  Transport spend:     {} a year", format_currency(a.yearly_transport_cost))?;
        writeln!(
            f,
            "  Office days:         {} a year ({} a month)",
            a.days_commuted_per_year, a.office_days_per_month
        )?;
        writeln!(
            f,
            "  Hours commuting:     {} a year ({} full days)",
            format_decimal(a.hours_commuted_per_year, 1),
            format_decimal(a.full_days_commuted_per_year, 1)
        )?;
        writeln!(f, "  Distance travelled:  {} km a year", format_number(a.distance_per_year_km))?;
        writeln!(
            f,
            "  Cost per office day: {}",
            opt_display(a.cost_per_commuting_day, format_currency)
        )?;
        writeln!(
            f,
            "  Savings/transport:   {}",
            opt_display(a.savings_to_transport_ratio, |r| format!("{}x", format_decimal(r, 2)))
        )?;
        write!(
            f,
            "  Breakeven:           {}",
            opt_display(a.breakeven_days_per_week, |d| {
                format!("{} office days per week", format_decimal(d, 1))
            })
        )
    }
}

/// One row of `list`.
pub struct ScenarioListLine<'a> {
    pub scenario: &'a Scenario,
    pub result: ComparisonResult,
}

impl<'a> ScenarioListLine<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        Self {
            scenario,
            result: calculate_comparison(&scenario.inputs),
        }
    }
}

impl fmt::Display for ScenarioListLine<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let marker = if self.scenario.is_default { "*" } else { " " };
        write!(
            f,
            "{:>4}{} {:<12} saves {:>8}/month  {}",
            self.scenario.id,
            marker,
            self.result.verdict.label(),
            format_currency_compact(self.result.monthly_savings),
            self.scenario.name
        )
    }
}

/// One row of `history`.
pub struct HistoryLine<'a>(pub &'a ComparisonRecord);

impl fmt::Display for HistoryLine<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let record = self.0;
        write!(
            f,
            "{}  city {:>12}  suburbs {:>12}  {}",
            record.viewed_at.format("%Y-%m-%d %H:%M:%S"),
            format_currency(record.total_city_cost),
            format_currency(record.total_suburb_cost),
            record.verdict().label()
        )
    }
}
