//! Yearly and per-day figures derived from a comparison, for display.
//!
//! Values that divide by the attendance or by the transport cost are
//! `None` when that divisor is zero, so callers decide how to show them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::ScenarioInputs;
use crate::calculations::{ComparisonResult, calculate_breakeven};

const WEEKS_PER_YEAR: i32 = 52;
const MONTHS_PER_YEAR: Decimal = dec!(12);
const HOURS_PER_DAY: Decimal = dec!(24);
/// Office weeks per month used for the attendance headline. Not the same
/// as the 4.33 factor in the cost calculation.
const OFFICE_WEEKS_PER_MONTH: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteAnalytics {
    pub yearly_opportunity_cost: Decimal,
    pub yearly_transport_cost: Decimal,
    pub days_commuted_per_year: i32,
    pub hours_commuted_per_year: Decimal,
    /// `hours_commuted_per_year` expressed as 24-hour days.
    pub full_days_commuted_per_year: Decimal,
    pub distance_per_year_km: Decimal,
    pub office_days_per_month: i32,
    pub cost_per_commuting_day: Option<Decimal>,
    pub savings_to_transport_ratio: Option<Decimal>,
    /// Office days per week at which both options cost the same.
    pub breakeven_days_per_week: Option<Decimal>,
}

impl CommuteAnalytics {
    pub fn from_comparison(
        inputs: &ScenarioInputs,
        result: &ComparisonResult,
    ) -> Self {
        let days = Decimal::from(inputs.days_in_office);
        let days_commuted_per_year = inputs.days_in_office * WEEKS_PER_YEAR;
        let hours_commuted_per_year =
            result.commute_hours_per_day * Decimal::from(days_commuted_per_year);

        let cost_per_commuting_day = per_office_day(result.transport_cost, days);
        let breakeven_days_per_week = cost_per_commuting_day
            .zip(per_office_day(result.monthly_opportunity_cost, days))
            .map(|(transport_per_day, opportunity_per_day)| {
                calculate_breakeven(
                    inputs.city_center_rent,
                    inputs.suburb_rent,
                    transport_per_day,
                    opportunity_per_day,
                    inputs.other_suburb_expenses,
                    inputs.other_city_expenses,
                )
            });

        let savings_to_transport_ratio = if result.transport_cost.is_zero() {
            None
        } else {
            Some(result.monthly_savings / result.transport_cost)
        };

        Self {
            yearly_opportunity_cost: result.monthly_opportunity_cost * MONTHS_PER_YEAR,
            yearly_transport_cost: result.transport_cost * MONTHS_PER_YEAR,
            days_commuted_per_year,
            hours_commuted_per_year,
            full_days_commuted_per_year: hours_commuted_per_year / HOURS_PER_DAY,
            distance_per_year_km: Decimal::from(days_commuted_per_year)
                * inputs.commute_distance
                * Decimal::TWO,
            office_days_per_month: inputs.days_in_office * OFFICE_WEEKS_PER_MONTH,
            cost_per_commuting_day,
            savings_to_transport_ratio,
            breakeven_days_per_week,
        }
    }
}

fn per_office_day(
    monthly: Decimal,
    days: Decimal,
) -> Option<Decimal> {
    if days.is_zero() {
        None
    } else {
        Some(monthly / days)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::calculate_comparison;
    use crate::calculations::common::round_half_up;

    fn test_inputs() -> ScenarioInputs {
        ScenarioInputs {
            annual_salary: dec!(1200000),
            days_in_office: 5,
            commute_distance: dec!(15),
            city_center_rent: dec!(50000),
            suburb_rent: dec!(20000),
            other_city_expenses: dec!(12000),
            other_suburb_expenses: dec!(6000),
        }
    }

    fn analytics_for(inputs: &ScenarioInputs) -> CommuteAnalytics {
        CommuteAnalytics::from_comparison(inputs, &calculate_comparison(inputs))
    }

    #[test]
    fn yearly_figures_are_twelve_months() {
        let analytics = analytics_for(&test_inputs());

        assert_eq!(analytics.yearly_transport_cost, dec!(155880));
        assert_eq!(round_half_up(analytics.yearly_opportunity_cost), dec!(108250));
    }

    #[test]
    fn attendance_figures() {
        let analytics = analytics_for(&test_inputs());

        assert_eq!(analytics.days_commuted_per_year, 260);
        assert_eq!(analytics.office_days_per_month, 20);
        assert_eq!(analytics.hours_commuted_per_year, dec!(260));
        assert_eq!(round_half_up(analytics.full_days_commuted_per_year), dec!(10.83));
        assert_eq!(analytics.distance_per_year_km, dec!(7800));
    }

    #[test]
    fn cost_per_commuting_day_divides_transport_by_attendance() {
        let analytics = analytics_for(&test_inputs());

        assert_eq!(analytics.cost_per_commuting_day, Some(dec!(2598)));
    }

    #[test]
    fn savings_to_transport_ratio() {
        let analytics = analytics_for(&test_inputs());

        // 13989.17 / 12990
        let ratio = analytics.savings_to_transport_ratio.unwrap();
        assert_eq!(round_half_up(ratio), dec!(1.08));
    }

    #[test]
    fn breakeven_uses_per_day_costs() {
        let analytics = analytics_for(&test_inputs());

        // (30000 + 6000) / (2598 + 1804.17)
        let days = analytics.breakeven_days_per_week.unwrap();
        assert_eq!(round_half_up(days), dec!(8.18));
    }

    #[test]
    fn zero_office_days_leaves_per_day_values_empty() {
        let mut inputs = test_inputs();
        inputs.days_in_office = 0;

        let analytics = analytics_for(&inputs);

        assert_eq!(analytics.cost_per_commuting_day, None);
        assert_eq!(analytics.breakeven_days_per_week, None);
        assert_eq!(analytics.savings_to_transport_ratio, None);
        assert_eq!(analytics.days_commuted_per_year, 0);
    }

    #[test]
    fn zero_distance_has_no_transport_ratio() {
        let mut inputs = test_inputs();
        inputs.commute_distance = Decimal::ZERO;

        let analytics = analytics_for(&inputs);

        assert_eq!(analytics.savings_to_transport_ratio, None);
        assert_eq!(analytics.cost_per_commuting_day, Some(Decimal::ZERO));
        // no variable cost at all: breakeven guard kicks in
        assert_eq!(analytics.breakeven_days_per_week, Some(Decimal::ZERO));
    }
}
