//! Office attendance at which both housing options cost the same.

use rust_decimal::Decimal;

use crate::calculations::common::max;

/// Number of attendance units (days in office per week) at which the suburb
/// and city-center totals are equal.
///
/// `transport_cost_per_month` and `opportunity_cost_per_month` are the
/// variable costs of a single unit of attendance. When they sum to zero or
/// less no attendance level can make the suburbs costlier, and `0` is
/// returned. The result is never negative.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::calculations::calculate_breakeven;
///
/// // 30000 rent gap + 6000 expense gap, 4402 of commute cost per office day
/// let days = calculate_breakeven(dec!(50000), dec!(20000), dec!(2598), dec!(1804), dec!(6000), dec!(12000));
/// assert!(days > dec!(8.17) && days < dec!(8.18));
///
/// assert_eq!(calculate_breakeven(dec!(50000), dec!(20000), dec!(0), dec!(0), dec!(6000), dec!(12000)), dec!(0));
/// ```
pub fn calculate_breakeven(
    city_rent: Decimal,
    suburb_rent: Decimal,
    transport_cost_per_month: Decimal,
    opportunity_cost_per_month: Decimal,
    suburb_other_expenses: Decimal,
    city_other_expenses: Decimal,
) -> Decimal {
    let rent_difference = city_rent - suburb_rent;
    let other_expenses_difference = city_other_expenses - suburb_other_expenses;
    let variable_costs = transport_cost_per_month + opportunity_cost_per_month;

    if variable_costs <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    max(
        Decimal::ZERO,
        (rent_difference + other_expenses_difference) / variable_costs,
    )
}
