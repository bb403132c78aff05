//! Rounding and comparison helpers shared by the calculation and
//! formatting code.
//!
//! The comparison engine itself never rounds; these helpers exist for
//! display and for tests that compare against two-decimal figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(9020.8333)), dec!(9020.83));
/// assert_eq!(round_half_up(dec!(416.665)), dec!(416.67));
/// assert_eq!(round_half_up(dec!(-13989.165)), dec!(-13989.17)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_half_up_to(value, 2)
}

/// Rounds to `dp` decimal places, midpoints away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::calculations::common::round_half_up_to;
///
/// assert_eq!(round_half_up_to(dec!(12.45), 1), dec!(12.5));
/// assert_eq!(round_half_up_to(dec!(999.5), 0), dec!(1000));
/// ```
pub fn round_half_up_to(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::calculations::common::max;
///
/// assert_eq!(max(dec!(0), dec!(-3.5)), dec!(0));
/// assert_eq!(max(dec!(1.2), dec!(1.25)), dec!(1.25));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
