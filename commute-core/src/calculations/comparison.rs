//! Monthly cost comparison between a city-center flat and a suburban flat
//! plus the commute.
//!
//! # Calculation Steps
//!
//! | Step | Value | Formula |
//! |------|-------|---------|
//! | 1 | Monthly salary | annual salary ÷ 12 |
//! | 2 | Hourly rate | monthly salary ÷ 240 |
//! | 3 | Commute hours per day | (distance × 2) ÷ 30 km/h |
//! | 4 | Monthly opportunity cost | step 3 × step 2 × days/week × 4.33 |
//! | 5 | Transport cost | distance × 20/km × 2 × days/week × 4.33 |
//! | 6 | City total | city rent + city other expenses |
//! | 7 | Suburb total | suburb rent + step 5 + step 4 + suburb other expenses |
//! | 8 | Savings | \|step 6 − step 7\| per month, × 12 per year |
//! | 9 | Verdict | city center if step 6 < step 7, otherwise suburbs |
//!
//! Nothing is rounded along the way. Round at display time with
//! [`round_half_up`](super::common::round_half_up).
//!
//! The hourly divisor of 240 is fixed and does not follow `days_in_office`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use commute_core::calculations::calculate_comparison;
//! use commute_core::calculations::common::round_half_up;
//! use commute_core::{ScenarioInputs, Verdict};
//!
//! let inputs = ScenarioInputs {
//!     annual_salary: dec!(1200000),
//!     days_in_office: 5,
//!     commute_distance: dec!(15),
//!     city_center_rent: dec!(50000),
//!     suburb_rent: dec!(20000),
//!     other_city_expenses: dec!(12000),
//!     other_suburb_expenses: dec!(6000),
//! };
//!
//! let result = calculate_comparison(&inputs);
//!
//! assert_eq!(result.transport_cost, dec!(12990));
//! assert_eq!(result.total_city_cost, dec!(62000));
//! assert_eq!(round_half_up(result.total_suburb_cost), dec!(48010.83));
//! assert_eq!(result.verdict, Verdict::Suburbs);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{ScenarioInputs, Verdict};

/// Assumed average commute speed in km/h.
pub const AVERAGE_SPEED_KMH: Decimal = dec!(30);

/// Travel cost per kilometre.
pub const TRANSPORT_COST_PER_KM: Decimal = dec!(20);

/// Average number of weeks in a month (52 / 12), used to scale weekly
/// attendance to a monthly figure.
pub const WORKING_DAYS_PER_MONTH: Decimal = dec!(4.33);

/// Fixed divisor turning a monthly salary into an hourly rate.
pub const MONTHLY_WORKING_HOURS: Decimal = dec!(240);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Result of a comparison. Recomputed from scratch on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Round-trip hours spent commuting on an office day.
    pub commute_hours_per_day: Decimal,

    /// Monthly travel spend when living in the suburbs.
    pub transport_cost: Decimal,

    /// Monthly value of commute time at the derived hourly rate.
    pub monthly_opportunity_cost: Decimal,

    pub total_city_cost: Decimal,
    pub total_suburb_cost: Decimal,

    /// Absolute difference between the two totals. Never negative.
    pub monthly_savings: Decimal,
    pub annual_savings: Decimal,

    pub verdict: Verdict,
}

/// Runs the full comparison for `inputs`.
///
/// Total over its domain: no validation is performed and negative or zero
/// inputs simply flow through the arithmetic.
pub fn calculate_comparison(inputs: &ScenarioInputs) -> ComparisonResult {
    let hourly_rate = hourly_rate(monthly_salary(inputs.annual_salary));
    let commute_hours_per_day = commute_hours_per_day(inputs.commute_distance);

    let monthly_opportunity_cost =
        monthly_opportunity_cost(commute_hours_per_day, hourly_rate, inputs.days_in_office);
    let transport_cost = transport_cost(inputs.commute_distance, inputs.days_in_office);

    let total_city_cost = inputs.city_center_rent + inputs.other_city_expenses;
    let total_suburb_cost = inputs.suburb_rent
        + transport_cost
        + monthly_opportunity_cost
        + inputs.other_suburb_expenses;

    let monthly_savings = (total_city_cost - total_suburb_cost).abs();

    ComparisonResult {
        commute_hours_per_day,
        transport_cost,
        monthly_opportunity_cost,
        total_city_cost,
        total_suburb_cost,
        monthly_savings,
        annual_savings: monthly_savings * MONTHS_PER_YEAR,
        verdict: verdict(total_city_cost, total_suburb_cost),
    }
}

/// Step 1.
pub fn monthly_salary(annual_salary: Decimal) -> Decimal {
    annual_salary / MONTHS_PER_YEAR
}

/// Step 2.
pub fn hourly_rate(monthly_salary: Decimal) -> Decimal {
    monthly_salary / MONTHLY_WORKING_HOURS
}

/// Step 3: round trip at [`AVERAGE_SPEED_KMH`].
pub fn commute_hours_per_day(commute_distance: Decimal) -> Decimal {
    (commute_distance * Decimal::TWO) / AVERAGE_SPEED_KMH
}

/// Step 4.
pub fn monthly_opportunity_cost(
    commute_hours_per_day: Decimal,
    hourly_rate: Decimal,
    days_in_office: i32,
) -> Decimal {
    commute_hours_per_day * hourly_rate * Decimal::from(days_in_office) * WORKING_DAYS_PER_MONTH
}

/// Step 5.
pub fn transport_cost(
    commute_distance: Decimal,
    days_in_office: i32,
) -> Decimal {
    commute_distance
        * TRANSPORT_COST_PER_KM
        * Decimal::TWO
        * Decimal::from(days_in_office)
        * WORKING_DAYS_PER_MONTH
}

/// Step 9. Ties go to the suburbs.
fn verdict(
    total_city_cost: Decimal,
    total_suburb_cost: Decimal,
) -> Verdict {
    if total_city_cost < total_suburb_cost {
        Verdict::CityCenter
    } else {
        Verdict::Suburbs
    }
}
