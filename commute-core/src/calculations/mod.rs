//! Cost comparison between living in the city center and commuting from
//! the suburbs.
//!
//! Everything in this module is pure and synchronous. Storage and the
//! scenario service live elsewhere and are never called from here.

pub mod analytics;
pub mod breakdown;
pub mod breakeven;
pub mod common;
pub mod comparison;

pub use analytics::CommuteAnalytics;
pub use breakdown::{ExpenseBreakdown, city_expense_breakdown, suburb_expense_breakdown};
pub use breakeven::calculate_breakeven;
pub use comparison::{
    AVERAGE_SPEED_KMH, ComparisonResult, MONTHLY_WORKING_HOURS, TRANSPORT_COST_PER_KM,
    WORKING_DAYS_PER_MONTH, calculate_comparison,
};
