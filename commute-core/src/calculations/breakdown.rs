//! Per-option expense breakdowns for display.
//!
//! These repackage figures already produced by
//! [`calculate_comparison`](super::calculate_comparison); the `total` of each
//! breakdown always equals the matching total on the comparison result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ScenarioInputs;
use crate::calculations::ComparisonResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub rent: Decimal,
    pub transport: Decimal,
    pub opportunity: Decimal,
    pub other: Decimal,
    pub total: Decimal,
}

/// Living near the office: rent and other expenses, no commute.
pub fn city_expense_breakdown(
    city_rent: Decimal,
    city_other_expenses: Decimal,
) -> ExpenseBreakdown {
    ExpenseBreakdown {
        rent: city_rent,
        transport: Decimal::ZERO,
        opportunity: Decimal::ZERO,
        other: city_other_expenses,
        total: city_rent + city_other_expenses,
    }
}

/// Living far from the office: rent, commute and other expenses.
pub fn suburb_expense_breakdown(
    suburb_rent: Decimal,
    transport_cost: Decimal,
    opportunity_cost: Decimal,
    suburb_other_expenses: Decimal,
) -> ExpenseBreakdown {
    ExpenseBreakdown {
        rent: suburb_rent,
        transport: transport_cost,
        opportunity: opportunity_cost,
        other: suburb_other_expenses,
        total: suburb_rent + transport_cost + opportunity_cost + suburb_other_expenses,
    }
}

impl ComparisonResult {
    pub fn city_breakdown(
        &self,
        inputs: &ScenarioInputs,
    ) -> ExpenseBreakdown {
        city_expense_breakdown(inputs.city_center_rent, inputs.other_city_expenses)
    }

    pub fn suburb_breakdown(
        &self,
        inputs: &ScenarioInputs,
    ) -> ExpenseBreakdown {
        suburb_expense_breakdown(
            inputs.suburb_rent,
            self.transport_cost,
            self.monthly_opportunity_cost,
            inputs.other_suburb_expenses,
        )
    }
}
