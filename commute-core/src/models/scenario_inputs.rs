use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The seven figures of a scenario that feed the comparison engine.
///
/// Money fields are per month except `annual_salary`. `commute_distance`
/// is the one-way distance in kilometres. No range checks happen here;
/// `days_in_office` is expected to be 1–5 but the engine accepts anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub annual_salary: Decimal,
    pub days_in_office: i32,
    pub commute_distance: Decimal,
    pub city_center_rent: Decimal,
    pub suburb_rent: Decimal,
    pub other_city_expenses: Decimal,
    pub other_suburb_expenses: Decimal,
}
