use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Verdict;

/// A snapshot of the totals shown to the user when a scenario was viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub id: i64,
    pub scenario_id: i64,
    pub user_id: Option<String>,
    pub total_city_cost: Decimal,
    pub total_suburb_cost: Decimal,
    pub viewed_at: DateTime<Utc>,
}

/// For recording a new view (no id or timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComparisonRecord {
    pub scenario_id: i64,
    pub user_id: Option<String>,
    pub total_city_cost: Decimal,
    pub total_suburb_cost: Decimal,
}

impl ComparisonRecord {
    /// The verdict these totals produced. Ties go to the suburbs.
    pub fn verdict(&self) -> Verdict {
        if self.total_city_cost < self.total_suburb_cost {
            Verdict::CityCenter
        } else {
            Verdict::Suburbs
        }
    }
}
