use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ScenarioInputs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: i64,
    /// Ownership tag. Passed through untouched; `None` for the shared scope.
    pub user_id: Option<String>,
    pub name: String,

    #[serde(flatten)]
    pub inputs: ScenarioInputs,

    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// For creating new scenarios (no id or timestamps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScenario {
    pub user_id: Option<String>,
    pub name: String,

    #[serde(flatten)]
    pub inputs: ScenarioInputs,

    pub is_default: bool,
}

/// A partial edit of a scenario. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioUpdate {
    pub name: Option<String>,
    pub annual_salary: Option<Decimal>,
    pub days_in_office: Option<i32>,
    pub commute_distance: Option<Decimal>,
    pub city_center_rent: Option<Decimal>,
    pub suburb_rent: Option<Decimal>,
    pub other_city_expenses: Option<Decimal>,
    pub other_suburb_expenses: Option<Decimal>,
}

impl ScenarioUpdate {
    /// True when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Field names set on this update, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.annual_salary.is_some() {
            fields.push("annual_salary");
        }
        if self.days_in_office.is_some() {
            fields.push("days_in_office");
        }
        if self.commute_distance.is_some() {
            fields.push("commute_distance");
        }
        if self.city_center_rent.is_some() {
            fields.push("city_center_rent");
        }
        if self.suburb_rent.is_some() {
            fields.push("suburb_rent");
        }
        if self.other_city_expenses.is_some() {
            fields.push("other_city_expenses");
        }
        if self.other_suburb_expenses.is_some() {
            fields.push("other_suburb_expenses");
        }
        fields
    }
}

impl ScenarioInputs {
    /// Returns a copy of these inputs with every field set on `update` replaced.
    pub fn with_update(
        &self,
        update: &ScenarioUpdate,
    ) -> ScenarioInputs {
        ScenarioInputs {
            annual_salary: update.annual_salary.unwrap_or(self.annual_salary),
            days_in_office: update.days_in_office.unwrap_or(self.days_in_office),
            commute_distance: update.commute_distance.unwrap_or(self.commute_distance),
            city_center_rent: update.city_center_rent.unwrap_or(self.city_center_rent),
            suburb_rent: update.suburb_rent.unwrap_or(self.suburb_rent),
            other_city_expenses: update
                .other_city_expenses
                .unwrap_or(self.other_city_expenses),
            other_suburb_expenses: update
                .other_suburb_expenses
                .unwrap_or(self.other_suburb_expenses),
        }
    }
}

impl Scenario {
    /// Merges `update` into a new scenario value. `self` is left untouched;
    /// timestamps are the store's business and are copied as-is.
    pub fn apply_update(
        &self,
        update: &ScenarioUpdate,
    ) -> Scenario {
        Scenario {
            id: self.id,
            user_id: self.user_id.clone(),
            name: update.name.clone().unwrap_or_else(|| self.name.clone()),
            inputs: self.inputs.with_update(update),
            is_default: self.is_default,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// A `NewScenario` carrying the same inputs under another name.
    pub fn to_new_scenario(
        &self,
        name: impl Into<String>,
    ) -> NewScenario {
        NewScenario {
            user_id: self.user_id.clone(),
            name: name.into(),
            inputs: self.inputs,
            is_default: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_scenario() -> Scenario {
        let ts = DateTime::parse_from_rfc3339("2025-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Scenario {
            id: 7,
            user_id: None,
            name: "Pune: Analyst".to_string(),
            inputs: ScenarioInputs {
                annual_salary: dec!(900000),
                days_in_office: 3,
                commute_distance: dec!(20),
                city_center_rent: dec!(32000),
                suburb_rent: dec!(14000),
                other_city_expenses: dec!(7000),
                other_suburb_expenses: dec!(4000),
            },
            is_default: false,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn apply_update_with_empty_update_is_identity() {
        let scenario = test_scenario();

        let updated = scenario.apply_update(&ScenarioUpdate::default());

        assert_eq!(updated, scenario);
    }

    #[test]
    fn apply_update_replaces_only_set_fields() {
        let scenario = test_scenario();
        let update = ScenarioUpdate {
            suburb_rent: Some(dec!(15500)),
            days_in_office: Some(5),
            ..Default::default()
        };

        let updated = scenario.apply_update(&update);

        assert_eq!(updated.inputs.suburb_rent, dec!(15500));
        assert_eq!(updated.inputs.days_in_office, 5);
        assert_eq!(updated.inputs.city_center_rent, dec!(32000));
        assert_eq!(updated.name, "Pune: Analyst");
        assert_eq!(updated.id, 7);
    }

    #[test]
    fn apply_update_does_not_mutate_original() {
        let scenario = test_scenario();
        let update = ScenarioUpdate {
            name: Some("Renamed".to_string()),
            annual_salary: Some(dec!(1)),
            ..Default::default()
        };

        let _ = scenario.apply_update(&update);

        assert_eq!(scenario.name, "Pune: Analyst");
        assert_eq!(scenario.inputs.annual_salary, dec!(900000));
    }

    #[test]
    fn is_empty_reports_default_update() {
        assert!(ScenarioUpdate::default().is_empty());
        assert!(
            !ScenarioUpdate {
                commute_distance: Some(dec!(0)),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn changed_fields_lists_set_fields_in_order() {
        let update = ScenarioUpdate {
            other_suburb_expenses: Some(dec!(1)),
            name: Some("x".to_string()),
            ..Default::default()
        };

        assert_eq!(update.changed_fields(), vec!["name", "other_suburb_expenses"]);
    }

    #[test]
    fn to_new_scenario_copies_inputs_and_clears_default_flag() {
        let mut scenario = test_scenario();
        scenario.is_default = true;

        let copy = scenario.to_new_scenario("Copy");

        assert_eq!(copy.name, "Copy");
        assert_eq!(copy.inputs, scenario.inputs);
        assert!(!copy.is_default);
    }
}
