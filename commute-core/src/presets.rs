//! Canned scenarios used to seed a fresh database.

use rand::Rng;
use rust_decimal_macros::dec;

use crate::ScenarioInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioPreset {
    pub name: &'static str,
    pub inputs: ScenarioInputs,
}

/// The four built-in presets, in display order.
pub fn default_presets() -> Vec<ScenarioPreset> {
    vec![
        ScenarioPreset {
            name: "Mumbai: Software Engineer (Bandra to BKC)",
            inputs: ScenarioInputs {
                annual_salary: dec!(1200000),
                days_in_office: 5,
                commute_distance: dec!(15),
                city_center_rent: dec!(50000),
                suburb_rent: dec!(20000),
                other_city_expenses: dec!(12000),
                other_suburb_expenses: dec!(6000),
            },
        },
        ScenarioPreset {
            name: "Bangalore: Manager (Koramangala to Whitefield)",
            inputs: ScenarioInputs {
                annual_salary: dec!(1800000),
                days_in_office: 4,
                commute_distance: dec!(25),
                city_center_rent: dec!(45000),
                suburb_rent: dec!(18000),
                other_city_expenses: dec!(10000),
                other_suburb_expenses: dec!(5000),
            },
        },
        ScenarioPreset {
            name: "Delhi: Junior Developer (Karol Bagh to Gurugram)",
            inputs: ScenarioInputs {
                annual_salary: dec!(600000),
                days_in_office: 5,
                commute_distance: dec!(30),
                city_center_rent: dec!(35000),
                suburb_rent: dec!(12000),
                other_city_expenses: dec!(8000),
                other_suburb_expenses: dec!(3000),
            },
        },
        ScenarioPreset {
            name: "Hyderabad: Designer (Jubilee Hills to Gachibowli)",
            inputs: ScenarioInputs {
                annual_salary: dec!(900000),
                days_in_office: 3,
                commute_distance: dec!(20),
                city_center_rent: dec!(32000),
                suburb_rent: dec!(14000),
                other_city_expenses: dec!(7000),
                other_suburb_expenses: dec!(4000),
            },
        },
    ]
}

/// Chooses which preset seeds the default scenario.
pub trait PresetPicker: Send + Sync {
    /// Index in `0..len`. `len` is never zero.
    fn pick_index(
        &self,
        len: usize,
    ) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPresetPicker;

impl PresetPicker for RandomPresetPicker {
    fn pick_index(
        &self,
        len: usize,
    ) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same preset (wrapping past the end).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPresetPicker(pub usize);

impl PresetPicker for FixedPresetPicker {
    fn pick_index(
        &self,
        len: usize,
    ) -> usize {
        self.0 % len
    }
}

/// Picks a preset from [`default_presets`].
pub fn pick_preset(picker: &dyn PresetPicker) -> ScenarioPreset {
    let presets = default_presets();
    let index = picker.pick_index(presets.len());
    presets[index % presets.len()]
}
