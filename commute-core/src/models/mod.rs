mod comparison_record;
mod scenario;
mod scenario_inputs;
mod verdict;

pub use comparison_record::{ComparisonRecord, NewComparisonRecord};
pub use scenario::{NewScenario, Scenario, ScenarioUpdate};
pub use scenario_inputs::ScenarioInputs;
pub use verdict::Verdict;
