//! Scenario inputs: parameters, named definitions, and the CSV loader

mod data;
pub mod loader;

pub use data::{ScenarioDefinition, ScenarioParameters, ValidationError};
pub use loader::{load_default_scenarios, load_scenarios, load_scenarios_from_reader};
