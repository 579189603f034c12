//! Month-by-month investment simulation

mod engine;
mod state;
mod timeseries;

pub use engine::SimulationEngine;
pub use state::SimulationState;
pub use timeseries::{MonthlySnapshot, ScenarioSummary, SimulationResult};
