//! Investment Simulator - Monthly projection engine for investment scenarios
//!
//! This library provides:
//! - Month-by-month balance evolution under deposits, interest, scheduled
//!   withdrawals, and inflation correction
//! - Summary statistics (invested total, gross/net profit, withholding tax,
//!   inflation-adjusted value, cumulative withdrawals)
//! - Regressive holding-period tax brackets and rate normalization
//! - Batch and with/without-withdrawal scenario comparison

pub mod assumptions;
pub mod runner;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use assumptions::{Assumptions, RateBasis, TaxBracketSchedule};
pub use runner::{ScenarioReport, ScenarioRunner, WithdrawalComparison};
pub use scenario::{ScenarioDefinition, ScenarioParameters, ValidationError};
pub use simulation::{MonthlySnapshot, ScenarioSummary, SimulationEngine, SimulationResult};
