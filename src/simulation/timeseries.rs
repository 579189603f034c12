//! Output records for a simulated scenario

use serde::{Deserialize, Serialize};

/// Round a currency amount to 2 decimal places. Applied only when values
/// are recorded into snapshots or the summary, never to the running balance.
pub(crate) fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Account state recorded at the end of one simulated month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Month index, 0 at the start of the simulation
    pub month: u32,

    /// Nominal balance after this month's interest, withdrawal, and deposit
    pub gross_balance: f64,

    /// Balance deflated to month-0 purchasing power; equals `gross_balance`
    /// exactly when inflation correction is disabled
    pub inflation_adjusted_balance: f64,
}

impl MonthlySnapshot {
    /// Completed years at this snapshot, for year-grouped reporting
    pub fn year(&self) -> u32 {
        self.month / 12
    }
}

/// Summary statistics for a completed scenario, rounded to 2 decimal places.
///
/// `estimated_tax` is `gross_profit` times the withholding rate with no
/// floor: when the scenario loses money the "tax" goes negative and acts as
/// a rebate inside `net_profit`, matching the reference behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// Initial capital plus every monthly deposit
    pub total_invested: f64,

    /// Nominal balance at the final month
    pub gross_final_balance: f64,

    /// `gross_final_balance - total_invested`
    pub gross_profit: f64,

    /// Withholding tax on the gross profit for the full holding period
    pub estimated_tax: f64,

    /// `gross_profit - estimated_tax`
    pub net_profit: f64,

    /// Final balance deflated to month-0 purchasing power
    pub inflation_adjusted_final_value: f64,

    /// Sum of all (clamped) withdrawals actually taken
    pub total_withdrawn: f64,

    /// Withdrawals deflated to month-0 purchasing power at the month each
    /// was taken
    pub total_withdrawn_inflation_adjusted: f64,
}

/// Complete result of simulating one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One snapshot per month, month 0 through the horizon inclusive
    pub snapshots: Vec<MonthlySnapshot>,

    /// Summary statistics over the whole run
    pub summary: ScenarioSummary,
}

impl SimulationResult {
    /// Snapshot at the final month of the horizon
    pub fn final_snapshot(&self) -> &MonthlySnapshot {
        self.snapshots
            .last()
            .expect("simulation always records month 0")
    }
}
