//! Running state of a scenario simulation

use crate::assumptions::deflate;
use crate::scenario::ScenarioParameters;

/// Account state threaded through the monthly fold.
///
/// The mutation methods are the fold's ordered steps: interest, then any
/// withdrawal, then the deposit. Each month's steps read the previous
/// month's ending balance, so the order is part of the contract.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current month index (0 at initialization)
    pub month: u32,

    /// Running nominal balance, full precision
    pub balance: f64,

    /// Initial capital plus deposits credited so far
    pub total_invested: f64,

    /// Nominal sum of withdrawals actually taken
    pub total_withdrawn: f64,

    /// Withdrawals deflated to month-0 purchasing power as they were taken;
    /// maintained only at withdrawal time, never recomputed retroactively
    pub total_withdrawn_deflated: f64,
}

impl SimulationState {
    /// Initialize state at month 0 from scenario parameters
    pub fn from_params(params: &ScenarioParameters) -> Self {
        Self {
            month: 0,
            balance: params.initial_capital,
            total_invested: params.initial_capital,
            total_withdrawn: 0.0,
            total_withdrawn_deflated: 0.0,
        }
    }

    /// Advance to the next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Step a: compound one month of interest into the balance
    pub fn apply_interest(&mut self, monthly_rate: f64) {
        self.balance *= 1.0 + monthly_rate;
    }

    /// Step b: take a withdrawal, clamped so the balance never goes
    /// negative. Returns the amount actually withdrawn.
    pub fn apply_withdrawal(&mut self, requested: f64, monthly_inflation: f64) -> f64 {
        let withdrawn = requested.min(self.balance);
        self.balance -= withdrawn;
        self.total_withdrawn += withdrawn;
        self.total_withdrawn_deflated += deflate(withdrawn, monthly_inflation, self.month);
        withdrawn
    }

    /// Step b2: credit the monthly deposit after any withdrawal
    pub fn apply_deposit(&mut self, amount: f64) {
        self.balance += amount;
        self.total_invested += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RateBasis;
    use approx::assert_abs_diff_eq;

    fn state() -> SimulationState {
        let params = ScenarioParameters::new(1000.0, 500.0, 1.0, RateBasis::Monthly, 1);
        SimulationState::from_params(&params)
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.month, 0);
        assert_eq!(state.balance, 1000.0);
        assert_eq!(state.total_invested, 1000.0);
        assert_eq!(state.total_withdrawn, 0.0);
    }

    #[test]
    fn test_interest_then_deposit() {
        let mut state = state();
        state.advance_month();
        state.apply_interest(0.01);
        state.apply_deposit(500.0);

        assert_abs_diff_eq!(state.balance, 1510.0, epsilon = 1e-9);
        assert_eq!(state.total_invested, 1500.0);
    }

    #[test]
    fn test_withdrawal_clamps_at_balance() {
        let mut state = state();
        state.advance_month();

        let withdrawn = state.apply_withdrawal(10_000.0, 0.0);
        assert_eq!(withdrawn, 1000.0);
        assert_eq!(state.balance, 0.0);
        assert_eq!(state.total_withdrawn, 1000.0);
        // With no inflation the deflated total tracks the nominal one
        assert_eq!(state.total_withdrawn_deflated, 1000.0);
    }

    #[test]
    fn test_withdrawal_deflation_uses_current_month() {
        let mut state = state();
        let monthly_inflation = 0.01;
        for _ in 0..12 {
            state.advance_month();
        }

        state.apply_withdrawal(500.0, monthly_inflation);
        assert_eq!(state.total_withdrawn, 500.0);
        assert_abs_diff_eq!(
            state.total_withdrawn_deflated,
            500.0 / 1.01f64.powi(12),
            epsilon = 1e-9
        );
    }
}
