//! Core simulation engine for monthly investment projections

use super::state::SimulationState;
use super::timeseries::{round_currency, MonthlySnapshot, ScenarioSummary, SimulationResult};
use crate::assumptions::{deflate, monthly_growth_rate, monthly_inflation_rate, Assumptions};
use crate::scenario::{ScenarioParameters, ValidationError};
use log::debug;

/// Main simulation engine
pub struct SimulationEngine {
    assumptions: Assumptions,
}

impl SimulationEngine {
    /// Create a new engine with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Simulate one scenario month by month.
    ///
    /// Validates the parameters up front; after that the fold is total and
    /// runs every month of the horizon. Each month applies, in order:
    /// interest on the prior balance, the clamped withdrawal if the
    /// withdrawal phase is active, then the deposit.
    pub fn simulate(
        &self,
        params: &ScenarioParameters,
    ) -> Result<SimulationResult, ValidationError> {
        params.validate()?;

        let monthly_rate = monthly_growth_rate(params.interest_rate, params.rate_basis);
        let monthly_inflation = monthly_inflation_rate(params.annual_inflation_rate);
        let horizon_months = params.horizon_months();

        let mut state = SimulationState::from_params(params);
        let mut snapshots = Vec::with_capacity(horizon_months as usize + 1);
        snapshots.push(self.record_month(&state, params, monthly_inflation));

        for month in 1..=horizon_months {
            state.advance_month();

            state.apply_interest(monthly_rate);
            if params.withdrawals_active(month) {
                state.apply_withdrawal(params.monthly_withdrawal, monthly_inflation);
            }
            state.apply_deposit(params.monthly_deposit);

            snapshots.push(self.record_month(&state, params, monthly_inflation));
        }

        let summary = self.summarize(params, &state, &snapshots);
        debug!(
            "simulated {} months, final balance {:.2}",
            horizon_months, state.balance
        );

        Ok(SimulationResult { snapshots, summary })
    }

    /// Record the current state as a snapshot
    fn record_month(
        &self,
        state: &SimulationState,
        params: &ScenarioParameters,
        monthly_inflation: f64,
    ) -> MonthlySnapshot {
        // With inflation correction disabled, nominal and real values are
        // defined to coincide exactly
        let adjusted = if params.annual_inflation_rate > 0.0 {
            deflate(state.balance, monthly_inflation, state.month)
        } else {
            state.balance
        };

        MonthlySnapshot {
            month: state.month,
            gross_balance: round_currency(state.balance),
            inflation_adjusted_balance: round_currency(adjusted),
        }
    }

    /// Compute summary statistics after the fold completes
    fn summarize(
        &self,
        params: &ScenarioParameters,
        state: &SimulationState,
        snapshots: &[MonthlySnapshot],
    ) -> ScenarioSummary {
        let tax_rate = self
            .assumptions
            .tax
            .rate_for_holding_days(params.holding_days());

        let gross_profit = state.balance - state.total_invested;
        // No floor: a losing scenario produces a negative tax that rebates
        // into the net profit
        let estimated_tax = gross_profit * tax_rate;

        ScenarioSummary {
            total_invested: round_currency(state.total_invested),
            gross_final_balance: round_currency(state.balance),
            gross_profit: round_currency(gross_profit),
            estimated_tax: round_currency(estimated_tax),
            net_profit: round_currency(gross_profit - estimated_tax),
            inflation_adjusted_final_value: snapshots
                .last()
                .map(|s| s.inflation_adjusted_balance)
                .unwrap_or(0.0),
            total_withdrawn: round_currency(state.total_withdrawn),
            total_withdrawn_inflation_adjusted: round_currency(state.total_withdrawn_deflated),
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_regressive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RateBasis;
    use approx::assert_abs_diff_eq;

    fn one_year_params() -> ScenarioParameters {
        ScenarioParameters::new(1000.0, 500.0, 1.0, RateBasis::Monthly, 1)
    }

    #[test]
    fn test_snapshot_sequence_shape() {
        let engine = SimulationEngine::default();
        let result = engine.simulate(&one_year_params()).unwrap();

        assert_eq!(result.snapshots.len(), 13);
        for (i, snap) in result.snapshots.iter().enumerate() {
            assert_eq!(snap.month, i as u32);
        }
        assert_eq!(result.snapshots[0].gross_balance, 1000.0);
    }

    #[test]
    fn test_balance_non_decreasing_without_withdrawals() {
        let engine = SimulationEngine::default();
        let params = ScenarioParameters::new(1000.0, 100.0, 0.5, RateBasis::Monthly, 5);
        let result = engine.simulate(&params).unwrap();

        for pair in result.snapshots.windows(2) {
            assert!(pair[1].gross_balance >= pair[0].gross_balance);
        }
    }

    #[test]
    fn test_zero_inflation_identity() {
        let engine = SimulationEngine::default();
        let result = engine.simulate(&one_year_params()).unwrap();

        for snap in &result.snapshots {
            assert_eq!(snap.inflation_adjusted_balance, snap.gross_balance);
        }
    }

    #[test]
    fn test_inflation_deflates_snapshots() {
        let engine = SimulationEngine::default();
        let mut params = one_year_params();
        params.annual_inflation_rate = 4.5;
        let result = engine.simulate(&params).unwrap();

        for snap in result.snapshots.iter().skip(1) {
            assert!(snap.inflation_adjusted_balance < snap.gross_balance);
        }
        assert_eq!(
            result.summary.inflation_adjusted_final_value,
            result.final_snapshot().inflation_adjusted_balance
        );
    }

    #[test]
    fn test_accumulation_matches_annuity_closed_form() {
        let engine = SimulationEngine::default();
        let result = engine.simulate(&one_year_params()).unwrap();

        // Initial capital compounds 12 times; each deposit lands after the
        // month's interest, so deposit m accrues 12 - m months of growth
        let expected = 1000.0 * 1.01f64.powi(12) + 500.0 * ((1.01f64.powi(12) - 1.0) / 0.01);

        assert_abs_diff_eq!(
            result.summary.gross_final_balance,
            expected,
            epsilon = 0.01
        );
        assert_eq!(result.summary.total_invested, 7000.0);
        assert_abs_diff_eq!(
            result.summary.gross_profit,
            expected - 7000.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_oversized_withdrawals_drain_to_deposit() {
        let engine = SimulationEngine::default();
        let params = ScenarioParameters::with_withdrawals(
            1000.0,
            500.0,
            1.0,
            RateBasis::Monthly,
            1,
            0.0,
            6,
            10_000.0,
        );
        let result = engine.simulate(&params).unwrap();

        // Every withdrawal month drains the balance to exactly 0 before the
        // deposit, so each snapshot from month 6 on is just the deposit
        for snap in result.snapshots.iter().filter(|s| s.month >= 6) {
            assert_eq!(snap.gross_balance, 500.0);
        }

        // Month 6 takes the full compounded balance; months 7..=12 each
        // take the deposit plus one month of interest on it
        let b5 = 1000.0 * 1.01f64.powi(5) + 500.0 * ((1.01f64.powi(5) - 1.0) / 0.01);
        let expected_withdrawn = b5 * 1.01 + 6.0 * 505.0;

        assert_abs_diff_eq!(
            result.summary.total_withdrawn,
            expected_withdrawn,
            epsilon = 0.01
        );
        // No inflation, so the deflated total matches the nominal one
        assert_eq!(
            result.summary.total_withdrawn_inflation_adjusted,
            result.summary.total_withdrawn
        );
    }

    #[test]
    fn test_tax_bracket_follows_horizon() {
        let engine = SimulationEngine::default();

        // 1 year = 365 holding days, inside the 0.175 bracket
        let result = engine.simulate(&one_year_params()).unwrap();
        assert_abs_diff_eq!(
            result.summary.estimated_tax,
            result.summary.gross_profit * 0.175,
            epsilon = 0.01
        );

        // 2 years = 730 holding days, past the last breakpoint
        let mut long = one_year_params();
        long.horizon_years = 2;
        let result = engine.simulate(&long).unwrap();
        assert_abs_diff_eq!(
            result.summary.estimated_tax,
            result.summary.gross_profit * 0.15,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_losing_scenario_keeps_negative_tax() {
        let engine = SimulationEngine::default();
        let params = ScenarioParameters::new(1000.0, 0.0, -1.0, RateBasis::Monthly, 1);
        let result = engine.simulate(&params).unwrap();

        assert!(result.summary.gross_profit < 0.0);
        assert!(result.summary.estimated_tax < 0.0);
        // The rebate makes the net loss smaller than the gross loss
        assert!(result.summary.net_profit > result.summary.gross_profit);
        assert_abs_diff_eq!(
            result.summary.net_profit,
            result.summary.gross_profit - result.summary.estimated_tax,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_validation_fails_fast() {
        let engine = SimulationEngine::default();
        let mut params = one_year_params();
        params.horizon_years = 0;

        assert_eq!(
            engine.simulate(&params).unwrap_err(),
            ValidationError::ZeroHorizon
        );
    }
}
