//! Scenario runner for batch simulations and comparisons
//!
//! Holds the assumptions once, then runs any number of scenarios against
//! them; batch runs execute in parallel since every simulation reads only
//! its own parameters.

use crate::assumptions::Assumptions;
use crate::scenario::{ScenarioDefinition, ScenarioParameters, ValidationError};
use crate::simulation::{SimulationEngine, SimulationResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of one named scenario in a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub result: SimulationResult,
}

/// Paired results of the same parameters with and without the withdrawal
/// schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalComparison {
    pub baseline: ScenarioReport,
    pub with_withdrawals: ScenarioReport,
}

/// Pre-loaded scenario runner
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create a runner with default assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_regressive(),
        }
    }

    /// Create a runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Get a reference to the runner's assumptions
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run a single scenario
    pub fn run(&self, params: &ScenarioParameters) -> Result<SimulationResult, ValidationError> {
        let engine = SimulationEngine::new(self.assumptions.clone());
        engine.simulate(params)
    }

    /// Run a single named scenario
    pub fn run_definition(
        &self,
        definition: &ScenarioDefinition,
    ) -> Result<ScenarioReport, ValidationError> {
        Ok(ScenarioReport {
            name: definition.name.clone(),
            result: self.run(&definition.params)?,
        })
    }

    /// Run many scenarios in parallel; fails if any scenario fails validation
    pub fn run_batch(
        &self,
        definitions: &[ScenarioDefinition],
    ) -> Result<Vec<ScenarioReport>, ValidationError> {
        definitions
            .par_iter()
            .map(|definition| self.run_definition(definition))
            .collect()
    }

    /// Run a scenario against its own no-withdrawal baseline.
    ///
    /// The baseline shares every parameter except the withdrawal schedule,
    /// which is stripped.
    pub fn compare_with_without(
        &self,
        definition: &ScenarioDefinition,
    ) -> Result<WithdrawalComparison, ValidationError> {
        let baseline = ScenarioDefinition::new(
            format!("{} (no withdrawals)", definition.name),
            definition.params.without_withdrawals(),
        );

        let mut reports = self.run_batch(&[baseline, definition.clone()])?;
        let with_withdrawals = reports.pop().expect("batch of two returns two reports");
        let baseline = reports.pop().expect("batch of two returns two reports");

        Ok(WithdrawalComparison {
            baseline,
            with_withdrawals,
        })
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RateBasis;

    fn withdrawal_definition() -> ScenarioDefinition {
        ScenarioDefinition::new(
            "Retirement drawdown",
            ScenarioParameters::with_withdrawals(
                1000.0,
                500.0,
                1.0,
                RateBasis::Monthly,
                10,
                3.0,
                60,
                2000.0,
            ),
        )
    }

    #[test]
    fn test_run_batch_preserves_order_and_names() {
        let runner = ScenarioRunner::new();
        let definitions: Vec<_> = [0.5, 1.0, 1.5]
            .iter()
            .map(|&rate| {
                ScenarioDefinition::new(
                    format!("{rate}% monthly"),
                    ScenarioParameters::new(1000.0, 500.0, rate, RateBasis::Monthly, 5),
                )
            })
            .collect();

        let reports = runner.run_batch(&definitions).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].name, "0.5% monthly");
        assert_eq!(reports[2].name, "1.5% monthly");

        // A higher rate ends with a higher final balance
        assert!(
            reports[2].result.summary.gross_final_balance
                > reports[0].result.summary.gross_final_balance
        );
    }

    #[test]
    fn test_batch_fails_on_invalid_scenario() {
        let runner = ScenarioRunner::new();
        let mut bad = withdrawal_definition();
        bad.params.horizon_years = 0;

        assert!(runner.run_batch(&[bad]).is_err());
    }

    #[test]
    fn test_compare_with_without() {
        let runner = ScenarioRunner::new();
        let comparison = runner.compare_with_without(&withdrawal_definition()).unwrap();

        assert_eq!(comparison.with_withdrawals.name, "Retirement drawdown");
        assert_eq!(
            comparison.baseline.name,
            "Retirement drawdown (no withdrawals)"
        );
        assert_eq!(comparison.baseline.result.summary.total_withdrawn, 0.0);
        assert!(comparison.with_withdrawals.result.summary.total_withdrawn > 0.0);

        // Withdrawing can only reduce the final balance
        assert!(
            comparison.with_withdrawals.result.summary.gross_final_balance
                <= comparison.baseline.result.summary.gross_final_balance
        );
    }
}
