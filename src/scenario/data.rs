//! Scenario input records and parameter validation

use crate::assumptions::RateBasis;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days per year used to size the holding period for the tax bracket
/// lookup. A calendar approximation: leap years and the timing of
/// individual contributions are ignored.
const DAYS_PER_YEAR: u32 = 365;

/// Parameter validation failure raised before a simulation starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("investment horizon must cover at least one year")]
    ZeroHorizon,
    #[error("initial capital cannot be negative (got {0})")]
    NegativeInitialCapital(f64),
    #[error("monthly deposit cannot be negative (got {0})")]
    NegativeMonthlyDeposit(f64),
    #[error("monthly withdrawal cannot be negative (got {0})")]
    NegativeMonthlyWithdrawal(f64),
    #[error("withdrawal start month must be 1 or later")]
    WithdrawalStartBeforeFirstMonth,
}

/// Complete set of inputs for one simulated scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Account balance at month 0
    pub initial_capital: f64,

    /// Deposit added at the end of every month after month 0
    pub monthly_deposit: f64,

    /// Quoted interest rate in percent; magnitude depends on `rate_basis`
    pub interest_rate: f64,

    /// Compounding basis of the quoted rate
    pub rate_basis: RateBasis,

    /// Length of the simulation in years
    pub horizon_years: u32,

    /// Annual inflation in percent; 0 disables inflation correction
    pub annual_inflation_rate: f64,

    /// First month of the withdrawal phase; `None` disables withdrawals
    #[serde(default)]
    pub withdrawal_start_month: Option<u32>,

    /// Amount requested at each withdrawal month (clamped to the balance)
    #[serde(default)]
    pub monthly_withdrawal: f64,
}

impl ScenarioParameters {
    /// Create a scenario with deposits only: no inflation correction and
    /// no withdrawal phase
    pub fn new(
        initial_capital: f64,
        monthly_deposit: f64,
        interest_rate: f64,
        rate_basis: RateBasis,
        horizon_years: u32,
    ) -> Self {
        Self {
            initial_capital,
            monthly_deposit,
            interest_rate,
            rate_basis,
            horizon_years,
            annual_inflation_rate: 0.0,
            withdrawal_start_month: None,
            monthly_withdrawal: 0.0,
        }
    }

    /// Create a scenario with a scheduled withdrawal phase
    pub fn with_withdrawals(
        initial_capital: f64,
        monthly_deposit: f64,
        interest_rate: f64,
        rate_basis: RateBasis,
        horizon_years: u32,
        annual_inflation_rate: f64,
        withdrawal_start_month: u32,
        monthly_withdrawal: f64,
    ) -> Self {
        Self {
            initial_capital,
            monthly_deposit,
            interest_rate,
            rate_basis,
            horizon_years,
            annual_inflation_rate,
            withdrawal_start_month: Some(withdrawal_start_month),
            monthly_withdrawal,
        }
    }

    /// Same parameters with the withdrawal schedule stripped, used as the
    /// baseline in with/without comparisons
    pub fn without_withdrawals(&self) -> Self {
        Self {
            withdrawal_start_month: None,
            monthly_withdrawal: 0.0,
            ..self.clone()
        }
    }

    /// Number of simulated months after month 0
    pub fn horizon_months(&self) -> u32 {
        self.horizon_years * 12
    }

    /// Holding period length used for the tax bracket lookup
    pub fn holding_days(&self) -> u32 {
        self.horizon_years * DAYS_PER_YEAR
    }

    /// Whether a withdrawal is taken at the given month.
    ///
    /// Re-evaluated every month rather than tracked as a phase state: the
    /// withdrawal phase is just the months at or past the start month.
    pub fn withdrawals_active(&self, month: u32) -> bool {
        match self.withdrawal_start_month {
            Some(start) => month >= start && self.monthly_withdrawal > 0.0,
            None => false,
        }
    }

    /// Check all inputs before a run; the fold itself is total once these pass
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.horizon_years == 0 {
            return Err(ValidationError::ZeroHorizon);
        }
        if self.initial_capital < 0.0 {
            return Err(ValidationError::NegativeInitialCapital(
                self.initial_capital,
            ));
        }
        if self.monthly_deposit < 0.0 {
            return Err(ValidationError::NegativeMonthlyDeposit(
                self.monthly_deposit,
            ));
        }
        if self.monthly_withdrawal < 0.0 {
            return Err(ValidationError::NegativeMonthlyWithdrawal(
                self.monthly_withdrawal,
            ));
        }
        if self.withdrawal_start_month == Some(0) {
            return Err(ValidationError::WithdrawalStartBeforeFirstMonth);
        }
        Ok(())
    }
}

/// A named scenario, the unit of batch runs and comparisons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    pub name: String,
    pub params: ScenarioParameters,
}

impl ScenarioDefinition {
    pub fn new(name: impl Into<String>, params: ScenarioParameters) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}
