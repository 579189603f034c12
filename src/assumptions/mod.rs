//! Simulation assumptions: rate conversions and withholding tax brackets

mod tax;
pub mod rates;

pub use rates::{deflate, monthly_growth_rate, monthly_inflation_rate, RateBasis};
pub use tax::TaxBracketSchedule;

/// Container for all assumptions a simulation run depends on
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub tax: TaxBracketSchedule,
}

impl Assumptions {
    /// Assumptions matching the reference behavior: the regressive
    /// withholding table applied to the whole horizon
    pub fn default_regressive() -> Self {
        Self {
            tax: TaxBracketSchedule::regressive_default(),
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_regressive()
    }
}
