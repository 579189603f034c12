//! Withholding tax brackets by holding period

/// Regressive withholding tax schedule keyed on holding period length.
///
/// Brackets are (inclusive upper bound in days, rate) pairs in strictly
/// increasing day order; the first matching bracket wins and holdings
/// beyond the last breakpoint fall through to the residual rate.
#[derive(Debug, Clone)]
pub struct TaxBracketSchedule {
    brackets: Vec<(u32, f64)>,
    residual_rate: f64,
}

impl TaxBracketSchedule {
    /// Default regressive table: 22.5% up to 180 days, stepping down to a
    /// 15% residual after two years
    pub fn regressive_default() -> Self {
        Self {
            brackets: vec![(180, 0.225), (360, 0.20), (720, 0.175)],
            residual_rate: 0.15,
        }
    }

    /// Build a custom schedule from breakpoints and a residual rate
    pub fn from_brackets(brackets: Vec<(u32, f64)>, residual_rate: f64) -> Self {
        Self {
            brackets,
            residual_rate,
        }
    }

    /// Withholding rate for a holding period of `holding_days`
    pub fn rate_for_holding_days(&self, holding_days: u32) -> f64 {
        for &(max_days, rate) in &self.brackets {
            if holding_days <= max_days {
                return rate;
            }
        }
        self.residual_rate
    }
}
