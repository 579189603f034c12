//! Rate conversions between annual and monthly compounding bases

use serde::{Deserialize, Serialize};

/// Compounding basis of a quoted interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateBasis {
    /// Rate is quoted per month
    Monthly,
    /// Rate is quoted per year, compounded monthly when normalized
    Annual,
}

impl RateBasis {
    /// Parse a basis label as it appears in scenario files and CLI flags
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "monthly" => Some(RateBasis::Monthly),
            "annual" => Some(RateBasis::Annual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RateBasis::Monthly => "Monthly",
            RateBasis::Annual => "Annual",
        }
    }
}

/// Convert a quoted percentage rate to a monthly growth fraction.
///
/// A monthly quote passes through as `rate / 100`. An annual quote is
/// converted to its monthly-compounded equivalent `(1 + rate/100)^(1/12) - 1`.
/// Zero and negative rates pass through (a negative rate simulates loss);
/// rates below -100% are not meaningful and are not validated here.
pub fn monthly_growth_rate(rate: f64, basis: RateBasis) -> f64 {
    match basis {
        RateBasis::Monthly => rate / 100.0,
        RateBasis::Annual => (1.0 + rate / 100.0).powf(1.0 / 12.0) - 1.0,
    }
}

/// Monthly inflation fraction equivalent to an annual inflation percentage.
///
/// A non-positive annual percentage disables inflation correction entirely
/// and maps to exactly 0.0, so nominal and real values coincide.
pub fn monthly_inflation_rate(annual_pct: f64) -> f64 {
    if annual_pct > 0.0 {
        (1.0 + annual_pct / 100.0).powf(1.0 / 12.0) - 1.0
    } else {
        0.0
    }
}

/// Deflate a nominal amount by `months` of inflation to month-0 purchasing power
pub fn deflate(amount: f64, monthly_inflation: f64, months: u32) -> f64 {
    amount / (1.0 + monthly_inflation).powi(months as i32)
}
