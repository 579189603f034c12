//! Load scenario definitions from CSV files

use super::{ScenarioDefinition, ScenarioParameters};
use crate::assumptions::RateBasis;
use csv::Reader;
use log::info;
use std::error::Error;
use std::path::Path;

/// Default location of the scenario definition file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "InitialCapital")]
    initial_capital: f64,
    #[serde(rename = "MonthlyDeposit")]
    monthly_deposit: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "RateBasis")]
    rate_basis: String,
    #[serde(rename = "HorizonYears")]
    horizon_years: u32,
    #[serde(rename = "AnnualInflationRate")]
    annual_inflation_rate: f64,
    #[serde(rename = "WithdrawalStartMonth")]
    withdrawal_start_month: Option<u32>,
    #[serde(rename = "MonthlyWithdrawal")]
    monthly_withdrawal: Option<f64>,
}

impl CsvRow {
    fn to_definition(self) -> Result<ScenarioDefinition, Box<dyn Error>> {
        let rate_basis = RateBasis::from_label(&self.rate_basis)
            .ok_or_else(|| format!("Unknown RateBasis: {}", self.rate_basis))?;

        Ok(ScenarioDefinition {
            name: self.name,
            params: ScenarioParameters {
                initial_capital: self.initial_capital,
                monthly_deposit: self.monthly_deposit,
                interest_rate: self.interest_rate,
                rate_basis,
                horizon_years: self.horizon_years,
                annual_inflation_rate: self.annual_inflation_rate,
                withdrawal_start_month: self.withdrawal_start_month,
                monthly_withdrawal: self.monthly_withdrawal.unwrap_or(0.0),
            },
        })
    }
}

/// Load all scenario definitions from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioDefinition>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path.as_ref())?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_definition()?);
    }

    info!(
        "loaded {} scenarios from {}",
        scenarios.len(),
        path.as_ref().display()
    );
    Ok(scenarios)
}

/// Load scenario definitions from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ScenarioDefinition>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_definition()?);
    }

    Ok(scenarios)
}

/// Load scenario definitions from the default location
pub fn load_default_scenarios() -> Result<Vec<ScenarioDefinition>, Box<dyn Error>> {
    load_scenarios(DEFAULT_SCENARIOS_PATH)
}
