//! Investment Simulator CLI
//!
//! Runs a single scenario, or a with/without-withdrawal comparison when a
//! withdrawal schedule is given, then writes the monthly series as CSV

use anyhow::Context;
use clap::Parser;
use investment_simulator::assumptions::{deflate, monthly_inflation_rate};
use investment_simulator::{
    RateBasis, ScenarioDefinition, ScenarioParameters, ScenarioReport, ScenarioRunner,
};
use std::fs::File;
use std::io::Write;

#[derive(Parser)]
#[command(name = "investment_simulator")]
#[command(about = "Month-by-month investment scenario simulator", long_about = None)]
struct Cli {
    /// Account balance at month 0
    #[arg(long, default_value_t = 1000.0)]
    initial_capital: f64,

    /// Deposit added at the end of every month
    #[arg(long, default_value_t = 500.0)]
    monthly_deposit: f64,

    /// Quoted interest rate in percent
    #[arg(long, default_value_t = 1.0)]
    interest_rate: f64,

    /// Basis of the quoted rate: monthly or annual
    #[arg(long, default_value = "monthly")]
    rate_basis: String,

    /// Investment horizon in years
    #[arg(long, default_value_t = 50)]
    years: u32,

    /// Annual inflation in percent (0 disables correction)
    #[arg(long, default_value_t = 3.0)]
    inflation: f64,

    /// First month of the withdrawal phase; omit for no withdrawals
    #[arg(long)]
    withdrawal_start_month: Option<u32>,

    /// Amount withdrawn each month of the withdrawal phase
    #[arg(long, default_value_t = 0.0)]
    monthly_withdrawal: f64,

    /// Path of the series CSV written after the run
    #[arg(long, default_value = "simulation_output.csv")]
    output: String,

    /// Print scenario reports as JSON instead of console tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rate_basis = RateBasis::from_label(&cli.rate_basis)
        .with_context(|| format!("unknown rate basis: {}", cli.rate_basis))?;

    let params = ScenarioParameters {
        initial_capital: cli.initial_capital,
        monthly_deposit: cli.monthly_deposit,
        interest_rate: cli.interest_rate,
        rate_basis,
        horizon_years: cli.years,
        annual_inflation_rate: cli.inflation,
        withdrawal_start_month: cli.withdrawal_start_month,
        monthly_withdrawal: cli.monthly_withdrawal,
    };

    println!("Investment Simulator v0.1.0");
    println!("===========================\n");
    println!("  Initial capital: ${:.2}", params.initial_capital);
    println!("  Monthly deposit: ${:.2}", params.monthly_deposit);
    println!(
        "  Interest rate: {}% ({})",
        params.interest_rate,
        params.rate_basis.as_str()
    );
    println!("  Horizon: {} years", params.horizon_years);
    println!("  Annual inflation: {}%", params.annual_inflation_rate);

    let runner = ScenarioRunner::new();
    let reports: Vec<ScenarioReport> = match params.withdrawal_start_month {
        Some(start) => {
            let monthly_inflation = monthly_inflation_rate(params.annual_inflation_rate);
            println!(
                "  Withdrawals: ${:.2}/month from month {} (month-0 purchasing power ${:.2})",
                params.monthly_withdrawal,
                start,
                deflate(params.monthly_withdrawal, monthly_inflation, start)
            );

            let definition = ScenarioDefinition::new(
                format!("Withdrawals from month {start}"),
                params.clone(),
            );
            let comparison = runner.compare_with_without(&definition)?;
            vec![comparison.baseline, comparison.with_withdrawals]
        }
        None => {
            let definition = ScenarioDefinition::new("Accumulation only", params.clone());
            vec![runner.run_definition(&definition)?]
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    write_series_csv(&cli.output, &reports)
        .with_context(|| format!("failed to write {}", cli.output))?;
    println!("\nFull series written to: {}", cli.output);

    Ok(())
}

fn print_report(report: &ScenarioReport) {
    println!("\nScenario: {}", report.name);
    println!("{:>6} {:>16} {:>18}", "Month", "Gross", "Adjusted");
    println!("{}", "-".repeat(42));

    for snap in report.result.snapshots.iter().take(13) {
        println!(
            "{:>6} {:>16.2} {:>18.2}",
            snap.month, snap.gross_balance, snap.inflation_adjusted_balance
        );
    }
    if report.result.snapshots.len() > 13 {
        println!("... ({} more months)", report.result.snapshots.len() - 13);
    }

    let summary = &report.result.summary;
    println!("\nSummary:");
    println!("  Total Invested: ${:.2}", summary.total_invested);
    println!("  Gross Final Balance: ${:.2}", summary.gross_final_balance);
    println!("  Gross Profit: ${:.2}", summary.gross_profit);
    println!("  Estimated Tax: ${:.2}", summary.estimated_tax);
    println!("  Net Profit: ${:.2}", summary.net_profit);
    println!(
        "  Inflation-Adjusted Final Value: ${:.2}",
        summary.inflation_adjusted_final_value
    );
    println!("  Total Withdrawn: ${:.2}", summary.total_withdrawn);
    println!(
        "  Total Withdrawn (adjusted): ${:.2}",
        summary.total_withdrawn_inflation_adjusted
    );
}

/// Write all scenarios as one long-format series table
fn write_series_csv(path: &str, reports: &[ScenarioReport]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Scenario,GrossBalance,InflationAdjustedBalance")?;

    for report in reports {
        for snap in &report.result.snapshots {
            writeln!(
                file,
                "{},{},{:.2},{:.2}",
                snap.month, report.name, snap.gross_balance, snap.inflation_adjusted_balance
            )?;
        }
    }

    Ok(())
}
