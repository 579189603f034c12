//! Run every scenario from a scenario definition file
//!
//! Usage: cargo run --bin run_scenarios [scenarios.csv]

use investment_simulator::scenario::loader::DEFAULT_SCENARIOS_PATH;
use investment_simulator::scenario::load_scenarios;
use investment_simulator::ScenarioRunner;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", path);
    let definitions = load_scenarios(&path).expect("Failed to load scenarios");
    println!(
        "Loaded {} scenarios in {:?}",
        definitions.len(),
        start.elapsed()
    );

    let runner = ScenarioRunner::new();
    let run_start = Instant::now();
    let reports = runner
        .run_batch(&definitions)
        .expect("Scenario failed validation");
    println!("Simulations complete in {:?}", run_start.elapsed());

    // Per-scenario summary table
    println!(
        "\n{:<42} {:>14} {:>14} {:>12} {:>14} {:>14}",
        "Scenario", "Invested", "Final", "Tax", "NetProfit", "Withdrawn"
    );
    println!("{}", "-".repeat(116));
    for report in &reports {
        let summary = &report.result.summary;
        println!(
            "{:<42} {:>14.2} {:>14.2} {:>12.2} {:>14.2} {:>14.2}",
            report.name,
            summary.total_invested,
            summary.gross_final_balance,
            summary.estimated_tax,
            summary.net_profit,
            summary.total_withdrawn,
        );
    }

    // Combined long-format series across all scenarios
    let output_path = "scenario_series.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");
    writeln!(
        file,
        "Month,Year,Scenario,GrossBalance,InflationAdjustedBalance"
    )
    .unwrap();

    for report in &reports {
        for snap in &report.result.snapshots {
            writeln!(
                file,
                "{},{},{},{:.2},{:.2}",
                snap.month,
                snap.year(),
                report.name,
                snap.gross_balance,
                snap.inflation_adjusted_balance,
            )
            .unwrap();
        }
    }

    println!("\nCombined series written to: {}", output_path);
    println!("Total time: {:?}", start.elapsed());
}
