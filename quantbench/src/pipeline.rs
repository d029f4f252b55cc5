//! Pipeline orchestration.
//!
//! The three stages run sequentially: simulator, benchmark, then
//! aggregation.  Each returns an immutable result record consumed by
//! the next stage; there is no shared mutable state and no recovery.
//! Any failure propagates and terminates the run.

use crate::config::PipelineConfig;
use anyhow::Result;
use qb_pricing::{black_scholes_call, simulate};
use qb_report::{ReportWriter, SummaryRecord, TerminalStatsRecord};
use std::path::PathBuf;
use tracing::info;

const BANNER_WIDTH: usize = 70;

/// Everything a completed run produced, for callers and tests.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// The flattened summary row.
    pub summary: SummaryRecord,
    /// Path of the written summary table.
    pub summary_path: PathBuf,
    /// Path of the written terminal-distribution table.
    pub terminal_stats_path: PathBuf,
}

/// Run the full pipeline with the given configuration.
pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("{rule}");
    println!("QUANTBENCH ANALYSIS PIPELINE");
    println!("{rule}");
    println!("Start Time: {}", chrono::Local::now().to_rfc3339());
    println!("Output Directory: {}", config.output_dir.display());
    println!("{rule}");

    let simulation = simulate(&config.parameters, config.seed)?;
    let benchmark = qb_linalg::run_benchmark(
        config.matrix_size,
        config.eigen_block_size,
        config.seed,
    )?;

    let p = &config.parameters;
    let analytical_price = black_scholes_call(
        p.initial_price,
        p.strike,
        p.risk_free_rate,
        p.volatility,
        p.maturity_years,
    );

    let summary = SummaryRecord::new(
        chrono::Local::now().to_rfc3339(),
        &simulation,
        analytical_price,
        &benchmark,
    );
    let terminal_stats = TerminalStatsRecord::from_terminal_prices(&simulation.terminal_prices)?;

    let writer = ReportWriter::new(&config.output_dir);
    let summary_path = writer.write_summary(&summary)?;
    let terminal_stats_path = writer.write_terminal_stats(&terminal_stats)?;
    info!(
        summary = %summary_path.display(),
        terminal_stats = %terminal_stats_path.display(),
        "result tables written"
    );

    println!();
    println!("{rule}");
    println!("RESULTS SUMMARY");
    println!("{rule}");
    println!("Monte Carlo Option Price: ${:.4}", summary.mc_option_price);
    println!("Analytical BS Price:      ${:.4}", summary.analytical_bs_price);
    println!(
        "Pricing Error:            ${:.4} ({:.2}%)",
        summary.pricing_error, summary.error_percentage
    );
    println!("95% Confidence Interval:  ±${:.4}", summary.mc_ci_95);
    println!("MC Computation Time:      {:.2} seconds", summary.mc_elapsed_time_sec);
    println!(
        "Matrix Computation Time:  {:.2} seconds",
        summary.matrix_elapsed_time_sec
    );
    println!("{rule}");
    println!("Results saved to: {}", summary_path.display());
    println!("End Time: {}", chrono::Local::now().to_rfc3339());
    println!("{rule}");

    Ok(PipelineOutcome {
        summary,
        summary_path,
        terminal_stats_path,
    })
}
