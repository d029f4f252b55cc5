//! Flattened output records.
//!
//! Field order defines the CSV column order, so both structs list
//! their fields exactly as the output tables document them.

use crate::error::Result;
use qb_core::{Real, Size};
use qb_linalg::BenchmarkResult;
use qb_math::DescriptiveStatistics;
use qb_pricing::SimulationResult;
use serde::Serialize;

/// Fixed label for the terminal-distribution table's `metric` column.
const TERMINAL_METRIC_LABEL: &str = "Terminal Stock Price Distribution";

/// One-row summary merging the Monte Carlo result, the analytical
/// cross-check, and the matrix benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    /// Run timestamp (RFC 3339).
    pub timestamp: String,
    /// Number of simulated paths.
    pub monte_carlo_simulations: Size,
    /// Monte Carlo option price estimate.
    pub mc_option_price: Real,
    /// Standard error of the estimate.
    pub mc_std_error: Real,
    /// 95% confidence half-width.
    pub mc_ci_95: Real,
    /// Simulation wall-clock time in seconds.
    pub mc_elapsed_time_sec: Real,
    /// Closed-form Black-Scholes price.
    pub analytical_bs_price: Real,
    /// Absolute pricing error `|mc − analytical|`.
    pub pricing_error: Real,
    /// Relative pricing error in percent.
    pub error_percentage: Real,
    /// Side length of the benchmark matrices.
    pub matrix_computation_size: Size,
    /// Benchmark wall-clock time in seconds.
    pub matrix_elapsed_time_sec: Real,
    /// Maximum eigenvalue modulus from the benchmark.
    pub matrix_max_eigenvalue: Real,
    /// Sum of the two stage times in seconds.
    pub total_elapsed_time_sec: Real,
}

impl SummaryRecord {
    /// Merge the two stage results with the analytical price.
    pub fn new(
        timestamp: String,
        simulation: &SimulationResult,
        analytical_price: Real,
        benchmark: &BenchmarkResult,
    ) -> Self {
        let pricing_error = (simulation.option_price - analytical_price).abs();
        let mc_elapsed = simulation.elapsed.as_secs_f64();
        let matrix_elapsed = benchmark.elapsed.as_secs_f64();
        Self {
            timestamp,
            monte_carlo_simulations: simulation.num_paths,
            mc_option_price: simulation.option_price,
            mc_std_error: simulation.std_error,
            mc_ci_95: simulation.confidence_interval_95,
            mc_elapsed_time_sec: mc_elapsed,
            analytical_bs_price: analytical_price,
            pricing_error,
            error_percentage: pricing_error / analytical_price * 100.0,
            matrix_computation_size: benchmark.matrix_size,
            matrix_elapsed_time_sec: matrix_elapsed,
            matrix_max_eigenvalue: benchmark.max_eigenvalue_magnitude,
            total_elapsed_time_sec: mc_elapsed + matrix_elapsed,
        }
    }
}

/// One-row descriptive summary of the terminal-price distribution.
#[derive(Debug, Clone, Serialize)]
pub struct TerminalStatsRecord {
    /// Human-readable label for the summarised quantity.
    pub metric: String,
    /// Sample mean.
    pub mean: Real,
    /// Sample median.
    pub median: Real,
    /// Population standard deviation.
    pub std: Real,
    /// Minimum terminal price.
    pub min: Real,
    /// Maximum terminal price.
    pub max: Real,
    /// 25th percentile.
    pub percentile_25: Real,
    /// 75th percentile.
    pub percentile_75: Real,
    /// 95th percentile.
    pub percentile_95: Real,
}

impl TerminalStatsRecord {
    /// Summarise the terminal-price vector of a simulation run.
    pub fn from_terminal_prices(prices: &[Real]) -> Result<Self> {
        let d = DescriptiveStatistics::from_sample(prices)?;
        Ok(Self {
            metric: TERMINAL_METRIC_LABEL.to_string(),
            mean: d.mean,
            median: d.median,
            std: d.std,
            min: d.min,
            max: d.max,
            percentile_25: d.percentile_25,
            percentile_75: d.percentile_75,
            percentile_95: d.percentile_95,
        })
    }
}
