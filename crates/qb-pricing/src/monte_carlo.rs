//! Monte Carlo simulation of terminal prices and option payoffs.
//!
//! Each path is streamed: a running log-return accumulates
//! `num_time_steps` increments and only the terminal price is retained,
//! so peak memory is one `f64` per path rather than a full
//! `num_time_steps × num_paths` table.

use crate::gbm::GbmProcess;
use crate::parameters::SimulationParameters;
use qb_core::{errors::Result, Real, Size};
use qb_math::{IncrementalStatistics, InverseCumulativeNormalRng};
use std::time::{Duration, Instant};
use tracing::info;

/// 95% two-tailed normal critical value.
///
/// Kept as a fixed constant (not derived from the quantile function)
/// to match the reference implementation exactly.
const CONFIDENCE_95_MULTIPLIER: Real = 1.96;

/// Result of one Monte Carlo pricing run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Discounted mean payoff, the Monte Carlo price estimate.
    pub option_price: Real,
    /// Standard error of the mean payoff, `std(payoffs) / √n`.
    pub std_error: Real,
    /// 95% confidence half-width, `1.96 × std_error`.
    pub confidence_interval_95: Real,
    /// Wall-clock time spent simulating.
    pub elapsed: Duration,
    /// Number of simulated paths.
    pub num_paths: Size,
    /// Terminal price of every path, in simulation order.
    pub terminal_prices: Vec<Real>,
}

/// Run the Monte Carlo simulation for a European call option.
///
/// Parameters are validated up front; invalid values fail with
/// `InvalidParameter` before any simulation work begins.  For a fixed
/// `seed` the run is fully reproducible.
pub fn simulate(params: &SimulationParameters, seed: u64) -> Result<SimulationResult> {
    params.validate()?;

    info!(
        num_paths = params.num_paths,
        num_time_steps = params.num_time_steps,
        "starting Monte Carlo simulation"
    );
    let start = Instant::now();

    let process = GbmProcess::new(
        params.initial_price,
        params.risk_free_rate,
        params.volatility,
    );
    let dt = params.dt();
    let drift = process.log_drift(dt);
    let diffusion = process.log_diffusion(dt);

    let mut rng = InverseCumulativeNormalRng::new(seed);
    let mut payoff_stats = IncrementalStatistics::new();
    let mut terminal_prices = Vec::with_capacity(params.num_paths);

    for _ in 0..params.num_paths {
        let mut log_return = 0.0;
        for _ in 0..params.num_time_steps {
            log_return += drift + diffusion * rng.next_real();
        }
        let terminal = process.price_from_log_return(log_return);
        terminal_prices.push(terminal);
        payoff_stats.add((terminal - params.strike).max(0.0));
    }

    let mean_payoff = payoff_stats.mean().unwrap_or(0.0);
    let option_price = params.discount_factor() * mean_payoff;
    let std_error = payoff_stats.error_estimate().unwrap_or(0.0);
    let elapsed = start.elapsed();

    info!(
        option_price,
        std_error,
        elapsed_sec = elapsed.as_secs_f64(),
        "Monte Carlo simulation completed"
    );

    Ok(SimulationResult {
        option_price,
        std_error,
        confidence_interval_95: CONFIDENCE_95_MULTIPLIER * std_error,
        elapsed,
        num_paths: params.num_paths,
        terminal_prices,
    })
}
