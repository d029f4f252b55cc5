//! Simulation parameter record and validation.

use qb_core::{ensure, errors::Result, Real, Size};

/// Immutable market and discretisation parameters for one simulation
/// run.
///
/// All values must be strictly positive except the risk-free rate,
/// which may be zero (or slightly negative markets are still rejected
/// here: the modelled process assumes `r ≥ 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Initial asset price `S₀`.
    pub initial_price: Real,
    /// Option strike `K`.
    pub strike: Real,
    /// Time to maturity in years `T`.
    pub maturity_years: Real,
    /// Continuously-compounded risk-free rate `r`.
    pub risk_free_rate: Real,
    /// Annualised volatility `σ`.
    pub volatility: Real,
    /// Number of simulated paths.
    pub num_paths: Size,
    /// Number of time steps per path.
    pub num_time_steps: Size,
}

impl Default for SimulationParameters {
    /// The fixed production parameters: `S₀ = 100`, `K = 105`,
    /// `T = 1`, `r = 5%`, `σ = 20%`, 10,000,000 paths, 252 steps.
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            strike: 105.0,
            maturity_years: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
            num_paths: 10_000_000,
            num_time_steps: 252,
        }
    }
}

impl SimulationParameters {
    /// Validate the parameter record, failing fast with
    /// `InvalidParameter` before any simulation work begins.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_price > 0.0,
            "initial_price must be positive, got {}",
            self.initial_price
        );
        ensure!(self.strike > 0.0, "strike must be positive, got {}", self.strike);
        ensure!(
            self.maturity_years > 0.0,
            "maturity_years must be positive, got {}",
            self.maturity_years
        );
        ensure!(
            self.risk_free_rate >= 0.0,
            "risk_free_rate must be non-negative, got {}",
            self.risk_free_rate
        );
        ensure!(
            self.volatility > 0.0,
            "volatility must be positive, got {}",
            self.volatility
        );
        ensure!(self.num_paths > 0, "num_paths must be positive");
        ensure!(self.num_time_steps > 0, "num_time_steps must be positive");
        Ok(())
    }

    /// Time increment `dt = T / num_time_steps`.
    pub fn dt(&self) -> Real {
        self.maturity_years / self.num_time_steps as Real
    }

    /// Discount factor `exp(-r·T)` for payoffs paid at maturity.
    pub fn discount_factor(&self) -> Real {
        (-self.risk_free_rate * self.maturity_years).exp()
    }
}
