//! Geometric Brownian motion process.
//!
//! ```text
//! dS/S = μ dt + σ dW
//! ```
//!
//! Worked in log space: for a time step `dt` and a standard-normal
//! draw `Z`, the log-price increment is
//! `(μ − σ²/2)·dt + σ·√dt·Z`, and `S(t) = S₀ · exp(Σ increments)`.

use qb_core::Real;

/// Geometric Brownian motion with constant drift and volatility.
#[derive(Debug, Clone)]
pub struct GbmProcess {
    s0: Real,
    mu: Real,
    sigma: Real,
}

impl GbmProcess {
    /// Create a new GBM process.
    ///
    /// # Arguments
    /// * `s0` — initial asset price (must be > 0)
    /// * `mu` — drift (risk-free rate under the pricing measure)
    /// * `sigma` — volatility (must be ≥ 0)
    pub fn new(s0: Real, mu: Real, sigma: Real) -> Self {
        assert!(s0 > 0.0, "initial value must be positive, got {s0}");
        assert!(sigma >= 0.0, "volatility must be non-negative, got {sigma}");
        Self { s0, mu, sigma }
    }

    /// Deterministic part of the log-price increment over `dt`:
    /// `(μ − σ²/2)·dt`.
    #[inline]
    pub fn log_drift(&self, dt: Real) -> Real {
        (self.mu - 0.5 * self.sigma * self.sigma) * dt
    }

    /// Stochastic scale of the log-price increment over `dt`: `σ·√dt`.
    #[inline]
    pub fn log_diffusion(&self, dt: Real) -> Real {
        self.sigma * dt.sqrt()
    }

    /// Price implied by an accumulated log-return: `S₀ · exp(x)`.
    #[inline]
    pub fn price_from_log_return(&self, log_return: Real) -> Real {
        self.s0 * log_return.exp()
    }
}
