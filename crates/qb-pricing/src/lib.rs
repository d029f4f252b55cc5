//! # qb-pricing
//!
//! European call option pricing: a streaming Monte Carlo simulator
//! under geometric Brownian motion, and the closed-form Black-Scholes
//! price it is cross-checked against.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Closed-form Black-Scholes pricing.
pub mod black_scholes;

/// Geometric Brownian motion process.
pub mod gbm;

/// Monte Carlo simulation of terminal prices and option payoffs.
pub mod monte_carlo;

/// Simulation parameter record and validation.
pub mod parameters;

pub use black_scholes::black_scholes_call;
pub use gbm::GbmProcess;
pub use monte_carlo::{simulate, SimulationResult};
pub use parameters::SimulationParameters;
