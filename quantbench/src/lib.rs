//! # quantbench
//!
//! Single-shot analysis pipeline: a Monte Carlo estimate of a European
//! call option price under geometric Brownian motion, cross-checked
//! against the closed-form Black-Scholes price, followed by a dense
//! linear-algebra benchmark.  Runs once, prints progress, writes two
//! CSV tables, and exits.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Pipeline configuration.
pub mod config;

/// Pipeline orchestration.
pub mod pipeline;

pub use config::PipelineConfig;
pub use pipeline::{run, PipelineOutcome};
