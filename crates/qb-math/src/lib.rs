//! # qb-math
//!
//! Mathematical utilities for quantbench: standard normal distribution
//! helpers (over `statrs`), seedable random number generation, and
//! statistics accumulators.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Standard normal distribution functions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators and descriptive statistics.
pub mod statistics;

pub use distributions::{normal_cdf, normal_cdf_inverse};
pub use random_numbers::{InverseCumulativeNormalRng, MersenneTwisterUniformRng};
pub use statistics::{DescriptiveStatistics, IncrementalStatistics};
