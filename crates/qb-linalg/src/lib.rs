//! # qb-linalg
//!
//! Dense linear-algebra throughput benchmark: random matrix
//! generation, matrix multiplication, and a partial eigenvalue
//! decomposition, over `nalgebra`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The benchmark runner and its result record.
pub mod benchmark;

/// Dense matrix helpers.
pub mod matrix;

pub use benchmark::{run_benchmark, BenchmarkResult};
pub use matrix::{leading_block, max_eigenvalue_modulus, random_standard_normal};
