//! The linear-algebra benchmark runner.
//!
//! A pure throughput exercise, independent of option pricing: two
//! random dense matrices are multiplied and the eigenvalues of a
//! leading sub-block of the product computed.  The maximum eigenvalue
//! modulus is reported so the computation stays observable and cannot
//! be elided.

use crate::matrix::{leading_block, max_eigenvalue_modulus, random_standard_normal};
use qb_core::{ensure, errors::Result, Real, Size};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Side length of the multiplied matrices.
    pub matrix_size: Size,
    /// Wall-clock time for generation, product, and eigenvalues.
    pub elapsed: Duration,
    /// Maximum modulus among the computed eigenvalues.
    pub max_eigenvalue_magnitude: Real,
}

/// Run the benchmark: multiply two `size × size` standard-normal
/// matrices and compute the complex eigenvalues of the leading
/// `eigen_size × eigen_size` block of the product.
pub fn run_benchmark(size: Size, eigen_size: Size, seed: u64) -> Result<BenchmarkResult> {
    ensure!(size >= 1, "matrix size must be at least 1, got {size}");
    ensure!(
        eigen_size >= 1 && eigen_size <= size,
        "eigen block size must be in [1, {size}], got {eigen_size}"
    );

    info!(size, eigen_size, "starting matrix computation benchmark");
    let start = Instant::now();

    let mut rng = StdRng::seed_from_u64(seed);
    let a = random_standard_normal(size, size, &mut rng);
    let b = random_standard_normal(size, size, &mut rng);

    let product = &a * &b;
    let block = leading_block(&product, eigen_size);
    let max_eigenvalue_magnitude = max_eigenvalue_modulus(&block);

    let elapsed = start.elapsed();
    info!(
        max_eigenvalue_magnitude,
        elapsed_sec = elapsed.as_secs_f64(),
        "matrix benchmark completed"
    );

    Ok(BenchmarkResult {
        matrix_size: size,
        elapsed,
        max_eigenvalue_magnitude,
    })
}
