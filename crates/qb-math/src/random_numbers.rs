//! Random number generators.
//!
//! The simulation draws tens of millions of normal variates, so the
//! generator has to be fast, explicitly seedable, and free of
//! long-range correlation artifacts.  A Mersenne Twister MT19937-64
//! uniform source is transformed through the inverse normal CDF.

use crate::distributions::normal_cdf_inverse;
use qb_core::Real;
use rand_mt::Mt19937GenRand64;

/// A uniform pseudo-random number generator based on the Mersenne
/// Twister MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

/// A standard-normal random number generator.
///
/// Wraps a seeded [`MersenneTwisterUniformRng`] and maps its output
/// through the inverse CDF of the standard normal distribution.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Generate the next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        // u = 0 maps to -∞, and draws in the top half-ULP of the u64
        // range round to exactly 1.0, which maps to +∞; skip both
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 && u < 1.0 {
                break u;
            }
        };
        normal_cdf_inverse(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mt_uniform_range() {
        let mut rng = MersenneTwisterUniformRng::new(42);
        for _ in 0..10_000 {
            let x = rng.next_real();
            assert!((0.0..1.0).contains(&x), "uniform deviate {x} out of range");
        }
    }

    #[test]
    fn mt_reproducible_for_fixed_seed() {
        let mut a = MersenneTwisterUniformRng::new(7);
        let mut b = MersenneTwisterUniformRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_real(), b.next_real());
        }
    }

    #[test]
    fn top_edge_uniform_draws_round_to_one() {
        // A u64 draw in the top half-ULP rounds to exactly 1.0 under
        // the uniform mapping, so the normal transform must reject the
        // upper endpoint as well as zero.
        let u = u64::MAX as f64 / (u64::MAX as f64 + 1.0);
        assert_eq!(u, 1.0);

        let u = (u64::MAX - (1 << 9)) as f64 / (u64::MAX as f64 + 1.0);
        assert_eq!(u, 1.0);
    }

    #[test]
    fn normal_rng_output_is_finite() {
        let mut rng = InverseCumulativeNormalRng::new(42);
        for _ in 0..100_000 {
            let z = rng.next_real();
            assert!(z.is_finite(), "normal deviate {z} is not finite");
        }
    }

    #[test]
    fn normal_rng_moments() {
        let mut rng = InverseCumulativeNormalRng::new(42);
        let n = 100_000;
        let samples: Vec<Real> = (0..n).map(|_| rng.next_real()).collect();
        let mean = samples.iter().sum::<Real>() / n as Real;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<Real>() / n as Real;
        // 100k samples: mean within ~4/√n of 0, variance close to 1
        assert!(mean.abs() < 0.02, "sample mean {mean} too far from 0");
        assert!((var - 1.0).abs() < 0.03, "sample variance {var} too far from 1");
    }
}
