//! Standard normal distribution functions.
//!
//! Thin wrappers over the `statrs` error-function routines, exposed
//! with the names the pricing code uses: `normal_cdf` and
//! `normal_cdf_inverse`.

use qb_core::Real;
use statrs::function::erf::{erf_inv, erfc};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

/// The standard normal cumulative distribution function Φ(x).
///
/// `Φ(x) = erfc(-x/√2) / 2`
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// The inverse standard normal CDF (probit function).
///
/// `Φ⁻¹(p) = √2 · erf⁻¹(2p − 1)`
///
/// # Panics
/// Panics if `p` is outside the open interval `(0, 1)`.
#[inline]
pub fn normal_cdf_inverse(p: Real) -> Real {
    assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {p}");
    SQRT_2 * erf_inv(2.0 * p - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cdf_reference_values() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(normal_cdf(1.96), 0.975_002_104_851_780, epsilon = 1e-9);
        assert_relative_eq!(normal_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-9);
        // Φ(x) + Φ(-x) = 1
        assert_relative_eq!(normal_cdf(0.7) + normal_cdf(-0.7), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_cdf_round_trip() {
        for &p in &[0.001, 0.025, 0.1, 0.5, 0.9, 0.975, 0.999] {
            let x = normal_cdf_inverse(p);
            assert_relative_eq!(normal_cdf(x), p, epsilon = 1e-9);
        }
    }

    #[test]
    fn inverse_cdf_median() {
        assert_relative_eq!(normal_cdf_inverse(0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "p must be in (0, 1)")]
    fn inverse_cdf_rejects_boundary() {
        normal_cdf_inverse(1.0);
    }
}
