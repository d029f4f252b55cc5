//! Dense matrix helpers over `nalgebra::DMatrix`.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex;
use qb_core::Real;
use rand::Rng;
use rand_distr::StandardNormal;

/// Generate a `rows × cols` matrix with independent standard-normal
/// entries.
pub fn random_standard_normal<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> DMatrix<Real> {
    DMatrix::from_fn(rows, cols, |_, _| rng.sample(StandardNormal))
}

/// Extract the leading `n × n` sub-block of a matrix as an owned copy.
///
/// # Panics
/// Panics if `n` exceeds either dimension of `m`.
pub fn leading_block(m: &DMatrix<Real>, n: usize) -> DMatrix<Real> {
    assert!(
        n <= m.nrows() && n <= m.ncols(),
        "block size {n} exceeds matrix dimensions {}x{}",
        m.nrows(),
        m.ncols()
    );
    m.view((0, 0), (n, n)).into_owned()
}

/// Maximum modulus among the eigenvalues of a square matrix.
///
/// The eigenvalues of a general (non-symmetric) real matrix are
/// complex, so the full complex spectrum is computed and the largest
/// absolute value returned.
pub fn max_eigenvalue_modulus(m: &DMatrix<Real>) -> Real {
    let eigenvalues: DVector<Complex<Real>> = m.complex_eigenvalues();
    eigenvalues.iter().map(|ev| ev.norm()).fold(0.0, Real::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_matrix_shape_and_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = random_standard_normal(50, 40, &mut rng);
        assert_eq!((m.nrows(), m.ncols()), (50, 40));
        let mean = m.iter().sum::<Real>() / (50.0 * 40.0);
        assert!(mean.abs() < 0.2, "entry mean {mean} too far from 0");
        assert!(m.iter().any(|&x| x > 0.5) && m.iter().any(|&x| x < -0.5));
    }

    #[test]
    fn leading_block_extracts_top_left() {
        let m = DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let b = leading_block(&m, 2);
        assert_eq!(b, DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 4.0, 5.0]));
    }

    #[test]
    #[should_panic(expected = "exceeds matrix dimensions")]
    fn leading_block_rejects_oversize() {
        let m = DMatrix::<Real>::zeros(2, 2);
        leading_block(&m, 3);
    }

    #[test]
    fn eigenvalues_of_diagonal_matrix() {
        let m = DMatrix::from_diagonal(&nalgebra::DVector::from_vec(vec![3.0, -7.0, 2.0]));
        assert_relative_eq!(max_eigenvalue_modulus(&m), 7.0, epsilon = 1e-9);
    }

    #[test]
    fn eigenvalues_of_rotation_are_complex_with_unit_modulus() {
        // 90° rotation: eigenvalues ±i
        let m = DMatrix::from_row_slice(2, 2, &[0.0, -1.0, 1.0, 0.0]);
        assert_relative_eq!(max_eigenvalue_modulus(&m), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn modulus_is_non_negative_and_finite() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = random_standard_normal(20, 20, &mut rng);
        let lambda = max_eigenvalue_modulus(&m);
        assert!(lambda >= 0.0 && lambda.is_finite(), "lambda = {lambda}");
    }
}
