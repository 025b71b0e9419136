//! linalg::inverse — strict and pseudo inverses of covariance matrices.
//!
//! Purpose
//! -------
//! Bridge `ndarray` matrices into `nalgebra` for factorizations and bring
//! the results back. The multivariate tests need a strict inverse of a
//! covariance (Hotelling T²) and, for the outlier scan, a Moore–Penrose
//! pseudo-inverse that stays well defined when the covariance is rank
//! deficient.
//!
//! Key behaviors
//! -------------
//! - [`inverse`] returns `A⁻¹` or [`MatrixError::Singular`].
//! - [`pseudo_inverse`] forms `A⁺ = Q Λ⁺ Qᵀ` from the symmetric
//!   eigendecomposition, dropping eigenvalues at or below
//!   `EIGEN_EPS · max(1, max|λ|)`.
//! - [`symmetric_eigenvalues`] exposes the spectrum used by the PSD check.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`pseudo_inverse`] and [`symmetric_eigenvalues`] assume a symmetric
//!   input; only covariance-like matrices are passed in by this crate.
//! - Inputs are never mutated; conversions copy into fresh buffers.
//!
//! Testing notes
//! -------------
//! - Unit tests cover `A·A⁻¹ = I`, singular input, pseudo-inverse of the
//!   zero matrix, of a rank-one matrix and of a large-scale matrix with a
//!   noise-level eigenvalue, and the non-square guard.
use crate::linalg::{
    errors::{MatrixError, MatrixResult},
    tolerances::EIGEN_EPS,
};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, ArrayView2};

/// Invert a square matrix.
///
/// Parameters
/// ----------
/// - `a`: `ArrayView2<f64>`
///   Square `m×m` matrix.
///
/// Returns
/// -------
/// `MatrixResult<Array2<f64>>`
///   `A⁻¹` on success.
///
/// Errors
/// ------
/// - `MatrixError::NotSquare` when `a` is not square.
/// - `MatrixError::Singular` when nalgebra's LU-based inversion fails.
///
/// Notes
/// -----
/// - An empty `0×0` matrix inverts to an empty matrix.
pub fn inverse(a: ArrayView2<f64>) -> MatrixResult<Array2<f64>> {
    ensure_square(a)?;
    let dim = a.nrows();
    let inv = to_dmatrix(a).try_inverse().ok_or(MatrixError::Singular { dim })?;
    Ok(from_dmatrix(&inv))
}

/// Moore–Penrose pseudo-inverse of a symmetric matrix.
///
/// Parameters
/// ----------
/// - `a`: `ArrayView2<f64>`
///   Symmetric `m×m` matrix, typically a covariance estimate.
///
/// Returns
/// -------
/// `MatrixResult<Array2<f64>>`
///   `A⁺ = Σ_{k: λ_k > c} q_k q_kᵀ / λ_k`, where `(λ_k, q_k)` are the
///   eigenpairs of `A` and `c = EIGEN_EPS · max(1, max|λ|)`.
///
/// Errors
/// ------
/// - `MatrixError::NotSquare` when `a` is not square.
///
/// Notes
/// -----
/// - For a nonsingular, well-conditioned `A` this agrees with [`inverse`]
///   up to rounding.
/// - The zero matrix maps to the zero matrix, so quadratic forms built on
///   the result vanish instead of blowing up.
/// - Non-finite input maps to an all-NaN matrix.
pub fn pseudo_inverse(a: ArrayView2<f64>) -> MatrixResult<Array2<f64>> {
    ensure_square(a)?;
    let m = a.nrows();
    if a.iter().any(|v| !v.is_finite()) {
        return Ok(Array2::from_elem((m, m), f64::NAN));
    }
    let eigen = to_dmatrix(a).symmetric_eigen();
    let q = eigen.eigenvectors;
    let scale = eigen.eigenvalues.iter().fold(1.0_f64, |acc, l| acc.max(l.abs()));
    let cutoff = EIGEN_EPS * scale;
    let mut pinv = Array2::<f64>::zeros((m, m));
    for (k, &lambda) in eigen.eigenvalues.iter().enumerate() {
        if lambda <= cutoff {
            continue;
        }
        for i in 0..m {
            let coeff = q[(i, k)] / lambda;
            for j in 0..m {
                pinv[[i, j]] += coeff * q[(j, k)];
            }
        }
    }
    Ok(pinv)
}

/// Eigenvalues of a symmetric matrix, in nalgebra's (unsorted) order.
///
/// Non-finite input yields an all-NaN spectrum without running the
/// iterative decomposition, which has no iteration cap.
pub fn symmetric_eigenvalues(a: ArrayView2<f64>) -> MatrixResult<Array1<f64>> {
    ensure_square(a)?;
    if a.iter().any(|v| !v.is_finite()) {
        return Ok(Array1::from_elem(a.nrows(), f64::NAN));
    }
    let eigenvalues = to_dmatrix(a).symmetric_eigenvalues();
    Ok(eigenvalues.iter().copied().collect())
}

// ---- Helper methods ----

fn ensure_square(a: ArrayView2<f64>) -> MatrixResult<()> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }
    Ok(())
}

/// Copy an `ndarray` matrix into a column-major `nalgebra::DMatrix`.
fn to_dmatrix(a: ArrayView2<f64>) -> DMatrix<f64> {
    let (rows, cols) = a.dim();
    DMatrix::from_fn(rows, cols, |i, j| a[[i, j]])
}

fn from_dmatrix(a: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((a.nrows(), a.ncols()), |(i, j)| a[(i, j)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Strict inversion of a well-conditioned SPD matrix and the singular
    //   failure path.
    // - Pseudo-inversion of zero, rank-one and full-rank symmetric matrices,
    //   and truncation relative to the largest eigenvalue.
    // - The non-square guard shared by every entry point.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-10;

    #[test]
    // Purpose
    // -------
    // Verify that `inverse` produces A⁻¹ with A·A⁻¹ = I.
    //
    // Given
    // -----
    // - A 2×2 symmetric positive definite matrix.
    //
    // Expect
    // ------
    // - The product with its inverse equals the identity within TOL.
    fn inverse_spd_matrix_gives_identity_product() {
        // Arrange
        let a = array![[4.0, 1.0], [1.0, 3.0]];

        // Act
        let inv = inverse(a.view()).unwrap();
        let prod = a.dot(&inv);

        // Assert
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod[[i, j]], expected, epsilon = TOL);
            }
        }
    }

    #[test]
    fn inverse_singular_matrix_is_rejected() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        assert_eq!(inverse(a.view()), Err(MatrixError::Singular { dim: 2 }));
    }

    #[test]
    fn inverse_non_square_matrix_is_rejected() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(inverse(a.view()), Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    // Purpose
    // -------
    // The pseudo-inverse of the zero matrix is the zero matrix.
    fn pseudo_inverse_of_zero_matrix_is_zero() {
        // Arrange
        let a = Array2::<f64>::zeros((3, 3));

        // Act
        let pinv = pseudo_inverse(a.view()).unwrap();

        // Assert
        assert!(pinv.iter().all(|&v| v == 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Check the Moore–Penrose identity A·A⁺·A = A on a rank-one matrix.
    //
    // Given
    // -----
    // - A = v vᵀ with v = (1, 2).
    //
    // Expect
    // ------
    // - A⁺ = A / |v|⁴ and A·A⁺·A = A within TOL.
    fn pseudo_inverse_rank_one_satisfies_penrose_identity() {
        // Arrange
        let a = array![[1.0, 2.0], [2.0, 4.0]];

        // Act
        let pinv = pseudo_inverse(a.view()).unwrap();
        let back = a.dot(&pinv).dot(&a);

        // Assert
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(pinv[[i, j]], a[[i, j]] / 25.0, epsilon = TOL);
                assert_relative_eq!(back[[i, j]], a[[i, j]], epsilon = TOL);
            }
        }
    }

    #[test]
    fn pseudo_inverse_matches_inverse_for_full_rank_input() {
        let a = array![[2.0, 0.5, 0.0], [0.5, 1.0, 0.2], [0.0, 0.2, 3.0]];
        let pinv = pseudo_inverse(a.view()).unwrap();
        let inv = inverse(a.view()).unwrap();
        for (p, q) in pinv.iter().zip(inv.iter()) {
            assert_relative_eq!(*p, *q, epsilon = TOL);
        }
    }

    #[test]
    // Purpose
    // -------
    // The truncation cutoff scales with the spectrum, so an eigenvalue that
    // is rounding noise next to a large one is dropped, not inverted.
    //
    // Given
    // -----
    // - diag(4e6, 1e5, 1e-7): the last entry is far above the absolute
    //   EIGEN_EPS but below EIGEN_EPS · 4e6.
    //
    // Expect
    // ------
    // - A⁺ = diag(1/4e6, 1/1e5, 0).
    fn pseudo_inverse_drops_eigenvalues_small_relative_to_spectrum() {
        // Arrange
        let a = array![[4.0e6, 0.0, 0.0], [0.0, 1.0e5, 0.0], [0.0, 0.0, 1.0e-7]];

        // Act
        let pinv = pseudo_inverse(a.view()).unwrap();

        // Assert
        assert_relative_eq!(pinv[[0, 0]], 2.5e-7, max_relative = TOL);
        assert_relative_eq!(pinv[[1, 1]], 1.0e-5, max_relative = TOL);
        assert_eq!(pinv[[2, 2]], 0.0);
    }

    #[test]
    fn pseudo_inverse_keeps_small_eigenvalues_of_unit_scale_matrix() {
        let a = array![[1.0, 0.0], [0.0, 1.0e-6]];
        let pinv = pseudo_inverse(a.view()).unwrap();
        assert_relative_eq!(pinv[[1, 1]], 1.0e6, max_relative = TOL);
    }

    #[test]
    fn symmetric_eigenvalues_of_diagonal_matrix() {
        let a = array![[3.0, 0.0], [0.0, 1.0]];
        let mut eig = symmetric_eigenvalues(a.view()).unwrap().to_vec();
        eig.sort_by(|x, y| x.total_cmp(y));
        assert_relative_eq!(eig[0], 1.0, epsilon = TOL);
        assert_relative_eq!(eig[1], 3.0, epsilon = TOL);
    }
}
