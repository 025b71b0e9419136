//! linalg::covariance — sample covariance with a PSD guard.
//!
//! Purpose
//! -------
//! Estimate column means and the unbiased sample covariance of a data
//! matrix (n observations × m variables), and verify that the estimate is
//! positive semi-definite before anything downstream tries to invert it.
//!
//! Key behaviors
//! -------------
//! - [`covariance_matrix`] centers the columns and returns Xcᵀ·Xc / (n − 1).
//! - [`is_positive_semi_definite`] checks the spectrum of a symmetric matrix
//!   against [`PSD_TOL`].
//! - A covariance failing the check is reported as
//!   [`MatrixError::NotPositiveSemiDefinite`]; it is never silently
//!   returned.
//!
//! Invariants & assumptions
//! ------------------------
//! - Rows are observations, columns are variables.
//! - The returned covariance is exactly symmetric: the upper triangle is
//!   mirrored into the lower one after the product.
//! - NaN/±∞ in the data are not rejected up front; they poison the
//!   spectrum and surface through the PSD check.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against hand-computed covariances, exercise the
//!   row/column guards, and confirm that rank-deficient (identical-row)
//!   data still passes the PSD check within tolerance.
use crate::linalg::{
    errors::{MatrixError, MatrixResult},
    inverse::symmetric_eigenvalues,
    tolerances::PSD_TOL,
};
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Column means of a data matrix.
///
/// Returns
/// -------
/// `MatrixResult<Array1<f64>>`
///   Length-`m` vector of column means.
///
/// Errors
/// ------
/// - `MatrixError::Empty` when the matrix has no columns.
/// - `MatrixError::InsufficientRows` when it has no rows.
pub fn column_means(x: ArrayView2<f64>) -> MatrixResult<Array1<f64>> {
    let (n, m) = x.dim();
    if m == 0 {
        return Err(MatrixError::Empty);
    }
    x.mean_axis(Axis(0)).ok_or(MatrixError::InsufficientRows { rows: n, required: 1 })
}

/// Unbiased sample covariance matrix of `x`.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Data matrix with `n ≥ 2` rows (observations) and `m ≥ 1` columns
///   (variables).
///
/// Returns
/// -------
/// `MatrixResult<Array2<f64>>`
///   The `m×m` matrix `Xcᵀ·Xc / (n − 1)` where `Xc = X − mean(X)`.
///
/// Errors
/// ------
/// - `MatrixError::Empty` when `m == 0`.
/// - `MatrixError::InsufficientRows` when `n < 2`.
/// - `MatrixError::NotPositiveSemiDefinite` when the estimate has an
///   eigenvalue below the tolerance (including NaN eigenvalues coming from
///   non-finite data).
///
/// Notes
/// -----
/// - Data with identical rows yields the zero matrix, which is PSD and is
///   returned as is; whether it can be inverted is the caller's concern.
pub fn covariance_matrix(x: ArrayView2<f64>) -> MatrixResult<Array2<f64>> {
    let (n, m) = x.dim();
    if m == 0 {
        return Err(MatrixError::Empty);
    }
    if n < 2 {
        return Err(MatrixError::InsufficientRows { rows: n, required: 2 });
    }

    let mean = column_means(x)?;
    let centered = &x - &mean;
    let mut cov = centered.t().dot(&centered) / (n - 1) as f64;
    for i in 0..m {
        for j in (i + 1)..m {
            cov[[j, i]] = cov[[i, j]];
        }
    }

    let (psd, min_eigenvalue) = psd_verdict(cov.view())?;
    if !psd {
        return Err(MatrixError::NotPositiveSemiDefinite { min_eigenvalue });
    }
    Ok(cov)
}

/// Check whether a symmetric matrix is positive semi-definite.
///
/// Parameters
/// ----------
/// - `a`: `ArrayView2<f64>`
///   Square symmetric matrix.
///
/// Returns
/// -------
/// `MatrixResult<bool>`
///   `true` when every eigenvalue λ satisfies
///   `λ ≥ −PSD_TOL · max(1, max|λ|)`. Any NaN eigenvalue yields `false`.
///
/// Errors
/// ------
/// - `MatrixError::NotSquare` when `a` is not square.
pub fn is_positive_semi_definite(a: ArrayView2<f64>) -> MatrixResult<bool> {
    Ok(psd_verdict(a)?.0)
}

// ---- Helper methods ----

/// PSD verdict together with the smallest eigenvalue (NaN if any eigenvalue
/// is NaN).
fn psd_verdict(a: ArrayView2<f64>) -> MatrixResult<(bool, f64)> {
    let eigenvalues = symmetric_eigenvalues(a)?;
    if eigenvalues.iter().any(|v| v.is_nan()) {
        return Ok((false, f64::NAN));
    }
    let min_eigenvalue = eigenvalues.iter().copied().fold(f64::INFINITY, f64::min);
    let scale = eigenvalues.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
    Ok((min_eigenvalue >= -PSD_TOL * scale, min_eigenvalue))
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
    // - Column means and the unbiased covariance on a hand-checkable matrix.
    // - Shape guards (no columns, fewer than two rows).
    // - The PSD check on PSD, indefinite and NaN-containing inputs.
    // - Identical rows: zero covariance that still passes the PSD check.
    //
    // They intentionally DO NOT cover:
    // - Covariances of random data; see the integration tests.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // Verify `covariance_matrix` against a hand-computed estimate.
    //
    // Given
    // -----
    // - X with columns (1, 2, 3, 4) and (2, 4, 6, 9).
    //
    // Expect
    // ------
    // - var₁ = 5/3, var₂ = 26.75/3, cov₁₂ = 11.5/3 (mean₂ = 5.25).
    fn covariance_matrix_matches_hand_computation() {
        // Arrange
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0], [4.0, 9.0]];

        // Act
        let cov = covariance_matrix(x.view()).unwrap();

        // Assert
        assert_relative_eq!(cov[[0, 0]], 5.0 / 3.0, epsilon = TOL);
        assert_relative_eq!(cov[[0, 1]], 11.5 / 3.0, epsilon = TOL);
        assert_relative_eq!(cov[[1, 0]], 11.5 / 3.0, epsilon = TOL);
        assert_relative_eq!(cov[[1, 1]], 26.75 / 3.0, epsilon = TOL);
    }

    #[test]
    fn column_means_match_hand_computation() {
        let x = array![[1.0, 10.0], [3.0, 20.0]];
        let mean = column_means(x.view()).unwrap();
        assert_eq!(mean, array![2.0, 15.0]);
    }

    #[test]
    fn covariance_matrix_rejects_single_row() {
        let x = array![[1.0, 2.0]];
        assert_eq!(
            covariance_matrix(x.view()),
            Err(MatrixError::InsufficientRows { rows: 1, required: 2 })
        );
    }

    #[test]
    fn covariance_matrix_rejects_zero_columns() {
        let x = Array2::<f64>::zeros((4, 0));
        assert_eq!(covariance_matrix(x.view()), Err(MatrixError::Empty));
    }

    #[test]
    // Purpose
    // -------
    // Identical rows give a zero covariance, which is PSD and returned
    // rather than rejected.
    fn covariance_matrix_identical_rows_is_zero_and_psd() {
        // Arrange
        let x = array![[1.5, -2.0, 4.0], [1.5, -2.0, 4.0], [1.5, -2.0, 4.0]];

        // Act
        let cov = covariance_matrix(x.view()).unwrap();

        // Assert
        assert!(cov.iter().all(|&v| v == 0.0));
        assert!(is_positive_semi_definite(cov.view()).unwrap());
    }

    #[test]
    fn covariance_matrix_with_nan_fails_psd_check() {
        let x = array![[1.0, f64::NAN], [2.0, 1.0], [3.0, 0.0]];
        match covariance_matrix(x.view()) {
            Err(MatrixError::NotPositiveSemiDefinite { min_eigenvalue }) => {
                assert!(min_eigenvalue.is_nan())
            }
            other => panic!("expected NotPositiveSemiDefinite, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // An indefinite symmetric matrix is not PSD.
    fn is_positive_semi_definite_rejects_indefinite_matrix() {
        // Arrange
        let a = array![[1.0, 2.0], [2.0, 1.0]]; // eigenvalues 3 and -1

        // Act
        let psd = is_positive_semi_definite(a.view()).unwrap();

        // Assert
        assert!(!psd);
    }

    #[test]
    fn is_positive_semi_definite_accepts_tiny_negative_rounding() {
        let a = array![[1.0, 0.0], [0.0, -1e-14]];
        assert!(is_positive_semi_definite(a.view()).unwrap());
    }

    #[test]
    fn is_positive_semi_definite_rejects_non_square_input() {
        let a = array![[1.0, 0.0, 0.0]];
        assert_eq!(
            is_positive_semi_definite(a.view()),
            Err(MatrixError::NotSquare { rows: 1, cols: 3 })
        );
    }
}
