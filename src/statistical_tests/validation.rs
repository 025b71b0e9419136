//! statistical_tests::validation — shared input guards for test statistics.
//!
//! Purpose
//! -------
//! Centralize the shape preconditions of the multivariate tests so that
//! Hotelling T² and the Mahalanobis test report mismatches the same way.
//!
//! Key behaviors
//! -------------
//! - Check that a hypothesized mean matches the column count of a data
//!   matrix, that two samples share their columns, and that the inputs of
//!   the Mahalanobis test agree with the precision matrix.
//! - Convert dynamically-shaped arrays into matrix / vector views, reporting
//!   [`TestError::RankMismatch`] on the wrong number of axes.
//!
//! Conventions
//! -----------
//! - Pure validation: no allocation beyond error construction and no I/O.
//! - A successful return guarantees only shape constraints. Covariance
//!   requirements (n ≥ 2, PSD, invertibility) are checked in `linalg`.

use crate::statistical_tests::errors::{TestError, TestResult};
use ndarray::{ArrayView1, ArrayView2, ArrayViewD, Ix1, Ix2};

/// Ensure `mu` has one entry per column of `x`.
///
/// Errors
/// ------
/// - `TestError::DimensionMismatch` when `mu.len() != x.ncols()`.
pub fn validate_mean_vector(x: ArrayView2<f64>, mu: ArrayView1<f64>) -> TestResult<()> {
    if mu.len() != x.ncols() {
        return Err(TestError::DimensionMismatch {
            what: "mu length should be equal to number of columns of X",
            expected: x.ncols(),
            actual: mu.len(),
        });
    }
    Ok(())
}

/// Ensure two samples have the same number of columns.
///
/// Errors
/// ------
/// - `TestError::DimensionMismatch` when `x.ncols() != y.ncols()`.
pub fn validate_equal_columns(x: ArrayView2<f64>, y: ArrayView2<f64>) -> TestResult<()> {
    if x.ncols() != y.ncols() {
        return Err(TestError::DimensionMismatch {
            what: "X and Y should have equal number of columns",
            expected: x.ncols(),
            actual: y.ncols(),
        });
    }
    Ok(())
}

/// Ensure `vi` is square and conformable with `u` and `v`.
///
/// Errors
/// ------
/// - `TestError::DimensionMismatch` when `vi` is not square, or when the
///   length of `u` or `v` differs from its dimension.
pub fn validate_mahalanobis_inputs(
    u: ArrayView1<f64>, v: ArrayView1<f64>, vi: ArrayView2<f64>,
) -> TestResult<()> {
    let m = vi.nrows();
    if vi.ncols() != m {
        return Err(TestError::DimensionMismatch {
            what: "VI should be square",
            expected: m,
            actual: vi.ncols(),
        });
    }
    if u.len() != m {
        return Err(TestError::DimensionMismatch {
            what: "u length should match the dimension of VI",
            expected: m,
            actual: u.len(),
        });
    }
    if v.len() != m {
        return Err(TestError::DimensionMismatch {
            what: "v length should match the dimension of VI",
            expected: m,
            actual: v.len(),
        });
    }
    Ok(())
}

/// View a dynamically-shaped array as a matrix.
///
/// Errors
/// ------
/// - `TestError::RankMismatch` when `a` does not have exactly two axes.
pub fn as_matrix<'a>(name: &'static str, a: ArrayViewD<'a, f64>) -> TestResult<ArrayView2<'a, f64>> {
    let actual = a.ndim();
    a.into_dimensionality::<Ix2>().map_err(|_| TestError::RankMismatch { name, expected: 2, actual })
}

/// View a dynamically-shaped array as a vector.
///
/// Errors
/// ------
/// - `TestError::RankMismatch` when `a` does not have exactly one axis.
pub fn as_vector<'a>(name: &'static str, a: ArrayViewD<'a, f64>) -> TestResult<ArrayView1<'a, f64>> {
    let actual = a.ndim();
    a.into_dimensionality::<Ix1>().map_err(|_| TestError::RankMismatch { name, expected: 1, actual })
}
