//! statistical_tests::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the hypothesis-test routines
//! (correlation significance, Hotelling T², Mahalanobis test), together with
//! a conversion layer to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`TestResult`] and [`TestError`] as the canonical result and
//!   error types for everything under `statistical_tests`.
//! - Wrap [`MatrixError`] from the covariance / inversion helpers so `?`
//!   works across the two layers.
//! - Implement `From<TestError> for PyErr` to surface every failure as a
//!   Python `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every variant is an invalid-argument failure: the caller must
//!   re-supply valid inputs. Numerically degenerate but well-formed inputs
//!   (zero variance, perfect correlation) are *not* errors; they propagate
//!   as NaN/∞ in the returned statistics.
//! - `TestError` values are small and cloneable.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the violated constraint ("mu length
//!   should be equal to number of columns of X") and embed the offending
//!   sizes.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify `Display` messages and payload
//!   embedding. The PyO3 conversion is exercised from Python.

use crate::linalg::errors::MatrixError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TestResult<T> = Result<T, TestError>;

/// TestError — invalid-argument failures of the hypothesis tests.
///
/// Variants
/// --------
/// - `InvalidAlternative(selector)`
///   The alternative-hypothesis selector is not one of `"two-sided"`,
///   `"less"`, `"greater"`.
/// - `DimensionMismatch { what, expected, actual }`
///   Two inputs disagree in size, e.g. `mu.len() != X.ncols()` or X and Y
///   with different column counts.
/// - `RankMismatch { name, expected, actual }`
///   A dynamically-shaped input does not have the required number of axes
///   (matrix = 2, vector = 1).
/// - `Matrix(MatrixError)`
///   Covariance estimation or inversion failed (too few rows, non-PSD or
///   singular covariance).
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    //------ Argument validation ------
    InvalidAlternative(String),
    DimensionMismatch { what: &'static str, expected: usize, actual: usize },
    RankMismatch { name: &'static str, expected: usize, actual: usize },

    //------ Linear algebra ------
    Matrix(MatrixError),
}

impl std::error::Error for TestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TestError::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::InvalidAlternative(selector) => write!(
                f,
                "Invalid alternative '{selector}': should be one of {{'two-sided', 'less', 'greater'}}."
            ),
            TestError::DimensionMismatch { what, expected, actual } => {
                write!(f, "Dimension mismatch: {what} (expected {expected}, got {actual}).")
            }
            TestError::RankMismatch { name, expected, actual } => {
                let kind = if *expected == 1 { "vector" } else { "matrix" };
                write!(f, "{name} should be a {kind}: expected {expected} axes, got {actual}.")
            }
            TestError::Matrix(err) => write!(f, "{err}"),
        }
    }
}

impl From<MatrixError> for TestError {
    fn from(err: MatrixError) -> Self {
        TestError::Matrix(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<TestError> for PyErr {
    fn from(err: TestError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
