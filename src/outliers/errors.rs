//! outliers::errors — error type for the outlier scan and univariate heuristics.
//!
//! Purpose
//! -------
//! Provide [`OutlierError`] and [`OutlierResult`] for everything under
//! `outliers`, wrapping the lower-level [`TestError`] and [`MatrixError`]
//! so that `?` composes across the crate.
//!
//! Key behaviors
//! -------------
//! - Input-data failures (empty, non-finite) carry the offending index and
//!   value where one exists.
//! - Option and table failures carry the rejected value.
//! - `From<OutlierError> for PyErr` maps every variant to `ValueError`
//!   under the `python-bindings` feature.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are invalid-argument or non-convergence failures. Degenerate
//!   but finite data (zero spread, all-equal samples) yield NaN/∞ ratios
//!   instead of errors.

use crate::{linalg::errors::MatrixError, statistical_tests::errors::TestError};
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type OutlierResult<T> = Result<T, OutlierError>;

/// OutlierError — failures of the outlier scan and robust heuristics.
///
/// Variants
/// --------
/// - `EmptyData`
///   No observations were supplied, or trimming left none.
/// - `NonFiniteData { index, value }`
///   A NaN or ±∞ observation at `index`.
/// - `InvalidTrim { k, n }`
///   Trim count outside `1 ≤ k < n`.
/// - `InvalidTail(selector)`
///   Tail selector other than `"min"` / `"max"`.
/// - `UnknownContamination(eps)`
///   Contamination fraction not present in the lookup tables.
/// - `NotConverged { iterations, last }`
///   The Huber iteration hit its cap; `last` is the final location iterate.
/// - `InvalidOption { name, reason }`
///   A configuration field failed validation.
/// - `Test(TestError)` / `Matrix(MatrixError)`
///   Failures propagated from the statistical tests or linear algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlierError {
    //------ Input data ------
    EmptyData,
    NonFiniteData { index: usize, value: f64 },
    InvalidTrim { k: usize, n: usize },
    InvalidTail(String),

    //------ Robust estimators ------
    UnknownContamination(f64),
    NotConverged { iterations: usize, last: f64 },

    //------ Configuration ------
    InvalidOption { name: &'static str, reason: &'static str },

    //------ Propagated ------
    Test(TestError),
    Matrix(MatrixError),
}

impl std::error::Error for OutlierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutlierError::Test(err) => Some(err),
            OutlierError::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutlierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutlierError::EmptyData => write!(f, "Data must contain at least one observation."),
            OutlierError::NonFiniteData { index, value } => {
                write!(f, "Non-finite observation at index {index}: {value}.")
            }
            OutlierError::InvalidTrim { k, n } => {
                write!(f, "Invalid trim count {k}: must satisfy 1 <= k < n (n = {n}).")
            }
            OutlierError::InvalidTail(selector) => {
                write!(f, "Invalid tail '{selector}': should be one of {{'min', 'max'}}.")
            }
            OutlierError::UnknownContamination(eps) => {
                write!(f, "Unknown contamination fraction {eps}: not present in the lookup table.")
            }
            OutlierError::NotConverged { iterations, last } => write!(
                f,
                "Huber estimate did not converge after {iterations} iterations (last value {last})."
            ),
            OutlierError::InvalidOption { name, reason } => {
                write!(f, "Invalid option {name}: {reason}.")
            }
            OutlierError::Test(err) => write!(f, "{err}"),
            OutlierError::Matrix(err) => write!(f, "{err}"),
        }
    }
}

impl From<TestError> for OutlierError {
    fn from(err: TestError) -> Self {
        OutlierError::Test(err)
    }
}

impl From<MatrixError> for OutlierError {
    fn from(err: MatrixError) -> Self {
        OutlierError::Matrix(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<OutlierError> for PyErr {
    fn from(err: OutlierError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlier_error_non_finite_reports_index_and_value() {
        let err = OutlierError::NonFiniteData { index: 4, value: f64::INFINITY };
        let msg = err.to_string();
        assert!(msg.contains("index 4") && msg.contains("inf"), "Got: {msg}");
    }

    #[test]
    fn outlier_error_not_converged_reports_last_iterate() {
        let err = OutlierError::NotConverged { iterations: 100, last: 1.5 };
        let msg = err.to_string();
        assert!(msg.contains("100 iterations") && msg.contains("1.5"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Lower-layer errors convert through `From` and stay reachable via
    // `Error::source`.
    fn outlier_error_wraps_test_and_matrix_errors() {
        // Arrange
        let matrix = MatrixError::Empty;
        let test = TestError::InvalidAlternative("up".to_string());

        // Act
        let from_matrix: OutlierError = matrix.clone().into();
        let from_test: OutlierError = test.clone().into();

        // Assert
        assert_eq!(from_matrix, OutlierError::Matrix(matrix));
        assert_eq!(from_test.to_string(), test.to_string());
        assert!(std::error::Error::source(&from_test).is_some());
        assert!(std::error::Error::source(&OutlierError::EmptyData).is_none());
    }
}
