//! linalg::errors — error type for covariance and inversion routines.
//!
//! Purpose
//! -------
//! Provide a small error enum and result alias for the dense linear-algebra
//! helpers used by the multivariate tests: covariance estimation,
//! positive-semi-definiteness checks, and (pseudo-)inversion.
//!
//! Key behaviors
//! -------------
//! - Define [`MatrixResult`] and [`MatrixError`] as the canonical result and
//!   error types for everything under `linalg`.
//! - Attach human-readable `Display` messages that embed the offending
//!   shape or eigenvalue so callers can log them without extra context.
//!
//! Invariants & assumptions
//! ------------------------
//! - A covariance that fails the PSD check is a data-quality problem, not a
//!   numerical warning: it is always reported as an error and never passed
//!   on to inversion.
//! - `MatrixError` values are small and cloneable; higher layers wrap them
//!   (`TestError::Matrix`, `OutlierError::Matrix`) via `From`.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that each variant's `Display` message embeds
//!   its payload.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type MatrixResult<T> = Result<T, MatrixError>;

/// MatrixError — failures of the dense matrix helpers.
///
/// Variants
/// --------
/// - `Empty`
///   The matrix has no columns (m = 0), so no covariance can be formed.
/// - `InsufficientRows { rows, required }`
///   Fewer observations than the estimator needs (n ≥ 2 for an unbiased
///   covariance).
/// - `NotSquare { rows, cols }`
///   Inversion or an eigendecomposition was requested for a non-square
///   matrix.
/// - `NotPositiveSemiDefinite { min_eigenvalue }`
///   The smallest eigenvalue of a covariance matrix lies below the PSD
///   tolerance (or is NaN).
/// - `Singular { dim }`
///   The matrix could not be inverted.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    // ---- Shape ----
    Empty,
    InsufficientRows { rows: usize, required: usize },
    NotSquare { rows: usize, cols: usize },

    // ---- Numerical ----
    NotPositiveSemiDefinite { min_eigenvalue: f64 },
    Singular { dim: usize },
}

impl std::error::Error for MatrixError {}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape ----
            MatrixError::Empty => write!(f, "Matrix has no columns."),
            MatrixError::InsufficientRows { rows, required } => {
                write!(f, "Matrix has {rows} rows; at least {required} are required.")
            }
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square; got shape ({rows}, {cols}).")
            }

            // ---- Numerical ----
            MatrixError::NotPositiveSemiDefinite { min_eigenvalue } => write!(
                f,
                "Covariance matrix should be positive semi-definite; smallest eigenvalue is {min_eigenvalue}."
            ),
            MatrixError::Singular { dim } => {
                write!(f, "Matrix of dimension {dim} is singular and cannot be inverted.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<MatrixError> for PyErr {
    fn from(err: MatrixError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure `InsufficientRows` reports both the observed and required row
    // counts.
    fn matrix_error_insufficient_rows_includes_counts() {
        // Arrange
        let err = MatrixError::InsufficientRows { rows: 1, required: 2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('1') && msg.contains('2'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure `NotPositiveSemiDefinite` embeds the offending eigenvalue.
    fn matrix_error_not_psd_includes_eigenvalue() {
        // Arrange
        let err = MatrixError::NotPositiveSemiDefinite { min_eigenvalue: -0.25 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-0.25"), "Got: {msg}");
    }

    #[test]
    fn matrix_error_not_square_includes_shape() {
        let msg = MatrixError::NotSquare { rows: 3, cols: 2 }.to_string();
        assert!(msg.contains("(3, 2)"), "Got: {msg}");
    }
}
