//! linalg — dense matrix helpers for the multivariate tests.
//!
//! Purpose
//! -------
//! Hold the small amount of real linear algebra in this crate: column
//! means, the unbiased sample covariance with its positive-semi-definite
//! guard, and strict / pseudo inversion of covariance matrices.
//!
//! Key behaviors
//! -------------
//! - [`covariance_matrix`] estimates Xcᵀ·Xc / (n − 1) and refuses to return
//!   a non-PSD estimate.
//! - [`inverse`] and [`pseudo_inverse`] produce precision matrices for the
//!   Hotelling tests and the outlier scan respectively.
//! - Errors are reported through [`MatrixError`] / [`MatrixResult`].
//!
//! Conventions
//! -----------
//! - Matrices are `ndarray` types at the API boundary; `nalgebra` is used
//!   internally for factorizations only.
//! - Rows are observations, columns are variables.

pub mod covariance;
pub mod errors;
pub mod inverse;
pub mod tolerances;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::covariance::{column_means, covariance_matrix, is_positive_semi_definite};
pub use self::errors::{MatrixError, MatrixResult};
pub use self::inverse::{inverse, pseudo_inverse, symmetric_eigenvalues};
pub use self::tolerances::{EIGEN_EPS, PSD_TOL};
