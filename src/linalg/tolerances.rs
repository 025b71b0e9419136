//! Numerical tolerances for the dense matrix helpers.
//!
//! # Provided items
//! - [`PSD_TOL`]: relative slack allowed below zero when checking that a
//!   covariance matrix is positive semi-definite.
//! - [`EIGEN_EPS`]: relative eigenvalue cutoff for the pseudo-inverse;
//!   eigenvalues at or below it (scaled by the spectrum) are treated as
//!   exact zeros.

/// Relative tolerance for the positive-semi-definiteness check.
///
/// A symmetric matrix passes when every eigenvalue λ satisfies
///   λ ≥ −PSD_TOL · max(1, max|λ|).
/// Rounding in `Xᵀ·X` routinely produces eigenvalues of order −1e-16 for
/// rank-deficient data; those must not be mistaken for a broken estimate.
pub const PSD_TOL: f64 = 1e-10;

/// Relative eigenvalue truncation threshold used by [`pseudo_inverse`].
///
/// An eigenvalue λ is dropped when λ ≤ EIGEN_EPS · max(1, max|λ|). Rounding
/// noise in a rank-deficient covariance scales with its largest eigenvalue,
/// so the cutoff must scale with it too.
///
/// [`pseudo_inverse`]: crate::linalg::inverse::pseudo_inverse
pub const EIGEN_EPS: f64 = 1e-12;
