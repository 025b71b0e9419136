//! outliers::options — configuration for the outlier scan and Huber estimator.
//!
//! Key behaviors
//! -------------
//! - [`ScanOptions`] controls parallel execution and progress logging of
//!   the Mahalanobis outlier scan.
//! - [`HuberOptions`] bounds the iterative Huber location estimate.
//! - Both types have a documented `Default` and a validating `new`.
use crate::outliers::errors::{OutlierError, OutlierResult};

/// ScanOptions — execution policy for [`mahalanobis_outlier_test`].
///
/// Fields
/// ------
/// - `parallel`: `bool`
///   Map rows with rayon instead of a sequential pass. The output is in
///   row order either way.
/// - `verbose`: `bool`
///   Emit progress records through slog (feature `obs_slog`). Ignored
///   when the feature is disabled.
/// - `progress_every`: `usize`
///   Number of rows between progress records. Always `> 0`.
///
/// [`mahalanobis_outlier_test`]: crate::outliers::mahalanobis_outlier_test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub parallel: bool,
    pub verbose: bool,
    pub progress_every: usize,
}

impl ScanOptions {
    /// Construct validated scan options.
    ///
    /// Errors
    /// ------
    /// - `OutlierError::InvalidOption` if `progress_every == 0`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_stattests::outliers::ScanOptions;
    /// let opts = ScanOptions::new(true, false, 500).unwrap();
    /// assert!(opts.parallel);
    /// assert!(ScanOptions::new(false, true, 0).is_err());
    /// ```
    pub fn new(parallel: bool, verbose: bool, progress_every: usize) -> OutlierResult<Self> {
        if progress_every == 0 {
            return Err(OutlierError::InvalidOption {
                name: "progress_every",
                reason: "must be greater than zero",
            });
        }
        Ok(Self { parallel, verbose, progress_every })
    }
}

impl Default for ScanOptions {
    /// Sequential, quiet, progress every 1000 rows.
    fn default() -> Self {
        Self { parallel: false, verbose: false, progress_every: 1000 }
    }
}

/// HuberOptions — stopping rule for the Huber location iteration.
///
/// Fields
/// ------
/// - `max_iter`: `usize`
///   Iteration cap; exceeding it is `OutlierError::NotConverged`.
/// - `tol`: `f64`
///   Absolute tolerance on the change of the location estimate between
///   two iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuberOptions {
    pub max_iter: usize,
    pub tol: f64,
}

impl HuberOptions {
    /// Construct validated Huber options.
    ///
    /// Rules
    /// -----
    /// - `max_iter > 0`.
    /// - `tol` finite and `>= 0`. A zero tolerance stops only on an exact
    ///   fixed point.
    ///
    /// Errors
    /// ------
    /// - `OutlierError::InvalidOption` naming the offending field.
    pub fn new(max_iter: usize, tol: f64) -> OutlierResult<Self> {
        if max_iter == 0 {
            return Err(OutlierError::InvalidOption {
                name: "max_iter",
                reason: "must be greater than zero",
            });
        }
        if !tol.is_finite() || tol < 0.0 {
            return Err(OutlierError::InvalidOption {
                name: "tol",
                reason: "must be finite and non-negative",
            });
        }
        Ok(Self { max_iter, tol })
    }
}

impl Default for HuberOptions {
    fn default() -> Self {
        Self { max_iter: 100, tol: 1e-10 }
    }
}
