//! outliers::mahalanobis_scan — per-row Mahalanobis outlier test.
//!
//! Purpose
//! -------
//! Test every row of a data matrix against the global mean with the
//! Mahalanobis test, producing distance, T², F and p-value per row.
//!
//! Key behaviors
//! -------------
//! - The global mean and the precision matrix are computed once. The
//!   precision is the pseudo-inverse of the sample covariance, so
//!   rank-deficient data (e.g. identical rows, or a column that is a linear
//!   combination of others) still yields finite distances, equal to those
//!   obtained with the redundant columns removed.
//! - Each row runs `mahalanobis_test(row, mean, precision, 1, n)`; rows are
//!   independent and only read shared immutable state.
//! - With `ScanOptions::parallel` the rows are mapped by rayon. Results are
//!   collected in row order in both modes.
//! - With `ScanOptions::verbose` and feature `obs_slog`, start, progress and
//!   summary records go to a terminal slog logger.
//!
//! Invariants & assumptions
//! ------------------------
//! - All four output vectors have length n and index rows of `x`.
//! - A row equal to the global mean has distance 0 and p-value 1, for any
//!   n and m.
//! - A nonzero distance with n ≤ m has a NaN p-value; such rows are never
//!   reported by [`MahalanobisScan::outliers`].
//! - n < 2, m = 0 and non-PSD covariance fail before any row is scanned.
use crate::{
    linalg::{column_means, covariance_matrix, pseudo_inverse},
    outliers::{errors::OutlierResult, options::ScanOptions},
    statistical_tests::{errors::TestResult, hotelling::MahalanobisOutcome, mahalanobis_test},
};
use ndarray::{Array1, ArrayView2};
use rayon::prelude::*;

#[cfg(feature = "obs_slog")]
use std::sync::atomic::{AtomicUsize, Ordering};

/// MahalanobisScan — per-row results of [`mahalanobis_outlier_test`].
///
/// Fields
/// ------
/// - `distances`: Mahalanobis distance of each row to the global mean.
/// - `t2_statistics`: T² = n/(n + 1)·D².
/// - `f_statistics`: F transform of T².
/// - `p_values`: upper-tail F p-values.
#[derive(Debug, Clone, PartialEq)]
pub struct MahalanobisScan {
    pub distances: Array1<f64>,
    pub t2_statistics: Array1<f64>,
    pub f_statistics: Array1<f64>,
    pub p_values: Array1<f64>,
}

impl MahalanobisScan {
    fn from_rows(rows: &[MahalanobisOutcome]) -> Self {
        let collect = |f: fn(&MahalanobisOutcome) -> f64| rows.iter().map(f).collect::<Array1<f64>>();
        Self {
            distances: collect(MahalanobisOutcome::distance),
            t2_statistics: collect(MahalanobisOutcome::t2_statistic),
            f_statistics: collect(MahalanobisOutcome::f_statistic),
            p_values: collect(MahalanobisOutcome::p_value),
        }
    }

    /// Number of scanned rows.
    pub fn len(&self) -> usize {
        self.p_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p_values.is_empty()
    }

    /// Row indices whose p-value is strictly below `alpha`, in row order.
    ///
    /// NaN p-values are never flagged.
    pub fn outliers(&self, alpha: f64) -> Vec<usize> {
        self.p_values
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p < alpha)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Run the Mahalanobis test of every row of `x` against the column means.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Data matrix, n observations × m variables.
/// - `opts`: `&ScanOptions`
///   Parallelism and progress-logging policy.
///
/// Returns
/// -------
/// `OutlierResult<MahalanobisScan>`
///   Four length-n vectors in row order.
///
/// Errors
/// ------
/// - `OutlierError::Matrix` when the covariance cannot be estimated
///   (n < 2, m = 0, non-finite data, non-PSD).
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use rust_stattests::outliers::{ScanOptions, mahalanobis_outlier_test};
///
/// let x = array![[1.0, 2.0], [1.0, 2.0], [1.0, 2.0], [1.0, 2.0]];
/// let scan = mahalanobis_outlier_test(x.view(), &ScanOptions::default()).unwrap();
/// assert!(scan.distances.iter().all(|&d| d == 0.0));
/// assert!(scan.p_values.iter().all(|&p| p == 1.0));
/// ```
pub fn mahalanobis_outlier_test(
    x: ArrayView2<f64>, opts: &ScanOptions,
) -> OutlierResult<MahalanobisScan> {
    let (n, m) = x.dim();
    let mean = column_means(x)?;
    let precision = pseudo_inverse(covariance_matrix(x)?.view())?;

    let observer = ScanObserver::new(opts);
    observer.started(n, m, opts.parallel);

    let test_row = |i: usize| -> TestResult<MahalanobisOutcome> {
        let outcome = mahalanobis_test(x.row(i), mean.view(), precision.view(), 1, n);
        observer.row_done();
        outcome
    };
    let rows: Vec<MahalanobisOutcome> = if opts.parallel {
        (0..n).into_par_iter().map(test_row).collect::<TestResult<_>>()?
    } else {
        (0..n).map(test_row).collect::<TestResult<_>>()?
    };

    let scan = MahalanobisScan::from_rows(&rows);
    observer.finished(&scan);
    Ok(scan)
}

// ---- Progress reporting ----------------------------------------------------

#[cfg(feature = "obs_slog")]
struct ScanObserver {
    logger: Option<slog::Logger>,
    every: usize,
    done: AtomicUsize,
}

#[cfg(feature = "obs_slog")]
impl ScanObserver {
    fn new(opts: &ScanOptions) -> Self {
        let logger = opts.verbose.then(crate::outliers::logging::term_logger);
        Self { logger, every: opts.progress_every.max(1), done: AtomicUsize::new(0) }
    }

    fn started(&self, rows: usize, cols: usize, parallel: bool) {
        if let Some(log) = &self.logger {
            slog::info!(log, "mahalanobis scan started";
                "rows" => rows, "cols" => cols, "parallel" => parallel);
        }
    }

    fn row_done(&self) {
        if let Some(log) = &self.logger {
            let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
            if done % self.every == 0 {
                slog::info!(log, "mahalanobis scan progress"; "rows_done" => done);
            }
        }
    }

    fn finished(&self, scan: &MahalanobisScan) {
        if let Some(log) = &self.logger {
            let max_distance = scan.distances.iter().copied().fold(f64::NAN, f64::max);
            let min_p_value = scan.p_values.iter().copied().fold(f64::NAN, f64::min);
            slog::info!(log, "mahalanobis scan finished";
                "rows" => scan.len(),
                "max_distance" => max_distance,
                "min_p_value" => min_p_value);
        }
    }
}

#[cfg(not(feature = "obs_slog"))]
struct ScanObserver;

#[cfg(not(feature = "obs_slog"))]
impl ScanObserver {
    fn new(_opts: &ScanOptions) -> Self {
        ScanObserver
    }

    fn started(&self, _rows: usize, _cols: usize, _parallel: bool) {}

    fn row_done(&self) {}

    fn finished(&self, _scan: &MahalanobisScan) {}
}
