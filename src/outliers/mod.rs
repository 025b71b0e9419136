//! outliers — Mahalanobis outlier scan and univariate robust heuristics.
//!
//! Purpose
//! -------
//! Screen a data matrix row by row for multivariate outliers, and provide
//! the classical univariate statistics and robust location estimators used
//! alongside the scan.
//!
//! Key behaviors
//! -------------
//! - [`mahalanobis_outlier_test`] runs the Mahalanobis test of every row
//!   against the global mean, sequentially or with rayon, with optional
//!   slog progress ([`ScanOptions`]).
//! - [`heuristics`] implements Smirnov–Grubbs, Grubbs and the trimmed
//!   standard-deviation ratios.
//! - [`robust_location`] implements the Poincaré, Winsor and Huber
//!   estimators driven by a contamination table.
//! - All failures are reported as [`OutlierError`].
//!
//! Conventions
//! -----------
//! - Univariate routines take `&[f64]`; the scan takes an n × m
//!   `ArrayView2<f64>` with rows as observations.
//! - The `logging` submodule exists only with feature `obs_slog`.

pub mod errors;
pub mod heuristics;
#[cfg(feature = "obs_slog")]
pub mod logging;
pub mod mahalanobis_scan;
pub mod options;
pub mod robust_location;

pub use self::errors::{OutlierError, OutlierResult};
pub use self::heuristics::{Tail, abs_trimmed_std_ratio, grubbs, smirnov_grubbs, trimmed_std_ratio};
pub use self::mahalanobis_scan::{MahalanobisScan, mahalanobis_outlier_test};
pub use self::options::{HuberOptions, ScanOptions};
pub use self::robust_location::{CONTAMINATION_TABLE, contamination_entry, huber, poincare, winsor};
