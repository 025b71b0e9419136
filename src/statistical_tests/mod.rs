//! statistical_tests — correlation significance and multivariate mean tests.
//!
//! Purpose
//! -------
//! Collect the hypothesis-test routines of this crate together with their
//! shared infrastructure: the alternative-hypothesis selector, input
//! validation, and a dedicated error type.
//!
//! Key behaviors
//! -------------
//! - Correlation significance tests for Matthews (χ²(1)), Pearson/Spearman
//!   (Student-t) and Kendall (normal) coefficients, each returning a
//!   [`CorrelationOutcome`] for a chosen [`Alternative`].
//! - Multivariate mean tests: one- and two-sample Hotelling T² and the
//!   Mahalanobis test, all converted to F through the shared [`t2_to_f`].
//! - Shape guards in [`validation`] and a single error type [`TestError`]
//!   with result alias [`TestResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Invalid arguments (unknown alternative, mismatched shapes, unusable
//!   covariance) fail fast with a [`TestError`]; the tests never panic on
//!   user input.
//! - Degenerate but well-formed inputs return NaN/∞ statistics or p-values
//!   instead of errors.
//! - No state survives a call; every routine is pure.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_stattests::statistical_tests::prelude::*;
//!
//!   let alt: Alternative = "greater".parse()?;
//!   let out = kendall_significance_test(0.25, 60, alt);
//!   assert!(out.p_value() < 0.01);
//!   # Ok::<(), TestError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each routine; the integration suite under
//!   `tests/` exercises the multivariate tests on generated data.

pub mod alternative;
pub mod correlation;
pub mod errors;
pub mod hotelling;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::alternative::Alternative;
pub use self::correlation::{
    CorrelationOutcome, kendall_significance_test, matthews_significance_test,
    pearson_spearman_significance_test,
};
pub use self::errors::{TestError, TestResult};
pub use self::hotelling::{
    HotellingOutcome, MahalanobisOutcome, hotelling_t2_1samp_test, hotelling_t2_2samp_test,
    mahalanobis_test, t2_to_f,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::alternative::Alternative;
    pub use super::correlation::{
        CorrelationOutcome, kendall_significance_test, matthews_significance_test,
        pearson_spearman_significance_test,
    };
    pub use super::errors::{TestError, TestResult};
    pub use super::hotelling::{
        HotellingOutcome, MahalanobisOutcome, hotelling_t2_1samp_test, hotelling_t2_2samp_test,
        mahalanobis_test,
    };
}
