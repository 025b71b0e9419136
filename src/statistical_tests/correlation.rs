//! statistical_tests::correlation — significance of correlation coefficients.
//!
//! Purpose
//! -------
//! Test H₀: coefficient = 0 for an already-computed correlation coefficient
//! and its sample size, using the classical asymptotic distributions:
//!
//! | Coefficient         | Statistic                       | Null distribution |
//! |---------------------|---------------------------------|-------------------|
//! | Matthews (φ)        | χ² = n·r²                       | χ²(1)             |
//! | Pearson / Spearman  | t = r·√(n−2) / √(1−r²)          | Student-t(n−2)    |
//! | Kendall (τ)         | z = τ·√(9n(n−1) / (4n+10))      | N(0, 1)           |
//!
//! Key behaviors
//! -------------
//! - Each test returns a [`CorrelationOutcome`] holding the statistic and
//!   the p-value for the requested [`Alternative`].
//! - An invalid alternative cannot reach these functions: selectors are
//!   parsed into [`Alternative`] first, and parsing fails with
//!   `TestError::InvalidAlternative`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Degenerate inputs are surfaced, not masked: r = ±1 gives t = ±∞ for
//!   the Pearson/Spearman test, and n ≤ 2 leaves the Student-t distribution
//!   undefined, so the p-value is NaN (and t itself is NaN for n < 2).
//! - The Matthews statistic is always ≥ 0 for finite r.
//!
//! Testing notes
//! -------------
//! - Unit tests check reference values, the two-sided = 2·min(one-sided)
//!   relation for all three tests, complementarity of the one-sided tails,
//!   the r = 0 Pearson case, and the degenerate Pearson inputs.
use crate::statistical_tests::alternative::Alternative;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

/// CorrelationOutcome — statistic and p-value of a correlation test.
///
/// Fields
/// ------
/// - `statistic`: `f64`
///   χ², t or z depending on the test.
/// - `p_value`: `f64`
///   p-value for the alternative the test was run with; NaN when the null
///   distribution is undefined for the given sample size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CorrelationOutcome {
    statistic: f64,
    p_value: f64,
}

impl CorrelationOutcome {
    /// Test statistic (χ², t or z).
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// p-value of [`statistic`](Self::statistic).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }
}

/// Test significance of Matthews's correlation coefficient.
///
/// H₀: φ = 0, H₁ according to `alternative`.
///
/// Parameters
/// ----------
/// - `matthews_coef`: `f64`
///   Matthews's (φ) correlation coefficient.
/// - `n_samples`: `usize`
///   Number of samples used to compute the coefficient.
/// - `alternative`: [`Alternative`]
///   Alternative hypothesis.
///
/// Returns
/// -------
/// [`CorrelationOutcome`] with `statistic = n·φ²` and its χ²(1) p-value.
///
/// Notes
/// -----
/// - The statistic is non-negative, so `Less` asks for a smaller-than-null
///   χ² value (the lower tail) and `Greater` for the upper tail.
///
/// Examples
/// --------
/// ```rust
/// use rust_stattests::statistical_tests::{Alternative, matthews_significance_test};
///
/// let out = matthews_significance_test(0.3, 100, Alternative::Greater);
/// assert!((out.statistic() - 9.0).abs() < 1e-12);
/// assert!(out.p_value() < 0.01);
/// ```
pub fn matthews_significance_test(
    matthews_coef: f64, n_samples: usize, alternative: Alternative,
) -> CorrelationOutcome {
    let chi2_statistic = n_samples as f64 * matthews_coef.powi(2);
    let (cdf, sf) = tails(ChiSquared::new(1.0).ok(), chi2_statistic);
    CorrelationOutcome { statistic: chi2_statistic, p_value: alternative.p_value(cdf, sf) }
}

/// Test significance of Pearson's or Spearman's correlation coefficient.
///
/// H₀: r = 0, H₁ according to `alternative`.
///
/// Parameters
/// ----------
/// - `corr_coef`: `f64`
///   Pearson's or Spearman's correlation coefficient.
/// - `n_samples`: `usize`
///   Number of samples used to compute the coefficient.
/// - `alternative`: [`Alternative`]
///   Alternative hypothesis.
///
/// Returns
/// -------
/// [`CorrelationOutcome`] with `statistic = r·√(n−2)/√(1−r²)` and its
/// Student-t(n−2) p-value.
///
/// Notes
/// -----
/// - `|r| = 1` divides by zero: t = ±∞ and the p-value follows the limiting
///   tail probabilities.
/// - `n ≤ 2` leaves no degrees of freedom; the p-value is NaN.
///
/// Examples
/// --------
/// ```rust
/// use rust_stattests::statistical_tests::{Alternative, pearson_spearman_significance_test};
///
/// let out = pearson_spearman_significance_test(0.0, 30, Alternative::TwoSided);
/// assert_eq!(out.statistic(), 0.0);
/// assert!((out.p_value() - 1.0).abs() < 1e-12);
/// ```
pub fn pearson_spearman_significance_test(
    corr_coef: f64, n_samples: usize, alternative: Alternative,
) -> CorrelationOutcome {
    let ddof = n_samples as f64 - 2.0;
    let t_statistic = corr_coef * ddof.sqrt() / (1.0 - corr_coef.powi(2)).sqrt();
    let (cdf, sf) = tails(StudentsT::new(0.0, 1.0, ddof).ok(), t_statistic);
    CorrelationOutcome { statistic: t_statistic, p_value: alternative.p_value(cdf, sf) }
}

/// Test significance of Kendall's correlation coefficient.
///
/// H₀: τ = 0, H₁ according to `alternative`.
///
/// Parameters
/// ----------
/// - `kendall_coef`: `f64`
///   Kendall's τ.
/// - `n_samples`: `usize`
///   Number of samples used to compute τ.
/// - `alternative`: [`Alternative`]
///   Alternative hypothesis.
///
/// Returns
/// -------
/// [`CorrelationOutcome`] with `statistic = τ·√(9n(n−1)/(4n+10))` and its
/// standard normal p-value.
pub fn kendall_significance_test(
    kendall_coef: f64, n_samples: usize, alternative: Alternative,
) -> CorrelationOutcome {
    let n = n_samples as f64;
    let z_statistic = kendall_coef * (9.0 * n * (n - 1.0) / (4.0 * n + 10.0)).sqrt();
    let (cdf, sf) = tails(Normal::new(0.0, 1.0).ok(), z_statistic);
    CorrelationOutcome { statistic: z_statistic, p_value: alternative.p_value(cdf, sf) }
}

// ---- Helper methods ----

/// Lower and upper tail probabilities at `x`; NaN when the distribution
/// could not be built or `x` is NaN.
#[inline]
pub(crate) fn tails<D: ContinuousCDF<f64, f64>>(dist: Option<D>, x: f64) -> (f64, f64) {
    match dist {
        Some(dist) if !x.is_nan() => (dist.cdf(x), dist.sf(x)),
        _ => (f64::NAN, f64::NAN),
    }
}
