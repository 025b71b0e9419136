//! statistical_tests::hotelling — Hotelling T² and Mahalanobis mean tests.
//!
//! Purpose
//! -------
//! Compare multivariate means: a sample mean against a hypothesized vector
//! (one-sample Hotelling T²), two sample means against each other
//! (two-sample Hotelling T²), and two points under a given precision matrix
//! (Mahalanobis test).
//!
//! Key behaviors
//! -------------
//! - All three tests form a weighted quadratic form T² = c·δᵀ S⁻¹ δ and
//!   convert it with the shared routine [`t2_to_f`]:
//!     F = (ν − m + 1) / (m·ν) · T²,   F ~ F(m, ν − m + 1) under H₀,
//!   where m is the number of variables and ν the covariance degrees of
//!   freedom.
//! - ν per test: n − 1 (one-sample), n_x + n_y − 2 (two-sample),
//!   n_u + n_v − 2 (Mahalanobis).
//! - The p-value is the upper tail 1 − F-CDF(F).
//!
//! Invariants & assumptions
//! ------------------------
//! - Shape preconditions are checked by `validation` before any algebra and
//!   fail with `TestError::DimensionMismatch`.
//! - Covariances are estimated by `linalg::covariance_matrix`, which fails
//!   on fewer than two rows or a non-PSD estimate; the Hotelling tests then
//!   require a strictly invertible covariance (`MatrixError::Singular`).
//! - Too few observations for the F distribution (ν − m + 1 ≤ 0) is not an
//!   error: the p-value is NaN, except for T² = 0, which has p = 1 under
//!   any degrees of freedom.
//!
//! Testing notes
//! -------------
//! - Unit tests cover μ = sample mean (T² = 0, p = 1), a hand-computed
//!   univariate case that must match the squared one-sample t statistic,
//!   symmetry of the two-sample test, the Mahalanobis distance under the
//!   identity precision, and every shape-mismatch branch.
use crate::{
    linalg::{column_means, covariance_matrix, inverse},
    statistical_tests::{
        correlation::tails,
        errors::TestResult,
        validation::{validate_equal_columns, validate_mahalanobis_inputs, validate_mean_vector},
    },
};
use ndarray::{ArrayView1, ArrayView2};
use statrs::distribution::FisherSnedecor;

/// HotellingOutcome — T², its F transform, and the p-value.
///
/// Fields
/// ------
/// - `t2_statistic`: `f64`
///   Hotelling's T².
/// - `f_statistic`: `f64`
///   F = (ν − m + 1)/(m·ν)·T².
/// - `p_value`: `f64`
///   Upper-tail probability of `f_statistic` under F(`df_num`, `df_den`).
/// - `df_num`, `df_den`: `f64`
///   Numerator (m) and denominator (ν − m + 1) degrees of freedom.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HotellingOutcome {
    t2_statistic: f64,
    f_statistic: f64,
    p_value: f64,
    df_num: f64,
    df_den: f64,
}

impl HotellingOutcome {
    /// Build an outcome from T², the number of variables `m` and the
    /// covariance degrees of freedom `nu`.
    pub fn from_t2(t2_statistic: f64, m: usize, nu: f64) -> Self {
        let (f_statistic, p_value) = t2_to_f(t2_statistic, m, nu);
        HotellingOutcome {
            t2_statistic,
            f_statistic,
            p_value,
            df_num: m as f64,
            df_den: nu - m as f64 + 1.0,
        }
    }

    /// Hotelling's T².
    pub fn t2_statistic(&self) -> f64 {
        self.t2_statistic
    }

    /// F transform of T².
    pub fn f_statistic(&self) -> f64 {
        self.f_statistic
    }

    /// Upper-tail p-value of the F statistic.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Numerator degrees of freedom (number of variables).
    pub fn df_num(&self) -> f64 {
        self.df_num
    }

    /// Denominator degrees of freedom.
    pub fn df_den(&self) -> f64 {
        self.df_den
    }
}

/// MahalanobisOutcome — distance-based mean test result.
///
/// Fields
/// ------
/// - `distance`: `f64`
///   Mahalanobis distance D = √((u − v)ᵀ VI (u − v)).
/// - `test`: [`HotellingOutcome`]
///   T² = n_u·n_v/(n_u + n_v)·D² and its F transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MahalanobisOutcome {
    distance: f64,
    test: HotellingOutcome,
}

impl MahalanobisOutcome {
    /// Mahalanobis distance D between the two points.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// T² = n_u·n_v/(n_u + n_v)·D².
    pub fn t2_statistic(&self) -> f64 {
        self.test.t2_statistic
    }

    /// F transform of T².
    pub fn f_statistic(&self) -> f64 {
        self.test.f_statistic
    }

    /// Upper-tail p-value of the F statistic.
    pub fn p_value(&self) -> f64 {
        self.test.p_value
    }

    /// Underlying T² → F conversion, including degrees of freedom.
    pub fn hotelling(&self) -> &HotellingOutcome {
        &self.test
    }
}

/// Convert Hotelling's T² into an F statistic and its upper-tail p-value.
///
/// Parameters
/// ----------
/// - `t2`: `f64`
///   Hotelling's T² statistic.
/// - `m`: `usize`
///   Number of variables (numerator degrees of freedom).
/// - `nu`: `f64`
///   Degrees of freedom of the covariance estimate the T² was built on.
///
/// Returns
/// -------
/// `(f64, f64)`
///   `(F, p)` with F = (ν − m + 1)/(m·ν)·T² and p = 1 − F-CDF(F; m, ν − m + 1).
///
/// Notes
/// -----
/// - T² = 0 gives `(0, 1)` for any degrees of freedom, since P(F ≥ 0) = 1.
/// - Otherwise, when ν − m + 1 ≤ 0 (or m = 0) the F distribution is
///   undefined and the p-value is NaN; the F statistic is still reported.
pub fn t2_to_f(t2: f64, m: usize, nu: f64) -> (f64, f64) {
    if t2 == 0.0 {
        return (0.0, 1.0);
    }
    let m = m as f64;
    let df_den = nu - m + 1.0;
    let f_statistic = df_den / (m * nu) * t2;
    let (cdf, _) = tails(FisherSnedecor::new(m, df_den).ok(), f_statistic);
    (f_statistic, 1.0 - cdf)
}

/// One-sample Hotelling T² test of H₀: mean(X) = μ.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   Data matrix, n observations × m variables.
/// - `mu`: `ArrayView1<f64>`
///   Hypothesized mean, length m.
///
/// Returns
/// -------
/// `TestResult<HotellingOutcome>`
///   T² = δᵀ (S/n)⁻¹ δ with δ = mean(X) − μ and S the sample covariance,
///   F = (n − m)/(m(n − 1))·T², df = (m, n − m).
///
/// Errors
/// ------
/// - `TestError::DimensionMismatch` when `mu.len() != x.ncols()`.
/// - `TestError::Matrix` when the covariance cannot be estimated (n < 2,
///   m = 0, non-PSD) or is singular.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::{Axis, array};
/// use rust_stattests::statistical_tests::hotelling_t2_1samp_test;
///
/// let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 5.0], [4.0, 3.0], [0.5, 1.5]];
/// let mu = x.mean_axis(Axis(0)).unwrap();
/// let out = hotelling_t2_1samp_test(x.view(), mu.view()).unwrap();
/// assert_eq!(out.t2_statistic(), 0.0);
/// assert!((out.p_value() - 1.0).abs() < 1e-12);
/// ```
pub fn hotelling_t2_1samp_test(
    x: ArrayView2<f64>, mu: ArrayView1<f64>,
) -> TestResult<HotellingOutcome> {
    validate_mean_vector(x, mu)?;
    let (n, m) = x.dim();

    let delta = column_means(x)? - &mu;
    let cov_mean = covariance_matrix(x)? / n as f64;
    let cov_mean_inv = inverse(cov_mean.view())?;

    let t2_statistic = delta.dot(&cov_mean_inv.dot(&delta));
    Ok(HotellingOutcome::from_t2(t2_statistic, m, n as f64 - 1.0))
}

/// Two-sample Hotelling T² test of H₀: mean(X) = mean(Y).
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   First sample, n_x × m.
/// - `y`: `ArrayView2<f64>`
///   Second sample, n_y × m.
///
/// Returns
/// -------
/// `TestResult<HotellingOutcome>`
///   With pooled covariance S = ((n_x − 1)S_x + (n_y − 1)S_y)/(n_x + n_y − 2):
///   T² = n_x n_y/(n_x + n_y)·δᵀ S⁻¹ δ, df = (m, n_x + n_y − m − 1).
///
/// Errors
/// ------
/// - `TestError::DimensionMismatch` when the column counts differ.
/// - `TestError::Matrix` when either covariance cannot be estimated or the
///   pooled covariance is singular.
///
/// Notes
/// -----
/// - Swapping `x` and `y` negates δ only; T², F and p are unchanged.
pub fn hotelling_t2_2samp_test(
    x: ArrayView2<f64>, y: ArrayView2<f64>,
) -> TestResult<HotellingOutcome> {
    validate_equal_columns(x, y)?;
    let m = x.ncols();
    let n_x = x.nrows() as f64;
    let n_y = y.nrows() as f64;

    let delta = column_means(x)? - column_means(y)?;

    let cov_x = covariance_matrix(x)?;
    let cov_y = covariance_matrix(y)?;
    let nu = n_x + n_y - 2.0;
    let cov_pooled = (cov_x * (n_x - 1.0) + cov_y * (n_y - 1.0)) / nu;
    let cov_pooled_inv = inverse(cov_pooled.view())?;

    let t2_statistic = n_x * n_y / (n_x + n_y) * delta.dot(&cov_pooled_inv.dot(&delta));
    Ok(HotellingOutcome::from_t2(t2_statistic, m, nu))
}

/// Mahalanobis-distance test of H₀: u = v.
///
/// Parameters
/// ----------
/// - `u`, `v`: `ArrayView1<f64>`
///   Points (typically means) to compare, length m.
/// - `vi`: `ArrayView2<f64>`
///   Inverse covariance (precision) matrix, m × m.
/// - `n_u`, `n_v`: `usize`
///   Number of samples behind `u` and `v`.
///
/// Returns
/// -------
/// `TestResult<MahalanobisOutcome>`
///   D = √((u − v)ᵀ VI (u − v)), T² = n_u n_v/(n_u + n_v)·D², then F and p
///   via [`t2_to_f`] with ν = n_u + n_v − 2.
///
/// Errors
/// ------
/// - `TestError::DimensionMismatch` when `vi` is not square or the vector
///   lengths differ from its dimension.
///
/// Notes
/// -----
/// - `VI` is used as given; an indefinite `VI` can make the quadratic form
///   negative and D NaN.
pub fn mahalanobis_test(
    u: ArrayView1<f64>, v: ArrayView1<f64>, vi: ArrayView2<f64>, n_u: usize, n_v: usize,
) -> TestResult<MahalanobisOutcome> {
    validate_mahalanobis_inputs(u, v, vi)?;
    let m = vi.nrows();

    let delta = &u - &v;
    let distance = delta.dot(&vi.dot(&delta)).sqrt();

    let (n_u, n_v) = (n_u as f64, n_v as f64);
    let t2_statistic = n_u * n_v / (n_u + n_v) * distance.powi(2);
    Ok(MahalanobisOutcome {
        distance,
        test: HotellingOutcome::from_t2(t2_statistic, m, n_u + n_v - 2.0),
    })
}
