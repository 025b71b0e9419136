//! Integration tests for the multivariate testing pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path from raw data through covariance
//!   estimation, Hotelling T² / Mahalanobis tests and the per-row outlier
//!   scan on generated Gaussian data.
//! - Check that the univariate robust estimators behave sensibly on a
//!   contaminated sample.
//!
//! Coverage
//! --------
//! - `linalg`: covariance of i.i.d. data is PSD with near-unit variances.
//! - `statistical_tests::hotelling`:
//!   - One-sample test at the sample mean and under a shifted mean.
//!   - Two-sample test under a shift, swap symmetry, and agreement with the
//!     Mahalanobis test on the pooled precision.
//! - `outliers`:
//!   - Scan detects a planted multivariate outlier; parallel and sequential
//!     scans agree.
//!   - Trimmed / winsorized / Huber location resist gross contamination.
//!
//! Exclusions
//! ----------
//! - Hand-computed reference values and error paths; those are covered by
//!   unit tests next to each routine.
//! - Python bindings.
use approx::assert_relative_eq;
use ndarray::{Array2, Axis, array, concatenate};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use rust_stattests::{
    linalg::{covariance_matrix, inverse, is_positive_semi_definite},
    outliers::{
        HuberOptions, ScanOptions, Tail, huber, mahalanobis_outlier_test, poincare,
        smirnov_grubbs, trimmed_std_ratio, winsor,
    },
    statistical_tests::{hotelling_t2_1samp_test, hotelling_t2_2samp_test, mahalanobis_test},
};

/// Purpose
/// -------
/// Draw an `n × m` matrix of independent N(`mean`, 1) entries.
///
/// Invariants
/// ----------
/// - Deterministic for a given `seed`.
fn normal_matrix(seed: u64, n: usize, m: usize, mean: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(mean, 1.0).unwrap();
    Array2::from_shape_fn((n, m), |_| dist.sample(&mut rng))
}

#[test]
// Purpose
// -------
// The sample covariance of i.i.d. standard normal data is PSD with
// variances close to one.
fn covariance_of_iid_normal_data_is_psd() {
    // Arrange
    let x = normal_matrix(7, 500, 4, 0.0);

    // Act
    let cov = covariance_matrix(x.view()).unwrap();

    // Assert
    assert!(is_positive_semi_definite(cov.view()).unwrap());
    for j in 0..4 {
        assert!((cov[[j, j]] - 1.0).abs() < 0.25, "var[{j}] = {}", cov[[j, j]]);
    }
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(cov[[i, j]], cov[[j, i]]);
        }
    }
}

#[test]
// Purpose
// -------
// The one-sample test accepts the sample mean exactly and rejects a mean
// one standard deviation away in every coordinate.
fn hotelling_one_sample_accepts_sample_mean_and_rejects_shift() {
    // Arrange
    let x = normal_matrix(11, 200, 3, 0.0);
    let sample_mean = x.mean_axis(Axis(0)).unwrap();
    let shifted = &sample_mean + 1.0;

    // Act
    let at_mean = hotelling_t2_1samp_test(x.view(), sample_mean.view()).unwrap();
    let at_shift = hotelling_t2_1samp_test(x.view(), shifted.view()).unwrap();

    // Assert
    assert_eq!(at_mean.t2_statistic(), 0.0);
    assert_relative_eq!(at_mean.p_value(), 1.0, epsilon = 1e-12);
    assert_eq!((at_shift.df_num(), at_shift.df_den()), (3.0, 197.0));
    assert!(at_shift.p_value() < 1e-10, "p = {}", at_shift.p_value());
}

#[test]
// Purpose
// -------
// Two samples with shifted means are separated; swapping the samples does
// not change the outcome; the Mahalanobis test on the pooled precision
// reproduces the two-sample T².
fn hotelling_two_sample_and_mahalanobis_agree() {
    // Arrange
    let x = normal_matrix(21, 120, 3, 0.0);
    let y = normal_matrix(22, 80, 3, 1.0);
    let (n_x, n_y) = (x.nrows(), y.nrows());

    // Act
    let xy = hotelling_t2_2samp_test(x.view(), y.view()).unwrap();
    let yx = hotelling_t2_2samp_test(y.view(), x.view()).unwrap();

    let pooled = (covariance_matrix(x.view()).unwrap() * (n_x as f64 - 1.0)
        + covariance_matrix(y.view()).unwrap() * (n_y as f64 - 1.0))
        / (n_x + n_y - 2) as f64;
    let precision = inverse(pooled.view()).unwrap();
    let mean_x = x.mean_axis(Axis(0)).unwrap();
    let mean_y = y.mean_axis(Axis(0)).unwrap();
    let maha =
        mahalanobis_test(mean_x.view(), mean_y.view(), precision.view(), n_x, n_y).unwrap();

    // Assert
    assert!(xy.p_value() < 1e-6, "p = {}", xy.p_value());
    assert_relative_eq!(xy.t2_statistic(), yx.t2_statistic(), max_relative = 1e-12);
    assert_relative_eq!(xy.p_value(), yx.p_value(), max_relative = 1e-9);
    assert_relative_eq!(maha.t2_statistic(), xy.t2_statistic(), max_relative = 1e-9);
    assert_relative_eq!(maha.f_statistic(), xy.f_statistic(), max_relative = 1e-9);
    assert_relative_eq!(maha.p_value(), xy.p_value(), max_relative = 1e-6);
}

#[test]
// Purpose
// -------
// A single far-away row in otherwise Gaussian data is the most distant
// row and is flagged at a very small level; parallel mapping returns the
// same vectors as the sequential pass.
fn outlier_scan_detects_planted_row() {
    // Arrange
    let clean = normal_matrix(31, 300, 4, 0.0);
    let planted = array![[8.0, -8.0, 8.0, -8.0]];
    let x = concatenate(Axis(0), &[clean.view(), planted.view()]).unwrap();
    let parallel = ScanOptions::new(true, false, 50).unwrap();

    // Act
    let seq = mahalanobis_outlier_test(x.view(), &ScanOptions::default()).unwrap();
    let par = mahalanobis_outlier_test(x.view(), &parallel).unwrap();

    // Assert
    assert_eq!(seq, par);
    assert_eq!(seq.len(), 301);
    assert_eq!(seq.outliers(1e-10), vec![300]);

    let argmax = seq
        .distances
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    assert_eq!(argmax, Some(300));

    let flagged_clean = seq.outliers(0.01).into_iter().filter(|&i| i < 300).count();
    assert!(flagged_clean < 15, "{flagged_clean} clean rows flagged at 1%");
    assert!(seq.p_values.iter().all(|p| (0.0..=1.0).contains(p)));
}

#[test]
// Purpose
// -------
// With 5% gross contamination at +50, the plain mean is pulled far from
// zero while the robust estimators stay close; the heuristics point at the
// upper tail.
fn robust_location_resists_contamination() {
    // Arrange
    let mut data = normal_matrix(41, 190, 1, 0.0).into_raw_vec_and_offset().0;
    data.extend(std::iter::repeat_n(50.0, 10));
    let plain = data.iter().sum::<f64>() / data.len() as f64;

    // Act
    let trimmed = poincare(&data, 0.05).unwrap();
    let winsorized = winsor(&data, 0.05).unwrap();
    let m_estimate = huber(&data, 0.05, &HuberOptions::default()).unwrap();

    // Assert
    assert!(plain > 2.0, "plain mean = {plain}");
    assert!(trimmed.abs() < 0.5, "poincare = {trimmed}");
    assert!(winsorized.abs() < 0.5, "winsor = {winsorized}");
    assert!(m_estimate < 1.5 && m_estimate < plain, "huber = {m_estimate}");

    assert!(smirnov_grubbs(&data, Tail::Max).unwrap() > smirnov_grubbs(&data, Tail::Min).unwrap());
    assert!(trimmed_std_ratio(&data, 10, Tail::Max).unwrap() < 0.2);
}
