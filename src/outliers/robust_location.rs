//! outliers::robust_location — table-driven robust location estimators.
//!
//! Purpose
//! -------
//! Estimate the location of a contaminated sample with the trimmed
//! (Poincaré), winsorized and Huber M-estimators, choosing the amount of
//! trimming or the Huber threshold from a fixed table keyed by the
//! assumed contamination fraction ε.
//!
//! Key behaviors
//! -------------
//! - [`contamination_entry`] looks ε up in [`CONTAMINATION_TABLE`]; values
//!   outside the table are `OutlierError::UnknownContamination`.
//! - [`poincare`] and [`winsor`] use the trimming fraction α(ε):
//!   k = ⌊α(ε)·n⌋ values per tail are dropped or replaced.
//! - [`huber`] iterates θ ← mean(clip(x, θ − Dσ, θ + Dσ)) from θ₀ = mean
//!   with σ the population std, until |Δθ| ≤ `tol`, failing with
//!   `OutlierError::NotConverged` after `max_iter` steps.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data must be non-empty and finite.
//! - Table keys are matched with an absolute tolerance of 1e-12, so
//!   literals such as `0.1` and `1.0` resolve as expected.
use crate::outliers::{
    errors::{OutlierError, OutlierResult},
    heuristics::{mean, population_std, sorted_copy, validate_data},
    options::HuberOptions,
};

/// `(ε, trimming fraction α, Huber threshold D)` rows, ascending in ε.
pub const CONTAMINATION_TABLE: [(f64, f64, f64); 16] = [
    (0.001, 0.004, 2.63),
    (0.002, 0.008, 2.435),
    (0.005, 0.015, 2.16),
    (0.01, 0.026, 1.945),
    (0.02, 0.043, 1.717),
    (0.05, 0.081, 1.399),
    (0.1, 0.127, 1.14),
    (0.15, 0.164, 0.98),
    (0.2, 0.194, 0.862),
    (0.25, 0.222, 0.766),
    (0.3, 0.247, 0.685),
    (0.4, 0.291, 0.55),
    (0.5, 0.332, 0.436),
    (0.65, 0.386, 0.291),
    (0.8, 0.436, 0.162),
    (1.0, 0.5, 0.0),
];

const KEY_TOL: f64 = 1e-12;

/// Trimming fraction and Huber threshold for contamination `eps`.
///
/// Errors
/// ------
/// - `OutlierError::UnknownContamination(eps)` when `eps` is not a table key.
pub fn contamination_entry(eps: f64) -> OutlierResult<(f64, f64)> {
    CONTAMINATION_TABLE
        .iter()
        .find(|(key, _, _)| (key - eps).abs() <= KEY_TOL)
        .map(|&(_, alpha, d)| (alpha, d))
        .ok_or(OutlierError::UnknownContamination(eps))
}

/// Number of values trimmed per tail for `n` observations.
fn trim_count(eps: f64, n: usize) -> OutlierResult<usize> {
    let (alpha, _) = contamination_entry(eps)?;
    let k = (alpha * n as f64).floor() as usize;
    if n <= 2 * k {
        return Err(OutlierError::EmptyData);
    }
    Ok(k)
}

/// Poincaré (trimmed) mean.
///
/// Sorts the data, drops k = ⌊α(ε)·n⌋ values from each end and averages
/// the rest.
///
/// Errors
/// ------
/// - `OutlierError::EmptyData` for empty data or when trimming removes
///   every observation (n − 2k = 0).
/// - `OutlierError::NonFiniteData` / `OutlierError::UnknownContamination`.
///
/// Examples
/// --------
/// ```rust
/// use rust_stattests::outliers::poincare;
///
/// let data = [3.0, 1.0, 2.0, 1000.0, 4.0, 5.0, 6.0, 7.0, 8.0, -500.0];
/// assert_eq!(poincare(&data, 0.1).unwrap(), 4.5);
/// ```
pub fn poincare(data: &[f64], eps: f64) -> OutlierResult<f64> {
    validate_data(data)?;
    let n = data.len();
    let k = trim_count(eps, n)?;
    let sorted = sorted_copy(data);
    Ok(mean(&sorted[k..n - k]))
}

/// Winsorized mean.
///
/// The k = ⌊α(ε)·n⌋ lowest values are replaced by the (k + 1)-th smallest
/// and the k highest by the (k + 1)-th largest before averaging all n.
///
/// Errors
/// ------
/// - Same as [`poincare`].
pub fn winsor(data: &[f64], eps: f64) -> OutlierResult<f64> {
    validate_data(data)?;
    let n = data.len();
    let k = trim_count(eps, n)?;
    let sorted = sorted_copy(data);
    let kept: f64 = sorted[k..n - k].iter().sum();
    let replaced = k as f64 * (sorted[k] + sorted[n - k - 1]);
    Ok((kept + replaced) / n as f64)
}

/// Huber M-estimate of location.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample, in any order.
/// - `eps`: `f64`
///   Contamination fraction; selects the threshold D from the table.
/// - `opts`: `&HuberOptions`
///   Iteration cap and tolerance.
///
/// Returns
/// -------
/// `OutlierResult<f64>`
///   The fixed point θ of θ = (Σ_inside x + n₊(θ + Dσ) + n₋(θ − Dσ))/n,
///   where "inside" is the band [θ − Dσ, θ + Dσ] and n₊ / n₋ count the
///   observations above / below it.
///
/// Errors
/// ------
/// - `OutlierError::EmptyData` / `OutlierError::NonFiniteData` /
///   `OutlierError::UnknownContamination`.
/// - `OutlierError::NotConverged { iterations, last }` when |Δθ| > `tol`
///   after `max_iter` updates.
///
/// Notes
/// -----
/// - σ is fixed at the population std of the data for the whole
///   iteration. With zero spread the mean is returned after one step.
pub fn huber(data: &[f64], eps: f64, opts: &HuberOptions) -> OutlierResult<f64> {
    validate_data(data)?;
    let (_, d) = contamination_entry(eps)?;
    let n = data.len() as f64;
    let half_width = d * population_std(data);

    let mut theta = mean(data);
    for _ in 0..opts.max_iter {
        let (lo, hi) = (theta - half_width, theta + half_width);
        let next = data.iter().map(|&x| x.max(lo).min(hi)).sum::<f64>() / n;
        if (next - theta).abs() <= opts.tol {
            return Ok(next);
        }
        theta = next;
    }
    Err(OutlierError::NotConverged { iterations: opts.max_iter, last: theta })
}
