//! outliers::heuristics — classical univariate outlier statistics.
//!
//! Purpose
//! -------
//! Provide the extreme-deviation and trimmed-variance statistics used to
//! screen a single variable for outliers before any formal test.
//!
//! Key behaviors
//! -------------
//! - [`smirnov_grubbs`]: absolute deviation of the selected extreme from
//!   the sample mean.
//! - [`grubbs`]: ratio of the standard deviation without the selected
//!   extreme to the full standard deviation.
//! - [`trimmed_std_ratio`]: the same ratio after dropping k values from one
//!   tail.
//! - [`abs_trimmed_std_ratio`]: the ratio computed on sorted absolute
//!   deviations from the mean, dropping the k largest.
//!
//! Conventions
//! -----------
//! - Standard deviations are population (ddof = 0).
//! - Ratios close to 1 indicate no influential extreme; small ratios flag
//!   the dropped values as outlying. Zero-spread data gives NaN ratios.
//! - Inputs are validated up front: empty slices and NaN/±∞ entries are
//!   errors.
use crate::outliers::errors::{OutlierError, OutlierResult};
use ndarray::ArrayView1;
use std::{fmt, str::FromStr};

/// Which tail of the sorted sample an extreme is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    Min,
    Max,
}

impl FromStr for Tail {
    type Err = OutlierError;

    fn from_str(s: &str) -> OutlierResult<Self> {
        match s {
            "min" => Ok(Tail::Min),
            "max" => Ok(Tail::Max),
            other => Err(OutlierError::InvalidTail(other.to_string())),
        }
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tail::Min => "min",
            Tail::Max => "max",
        })
    }
}

/// Smirnov–Grubbs extreme deviation |extreme − mean|.
///
/// Errors
/// ------
/// - `OutlierError::EmptyData` / `OutlierError::NonFiniteData`.
pub fn smirnov_grubbs(data: &[f64], tail: Tail) -> OutlierResult<f64> {
    validate_data(data)?;
    let extreme = match tail {
        Tail::Min => data.iter().copied().fold(f64::INFINITY, f64::min),
        Tail::Max => data.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };
    Ok((extreme - mean(data)).abs())
}

/// Grubbs ratio std(data without the extreme) / std(data).
///
/// Equivalent to [`trimmed_std_ratio`] with `k = 1`.
///
/// Errors
/// ------
/// - `OutlierError::EmptyData` / `OutlierError::NonFiniteData`.
/// - `OutlierError::InvalidTrim` for a single observation.
pub fn grubbs(data: &[f64], tail: Tail) -> OutlierResult<f64> {
    trimmed_std_ratio(data, 1, tail)
}

/// Trimmed standard-deviation ratio (T_M).
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Sample, in any order.
/// - `k`: `usize`
///   Number of values dropped from the selected tail, `1 ≤ k < n`.
/// - `tail`: [`Tail`]
///   `Min` drops the k smallest values, `Max` the k largest.
///
/// Returns
/// -------
/// `OutlierResult<f64>`
///   std(trimmed) / std(data), both population.
///
/// Errors
/// ------
/// - `OutlierError::EmptyData` / `OutlierError::NonFiniteData`.
/// - `OutlierError::InvalidTrim { k, n }` when `k == 0` or `k >= n`.
pub fn trimmed_std_ratio(data: &[f64], k: usize, tail: Tail) -> OutlierResult<f64> {
    validate_data(data)?;
    validate_trim(k, data.len())?;
    let sorted = sorted_copy(data);
    let reduced = match tail {
        Tail::Min => &sorted[k..],
        Tail::Max => &sorted[..sorted.len() - k],
    };
    Ok(population_std(reduced) / population_std(&sorted))
}

/// Absolute-deviation trimmed ratio (E_T_M).
///
/// Sorts |xᵢ − mean| ascending, drops the k largest and returns
/// std(reduced) / std(all deviations).
///
/// Errors
/// ------
/// - `OutlierError::EmptyData` / `OutlierError::NonFiniteData`.
/// - `OutlierError::InvalidTrim { k, n }` when `k == 0` or `k >= n`.
pub fn abs_trimmed_std_ratio(data: &[f64], k: usize) -> OutlierResult<f64> {
    validate_data(data)?;
    validate_trim(k, data.len())?;
    let center = mean(data);
    let deviations: Vec<f64> = data.iter().map(|x| (x - center).abs()).collect();
    let sorted = sorted_copy(&deviations);
    let reduced = &sorted[..sorted.len() - k];
    Ok(population_std(reduced) / population_std(&sorted))
}

// ---- Shared helpers --------------------------------------------------------

/// Reject empty samples and non-finite observations.
pub(crate) fn validate_data(data: &[f64]) -> OutlierResult<()> {
    if data.is_empty() {
        return Err(OutlierError::EmptyData);
    }
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(OutlierError::NonFiniteData { index, value: data[index] }),
        None => Ok(()),
    }
}

fn validate_trim(k: usize, n: usize) -> OutlierResult<()> {
    if k == 0 || k >= n {
        return Err(OutlierError::InvalidTrim { k, n });
    }
    Ok(())
}

/// Ascending copy of finite data.
pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic mean of a non-empty slice.
pub(crate) fn mean(data: &[f64]) -> f64 {
    ArrayView1::from(data).mean().unwrap_or(f64::NAN)
}

/// Population (ddof = 0) standard deviation of a non-empty slice.
pub(crate) fn population_std(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    ArrayView1::from(data).std(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Hand-computed values of every statistic on a small sample with
    //   mean 5 and population std 2.
    // - Tail parsing and the data / trim guards.
    // -------------------------------------------------------------------------

    const SAMPLE: [f64; 8] = [5.0, 2.0, 9.0, 4.0, 4.0, 7.0, 4.0, 5.0];

    #[test]
    fn tail_parses_min_and_max_only() {
        assert_eq!("min".parse::<Tail>(), Ok(Tail::Min));
        assert_eq!("max".parse::<Tail>(), Ok(Tail::Max));
        assert_eq!("both".parse::<Tail>(), Err(OutlierError::InvalidTail("both".to_string())));
    }

    #[test]
    // Purpose
    // -------
    // Smirnov–Grubbs is the raw distance of the extreme to the mean.
    //
    // Given
    // -----
    // - SAMPLE with mean 5, min 2, max 9.
    //
    // Expect
    // ------
    // - 3 for the lower tail, 4 for the upper tail.
    fn smirnov_grubbs_measures_extreme_deviation() {
        assert_relative_eq!(smirnov_grubbs(&SAMPLE, Tail::Min).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(smirnov_grubbs(&SAMPLE, Tail::Max).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn grubbs_ratio_matches_hand_computation() {
        assert_relative_eq!(grubbs(&SAMPLE, Tail::Max).unwrap(), 0.699_854_212_2, epsilon = 1e-9);
        assert_relative_eq!(grubbs(&SAMPLE, Tail::Min).unwrap(), 0.880_630_571_9, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Dropping the two largest values leaves [2, 4, 4, 4, 5, 5] with
    // population std 1, half of the full-sample std.
    fn trimmed_std_ratio_drops_k_from_one_tail() {
        assert_relative_eq!(trimmed_std_ratio(&SAMPLE, 2, Tail::Max).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            trimmed_std_ratio(&SAMPLE, 2, Tail::Min).unwrap(),
            0.897_527_467_9,
            epsilon = 1e-9
        );
    }

    #[test]
    fn abs_trimmed_std_ratio_drops_largest_deviations() {
        assert_relative_eq!(abs_trimmed_std_ratio(&SAMPLE, 1).unwrap(), 0.748_175_623_7, epsilon = 1e-9);
        assert_relative_eq!(abs_trimmed_std_ratio(&SAMPLE, 2).unwrap(), 0.519_462_481_6, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Invalid inputs are reported before any statistic is computed.
    fn heuristics_reject_invalid_inputs() {
        assert_eq!(smirnov_grubbs(&[], Tail::Min), Err(OutlierError::EmptyData));
        assert_eq!(
            grubbs(&[1.0, f64::NAN, 2.0], Tail::Max).unwrap_err().to_string(),
            OutlierError::NonFiniteData { index: 1, value: f64::NAN }.to_string()
        );
        assert_eq!(grubbs(&[1.0], Tail::Max), Err(OutlierError::InvalidTrim { k: 1, n: 1 }));
        assert_eq!(
            trimmed_std_ratio(&SAMPLE, 0, Tail::Min),
            Err(OutlierError::InvalidTrim { k: 0, n: 8 })
        );
        assert_eq!(abs_trimmed_std_ratio(&SAMPLE, 8), Err(OutlierError::InvalidTrim { k: 8, n: 8 }));
    }

    #[test]
    fn constant_data_gives_nan_ratio() {
        let flat = [3.0; 4];
        assert_eq!(smirnov_grubbs(&flat, Tail::Max).unwrap(), 0.0);
        assert!(grubbs(&flat, Tail::Min).unwrap().is_nan());
    }
}
