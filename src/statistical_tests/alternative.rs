//! statistical_tests::alternative — alternative-hypothesis selector.
//!
//! Purpose
//! -------
//! Encode the three alternatives accepted by the correlation significance
//! tests and turn a pair of tail probabilities into the corresponding
//! p-value.
//!
//! Key behaviors
//! -------------
//! - [`Alternative`] parses from exactly `"two-sided"`, `"less"` and
//!   `"greater"`; anything else is [`TestError::InvalidAlternative`].
//! - [`Alternative::p_value`] maps `(cdf, sf)` at the observed statistic to
//!   the lower tail, the upper tail, or twice the smaller tail (capped at 1).
//!
//! Invariants & assumptions
//! ------------------------
//! - For distributions symmetric about zero (Student-t, standard normal)
//!   the two-sided value equals `2·(1 − CDF(|x|))`.
//! - p-values stay in `[0, 1]` whenever `cdf` and `sf` do; NaN in either
//!   tail propagates to a NaN p-value.

use crate::statistical_tests::errors::{TestError, TestResult};
use std::{fmt, str::FromStr};

/// Alternative hypothesis H₁ for a test of H₀: coefficient = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// H₁: coefficient ≠ 0.
    #[default]
    TwoSided,
    /// H₁: coefficient < 0.
    Less,
    /// H₁: coefficient > 0.
    Greater,
}

impl Alternative {
    /// p-value for this alternative given both tail probabilities.
    ///
    /// Parameters
    /// ----------
    /// - `cdf`: `f64`
    ///   Lower-tail probability P(S ≤ s) at the observed statistic s.
    /// - `sf`: `f64`
    ///   Upper-tail probability P(S > s) at the observed statistic s.
    ///
    /// Returns
    /// -------
    /// `f64`
    ///   - `Less`: `cdf`,
    ///   - `Greater`: `sf`,
    ///   - `TwoSided`: `min(1, 2·min(cdf, sf))`,
    ///   or NaN if either tail is NaN.
    pub fn p_value(self, cdf: f64, sf: f64) -> f64 {
        if cdf.is_nan() || sf.is_nan() {
            return f64::NAN;
        }
        match self {
            Alternative::Less => cdf,
            Alternative::Greater => sf,
            Alternative::TwoSided => (2.0 * cdf.min(sf)).min(1.0),
        }
    }

    /// Canonical selector string.
    pub fn as_str(self) -> &'static str {
        match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Less => "less",
            Alternative::Greater => "greater",
        }
    }
}

impl FromStr for Alternative {
    type Err = TestError;

    fn from_str(s: &str) -> TestResult<Self> {
        match s {
            "two-sided" => Ok(Alternative::TwoSided),
            "less" => Ok(Alternative::Less),
            "greater" => Ok(Alternative::Greater),
            other => Err(TestError::InvalidAlternative(other.to_string())),
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
