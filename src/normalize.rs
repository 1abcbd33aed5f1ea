//! Indicator normalization onto the common 0-100 scale.
//!
//! Raw indicators arrive on wildly different scales (millimetres of rain,
//! percentage points, event counts). Two selectable methods bring them
//! onto 0-100: percentile-clipped robust normalization, which is resistant
//! to outliers beyond the chosen band, and plain min-max. Both map a
//! constant array to 50.0 everywhere: a degenerate distribution carries no
//! information to discriminate districts, and the midpoint says so without
//! dividing by zero.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default lower percentile for the robust band.
pub const DEFAULT_PERCENTILE_LOW: f64 = 5.0;
/// Default upper percentile for the robust band.
pub const DEFAULT_PERCENTILE_HIGH: f64 = 95.0;

/// Output for every element of a degenerate (constant) distribution.
const MIDPOINT: f64 = 50.0;

/// Selectable normalization method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMethod {
    /// Percentile-clipped linear rescaling (the default).
    Robust,
    /// Absolute min/max rescaling.
    #[value(name = "minmax")]
    MinMax,
}

impl NormalizationMethod {
    /// Normalize `values` onto 0-100 with this method. The percentile band
    /// only applies to [`NormalizationMethod::Robust`].
    pub fn normalize(self, values: &[f64], p_low: f64, p_high: f64) -> Vec<f64> {
        match self {
            Self::Robust => robust_normalize_between(values, p_low, p_high),
            Self::MinMax => minmax_normalize(values),
        }
    }
}

/// Percentile of `values` using linear interpolation between closest ranks.
///
/// Returns `None` for an empty slice. `p` is on the 0-100 scale.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some(interpolated_rank(&sorted, p))
}

/// Percentile of an already-sorted slice. Callers guarantee non-emptiness.
fn interpolated_rank(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Robust normalization with the default 5th-95th percentile band.
pub fn robust_normalize(values: &[f64]) -> Vec<f64> {
    robust_normalize_between(values, DEFAULT_PERCENTILE_LOW, DEFAULT_PERCENTILE_HIGH)
}

/// Robust normalization with an explicit percentile band.
///
/// Values inside the band rescale linearly onto 0-100; values beyond it
/// clip to the boundary, so a single extreme outlier cannot compress the
/// rest of the distribution. When the two percentiles coincide, every
/// output is 50.0.
pub fn robust_normalize_between(values: &[f64], p_low: f64, p_high: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let lo = interpolated_rank(&sorted, p_low);
    let hi = interpolated_rank(&sorted, p_high);

    if hi == lo {
        return vec![MIDPOINT; values.len()];
    }

    values
        .iter()
        .map(|&x| (((x - lo) / (hi - lo)) * 100.0).clamp(0.0, 100.0))
        .collect()
}

/// Min-max normalization onto 0-100.
///
/// Same degenerate-case policy as [`robust_normalize`]; no clipping in the
/// ordinary branch because min and max map to exactly 0 and 100 by
/// construction.
pub fn minmax_normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![MIDPOINT; values.len()];
    }

    values
        .iter()
        .map(|&x| ((x - min) / (max - min)) * 100.0)
        .collect()
}
