//! Descriptive statistics
//!
//! Mean, sample standard deviation, R-7 quantiles and box-plot summaries.
//! All functions accept empty input and report it as `None` (or the
//! documented degenerate value) instead of producing NaN.

use serde::Serialize;
use std::cmp::Ordering;

/// Multiplier applied to the IQR when placing box-plot fences
pub const WHISKER_FACTOR: f64 = 1.5;

/// Arithmetic mean; `None` for an empty sequence
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator)
///
/// A sequence with fewer than two values has no spread and returns 0.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let Some(m) = mean(values) else {
        return 0.0;
    };
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Smallest and largest value; `None` for an empty sequence
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Copy values into ascending order
pub fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Linear-interpolation quantile (R-7) of an ascending-sorted sequence
///
/// For fraction `q` the position is `q * (n - 1)`; an integral position
/// returns that element, otherwise the two neighbours are interpolated.
/// Fractions outside [0, 1] clamp to the first/last element.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || q.is_nan() {
        return None;
    }
    if n == 1 || q <= 0.0 {
        return Some(sorted[0]);
    }
    if q >= 1.0 {
        return Some(sorted[n - 1]);
    }

    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Quantile of unsorted values (sorts a copy)
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted_ascending(values), q)
}

/// Median of unsorted values
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Round to the nearest half unit, ties toward positive infinity
///
/// Used to bucket sleep durations so identical inputs always share a bucket.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0 + 0.5).floor() / 2.0
}

/// Five-number box-plot summary with outliers
///
/// Fences are `Q1 - 1.5 IQR` and `Q3 + 1.5 IQR` clamped to the observed
/// range, so `lower_fence`/`upper_fence` are the whisker ends. A value is an
/// outlier only when it lies strictly outside the clamped fences.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    /// Lower whisker end
    pub lower_fence: f64,
    /// Upper whisker end
    pub upper_fence: f64,
    pub observed_min: f64,
    pub observed_max: f64,
    /// Values outside the fences, ascending
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Summarize a sequence; `None` when it is empty
    pub fn compute(values: &[f64]) -> Option<Self> {
        let sorted = sorted_ascending(values);
        let observed_min = *sorted.first()?;
        let observed_max = *sorted.last()?;

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;

        let lower_fence = observed_min.max(q1 - WHISKER_FACTOR * iqr);
        let upper_fence = observed_max.min(q3 + WHISKER_FACTOR * iqr);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < lower_fence || v > upper_fence)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            iqr,
            lower_fence,
            upper_fence,
            observed_min,
            observed_max,
            outliers,
        })
    }

    /// Largest value drawn, whisker or outlier
    pub fn extent_max(&self) -> f64 {
        self.outliers
            .iter()
            .copied()
            .fold(self.upper_fence, f64::max)
    }
}
