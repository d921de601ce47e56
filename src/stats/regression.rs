//! Single-predictor regression and correlation

use serde::Serialize;
use thiserror::Error;

/// Why a regression line could not be fitted
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionError {
    /// No points were supplied
    #[error("Regression needs at least one point")]
    Empty,

    /// x and y have different lengths
    #[error("Regression inputs differ in length: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    /// Every x is identical, so the slope is undefined
    #[error("Predictor has zero variance; slope is undefined")]
    ZeroVariance,
}

/// Ordinary least squares fit `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Number of points used
    pub n: usize,
    /// Pearson r between x and y (`None` when y has no variance)
    pub correlation: Option<f64>,
}

impl Regression {
    /// Fitted y at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a line through paired observations
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<Regression, RegressionError> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    let first = *x.first().ok_or(RegressionError::Empty)?;

    // compare directly; a float mean of identical values may not reproduce them exactly
    if x.iter().all(|&v| v == first) {
        return Err(RegressionError::ZeroVariance);
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let ss_xy: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (xi - x_mean) * (yi - y_mean))
        .sum();
    let ss_xx: f64 = x.iter().map(|xi| (xi - x_mean).powi(2)).sum();

    if ss_xx == 0.0 {
        return Err(RegressionError::ZeroVariance);
    }

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - slope * x_mean;

    Ok(Regression {
        slope,
        intercept,
        n: x.len(),
        correlation: pearson_correlation(x, y),
    })
}

/// Calculate Pearson correlation coefficient
///
/// Returns a value between -1 and 1, or `None` when the inputs are empty,
/// differ in length, or either side has no variance.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.is_empty() {
        return None;
    }

    let n = x.len() as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x.powi(2)) * (n * sum_y2 - sum_y.powi(2))).sqrt();

    if denominator == 0.0 || denominator.is_nan() {
        None
    } else {
        Some((numerator / denominator).clamp(-1.0, 1.0))
    }
}
