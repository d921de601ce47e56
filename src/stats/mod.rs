//! Statistics primitives
//!
//! - **descriptive**: mean, sample standard deviation, R-7 quantiles, box plots
//! - **regression**: ordinary least squares and Pearson correlation

pub mod descriptive;
pub mod regression;

pub use descriptive::{
    mean, median, min_max, quantile, quantile_sorted, round_to_half, sorted_ascending, std_dev,
    BoxStats, WHISKER_FACTOR,
};
pub use regression::{linear_regression, pearson_correlation, Regression, RegressionError};
