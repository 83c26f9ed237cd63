//! Distance correlation between paired samples
//!
//! Distance correlation is a nonparametric measure of dependence between two random variables. Its population value is zero exactly when the variables are independent, which makes it sensitive to nonlinear and non-monotone relationships that the Pearson coefficient misses. The statistic is assembled in stages: each sample is expanded into its pairwise distance matrix, the matrix is double-centered by row mean, column mean and grand mean, and the centered matrices are combined into covariance and variance aggregates whose ratio is the final scalar.
//!
//! The stages are exposed individually (`metricdata::pairwise_distances`, `core::centering::double_center`, `core::correlation`) next to the complete pipeline below. Observations are scalars by default; rows of a 2-D array work through `metricdata::EuclideanData` and `core::correlation::distance_correlation_of`.

use ndarray::ArrayView1;

use crate::core::correlation::distance_correlation_of;
use crate::core::{DcorConfig, Result};
use crate::metricdata::ScalarData;

pub mod core;
pub mod metricdata;

/// Distance correlation of two equal-length samples, with the default
/// configuration.
///
/// Returns a value in the unit interval when both samples vary; a sample
/// with no variation (constant, singleton or empty) yields exactly 0.0.
///
/// # Errors
/// Returns a `DcorError::ShapeMismatch` if the samples differ in length.
///
/// # Examples
/// ```
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![1.0, 4.0, 9.0, 16.0, 25.0];
///
/// let result = dcorr::distance_correlation(&x, &y).unwrap();
/// assert!(result > 0.9);
/// ```
pub fn distance_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    distance_correlation_with_config(x, y, DcorConfig::default())
}

pub fn distance_correlation_with_config(x: &[f64], y: &[f64], config: DcorConfig) -> Result<f64> {
    let x = ScalarData::new(ArrayView1::from(x));
    let y = ScalarData::new(ArrayView1::from(y));
    distance_correlation_of(&x, &y, &config)
}
