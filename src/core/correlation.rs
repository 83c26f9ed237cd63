use log::debug;
use ndarray::{ArrayBase, Data, Ix2};

use crate::core::centering::double_center;
use crate::core::config::DcorConfig;
use crate::core::errors::{DcorError, Result};
use crate::metricdata::{pairwise_distances, MetricData};

fn cross_product_sum<S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix2>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    a.iter().zip(b.iter()).map(|(lhs, rhs)| lhs * rhs).sum()
}

/// Distance covariance of two centered matrices: the square root of the
/// elementwise cross-product sum, divided by the number of rows.
///
/// # Errors
/// Returns a `DcorError::ShapeMismatch` if the matrices differ in shape.
pub fn distance_covariance<S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix2>) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    distance_covariance_with_config(a, b, &DcorConfig::default())
}

pub fn distance_covariance_with_config<S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix2>,
    config: &DcorConfig,
) -> Result<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if a.dim() != b.dim() {
        return Err(DcorError::ShapeMismatch(format!(
            "{}x{} against {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }

    let mut sum = cross_product_sum(a, b);
    if config.clamp_negative_covariance && sum < 0.0 {
        sum = 0.0;
    }

    Ok(sum.sqrt() / a.nrows() as f64)
}

/// Distance variance of a centered matrix, the covariance of the matrix
/// with itself. Non-negative.
pub fn distance_variance<S: Data<Elem = f64>>(a: &ArrayBase<S, Ix2>) -> f64 {
    cross_product_sum(a, a).sqrt() / a.nrows() as f64
}

/// Distance correlation between two datasets of paired observations.
///
/// # Parameters
/// - `x`, `y`: datasets implementing `MetricData`, paired by index.
/// - `config`: pipeline parameters.
///
/// # Errors
/// Returns a `DcorError::ShapeMismatch` if the observation counts differ.
pub fn distance_correlation_of<X, Y>(x: &X, y: &Y, config: &DcorConfig) -> Result<f64>
where
    X: MetricData,
    Y: MetricData,
{
    if x.num_points() != y.num_points() {
        return Err(DcorError::ShapeMismatch(format!(
            "{} observations against {}",
            x.num_points(),
            y.num_points()
        )));
    }

    debug!(
        "Centering {0}x{0} distance matrices ({1} and {2} dimensions)",
        x.num_points(),
        x.dimensions(),
        y.dimensions()
    );

    let a = double_center(&pairwise_distances(x));
    let b = double_center(&pairwise_distances(y));

    let dcov = distance_covariance_with_config(&a, &b, config)?;
    let dvar_x = distance_variance(&a);
    let dvar_y = distance_variance(&b);

    debug!("dcov {}, dvar {} and {}", dcov, dvar_x, dvar_y);

    // A degenerate variance (constant, singleton or empty input) is defined
    // as zero dependence, not an error.
    if dvar_x > 0.0 && dvar_y > 0.0 {
        Ok(dcov / (dvar_x * dvar_y).sqrt())
    } else {
        Ok(0.0)
    }
}
