pub mod euclideandata;
pub mod scalardata;

use ndarray::Array2;

pub trait MetricData {
    fn distance(&self, i: usize, j: usize) -> f64;
    fn num_points(&self) -> usize;
    fn dimensions(&self) -> usize;
}

/// Materializes the full pairwise distance matrix of a dataset.
///
/// Each unordered pair is computed once and mirrored, so the result is
/// symmetric with an exactly-zero diagonal. A single observation yields a
/// 1x1 zero matrix.
pub fn pairwise_distances<D: MetricData>(data: &D) -> Array2<f64> {
    let n = data.num_points();
    let mut matrix = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in (i + 1)..n {
            let distance = data.distance(i, j);
            matrix[[i, j]] = distance;
            matrix[[j, i]] = distance;
        }
    }

    matrix
}

pub use self::euclideandata::EuclideanData;
pub use self::scalardata::ScalarData;
