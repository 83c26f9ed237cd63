use ndarray::{prelude::*, Data};

use crate::metricdata::MetricData;

/// Multi-dimensional observations stored as rows of a 2-D array; the
/// distance between two observations is the Euclidean norm of their
/// difference, computed through precomputed squared norms.
pub struct EuclideanData<S: Data<Elem = f64>> {
    data: ArrayBase<S, Ix2>,
    squared_norms: Array1<f64>,
}

impl<S: Data<Elem = f64>> EuclideanData<S> {
    pub fn new(data: ArrayBase<S, Ix2>) -> Self {
        let norms = data.rows().into_iter().map(|row| row.dot(&row)).collect();

        Self {
            data,
            squared_norms: norms,
        }
    }
}

impl<S: Data<Elem = f64>> MetricData for EuclideanData<S> {
    fn distance(&self, i: usize, j: usize) -> f64 {
        let sq_eucl = self.squared_norms[i] + self.squared_norms[j]
            - 2.0 * self.data.row(i).dot(&self.data.row(j));
        if sq_eucl < 0.0 {
            0.0
        } else {
            sq_eucl.sqrt()
        }
    }

    fn num_points(&self) -> usize {
        self.data.nrows()
    }

    fn dimensions(&self) -> usize {
        self.data.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_distance_matches_direct_norm() {
        let data = EuclideanData::new(array![[0.0, 0.0], [3.0, 4.0], [6.0, 8.0]]);

        assert!((data.distance(0, 1) - 5.0).abs() < 1e-12);
        assert!((data.distance(1, 2) - 5.0).abs() < 1e-12);
        assert!((data.distance(0, 2) - 10.0).abs() < 1e-12);
        assert_eq!(data.dimensions(), 2);
    }
}
