use ndarray::{prelude::*, Data};

use crate::metricdata::MetricData;

/// One-dimensional observations; the distance between two observations is
/// their absolute difference.
pub struct ScalarData<S: Data<Elem = f64>> {
    data: ArrayBase<S, Ix1>,
}

impl<S: Data<Elem = f64>> ScalarData<S> {
    pub fn new(data: ArrayBase<S, Ix1>) -> Self {
        Self { data }
    }
}

impl<S: Data<Elem = f64>> MetricData for ScalarData<S> {
    fn distance(&self, i: usize, j: usize) -> f64 {
        (self.data[i] - self.data[j]).abs()
    }

    fn num_points(&self) -> usize {
        self.data.len()
    }

    fn dimensions(&self) -> usize {
        1
    }
}
