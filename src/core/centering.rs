use ndarray::{prelude::*, Data};

/// Centers a distance matrix by row mean, column mean, and grand mean.
///
/// Every row and every column of the output sums to zero up to
/// floating-point rounding. Row and column terms are kept separate, so the
/// transform is also defined for asymmetric and non-square input.
pub fn double_center<S: Data<Elem = f64>>(matrix: &ArrayBase<S, Ix2>) -> Array2<f64> {
    let (rows, cols) = matrix.dim();
    if rows == 0 || cols == 0 {
        return Array2::zeros((rows, cols));
    }

    let row_means = matrix.sum_axis(Axis(1)) / cols as f64;
    let col_means = matrix.sum_axis(Axis(0)) / rows as f64;
    let grand_mean = row_means.sum() / rows as f64;

    matrix.to_owned() - &row_means.insert_axis(Axis(1)) - &col_means + grand_mean
}
