use ndarray::Array1;

/// Squares each sample. When `signed` is set, the result keeps the sign of
/// the input (`-x^2` for negative `x`) rather than always being
/// non-negative.
pub fn squaring(samples: &Array1<f64>, signed: bool) -> Array1<f64> {
    if signed {
        samples.mapv(|x| if x < 0.0 { -(x * x) } else { x * x })
    } else {
        samples.mapv(|x| x * x)
    }
}
