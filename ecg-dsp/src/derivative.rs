use ndarray::Array1;

/// Window half-width: the slope at `i` is fit over `[i-2, i+2]`.
const HALF_WIDTH: usize = 2;

/// Derivative of a waveform, estimated at each interior sample as the
/// least-squares linear-regression slope over the five-sample window
/// `[i-2, i+2]`. The two samples at each edge copy the nearest computed
/// slope rather than being fit directly, since a full window isn't
/// available there.
pub fn derivative(samples: &Array1<f64>) -> Array1<f64> {
    let n = samples.len();
    let mut out = Array1::zeros(n);
    if n <= 2 * HALF_WIDTH {
        return out;
    }

    // x = [0, 1, 2, 3, 4]; precompute the regression denominator constants.
    let window = 2 * HALF_WIDTH + 1;
    let sum_x: f64 = (0..window).map(|i| i as f64).sum();
    let sum_x2: f64 = (0..window).map(|i| (i as f64).powi(2)).sum();
    let denom = window as f64 * sum_x2 - sum_x * sum_x;

    for i in HALF_WIDTH..n - HALF_WIDTH {
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        for (k, x) in (0..window).enumerate() {
            let y = samples[i - HALF_WIDTH + k];
            sum_y += y;
            sum_xy += x as f64 * y;
        }
        out[i] = (window as f64 * sum_xy - sum_x * sum_y) / denom;
    }

    for i in 0..HALF_WIDTH {
        out[i] = out[HALF_WIDTH];
        out[n - 1 - i] = out[n - 1 - HALF_WIDTH];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_slope_is_exact() {
        let n = 100;
        let slope = -1.5;
        let s = Array1::from(
            (0..n)
                .map(|i| slope * i as f64 + 3.0)
                .collect::<Vec<f64>>(),
        );
        let d = derivative(&s);
        for v in d.iter() {
            assert!((v - slope).abs() < 1e-9, "got {v}, want {slope}");
        }
    }

    #[test]
    fn length_preserving() {
        let s = Array1::from(vec![1.0; 42]);
        assert_eq!(derivative(&s).len(), 42);
    }

    #[test]
    fn too_short_is_all_zero() {
        let s = Array1::from(vec![1.0, 2.0, 3.0]);
        let d = derivative(&s);
        assert_eq!(d.as_slice().unwrap(), &[0.0, 0.0, 0.0]);
    }
}
