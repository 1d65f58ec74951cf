use ndarray::Array1;

/// Moving-window average with a strict look-back: `out[i]` for `i >= width`
/// is the mean of `samples[i-width..i]`, excluding `samples[i]` itself.
///
/// For `i < width` there aren't `width` prior samples yet, so the window is
/// padded on the left with `width - i` copies of `samples[0]` followed by
/// the `i` real samples seen so far. This blends from a flat start into
/// steady state rather than truncating the window, matching the edge
/// behavior callers rely on.
pub fn moving_average(samples: &Array1<f64>, width: usize) -> Array1<f64> {
    let n = samples.len();
    let mut out = Array1::zeros(n);
    if n == 0 || width == 0 {
        return out;
    }

    for i in 0..width.min(n) {
        let pad = width - i;
        let sum: f64 = pad as f64 * samples[0] + samples.slice(ndarray::s![0..i]).sum();
        out[i] = sum / width as f64;
    }

    for i in width..n {
        out[i] = samples.slice(ndarray::s![i - width..i]).sum() / width as f64;
    }

    out
}
