use ecg_types::constants::{SAVGOL_ORDER, SAVGOL_WINDOW};
use ndarray::Array1;

/// Savitzky-Golay smoothing with the crate's standard window (31 samples)
/// and polynomial order (3).
pub fn savitzky_golay(samples: &Array1<f64>) -> Array1<f64> {
    savitzky_golay_with(samples, SAVGOL_WINDOW, SAVGOL_ORDER)
}

/// Savitzky-Golay smoothing with an explicit window length and polynomial
/// order, for testing the construction at sizes smaller than production's.
///
/// `window` must be odd. Edge samples are filled by replicating the
/// nearest real sample before convolving, matching a "nearest" boundary
/// mode rather than refitting a shorter polynomial there.
pub fn savitzky_golay_with(samples: &Array1<f64>, window: usize, order: usize) -> Array1<f64> {
    assert!(window % 2 == 1, "savgol window must be odd");
    let n = samples.len();
    let mut out = Array1::zeros(n);
    if n == 0 {
        return out;
    }

    let kernel = smoothing_kernel(window, order);
    let half = window / 2;

    let at = |i: isize| -> f64 {
        if i < 0 {
            samples[0]
        } else if (i as usize) >= n {
            samples[n - 1]
        } else {
            samples[i as usize]
        }
    };

    for i in 0..n {
        let mut acc = 0.0;
        for (k, h) in kernel.iter().enumerate() {
            let offset = i as isize + (k as isize - half as isize);
            acc += h * at(offset);
        }
        out[i] = acc;
    }

    out
}

/// The fixed-length FIR kernel implementing Savitzky-Golay smoothing
/// (zeroth derivative) for a symmetric window of the given length and
/// polynomial order. Solved via the normal equations of the local
/// polynomial least-squares fit.
fn smoothing_kernel(window: usize, order: usize) -> Vec<f64> {
    let half = (window / 2) as f64;
    let ncoef = order + 1;

    // Design matrix columns are powers of centered sample offsets.
    let design: Vec<Vec<f64>> = (0..window)
        .map(|r| {
            let x = r as f64 - half;
            (0..ncoef).map(|c| x.powi(c as i32)).collect()
        })
        .collect();

    // Normal equations: (A^T A) v = e0, solved for the row of
    // (A^T A)^-1 A^T that reproduces the value at the window center.
    let mut ata = vec![vec![0.0; ncoef]; ncoef];
    for row in &design {
        for p in 0..ncoef {
            for q in 0..ncoef {
                ata[p][q] += row[p] * row[q];
            }
        }
    }
    let mut rhs = vec![0.0; ncoef];
    rhs[0] = 1.0;

    let v = solve_linear_system(ata, rhs);

    design.iter().map(|row| dot(row, &v)).collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Gaussian elimination with partial pivoting for the small (order+1)-sized
/// normal-equations system above. Not a general-purpose solver; sized only
/// for the handful of unknowns a cubic (or lower) polynomial fit needs.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let n = b.len();
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&r1, &r2| a[r1][col].abs().partial_cmp(&a[r2][col].abs()).unwrap())
            .unwrap();
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        let pivot = a[col][col];
        for row in (col + 1)..n {
            let factor = a[row][col] / pivot;
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_signal_is_invariant() {
        let s = Array1::from(vec![2.5; 50]);
        let out = savitzky_golay_with(&s, 11, 3);
        for v in out.iter() {
            assert!((v - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn reproduces_exact_cubic_away_from_edges() {
        let n = 80;
        let f = |i: f64| 0.01 * i.powi(3) - 0.2 * i * i + 3.0 * i - 5.0;
        let s = Array1::from((0..n).map(|i| f(i as f64)).collect::<Vec<f64>>());
        let out = savitzky_golay_with(&s, 11, 3);
        for i in 10..(n - 10) {
            assert!(
                (out[i] - f(i as f64)).abs() < 1e-6,
                "index {i}: got {}, want {}",
                out[i],
                f(i as f64)
            );
        }
    }

    #[test]
    fn length_preserving() {
        let s = Array1::from(vec![0.0; 100]);
        assert_eq!(savitzky_golay(&s).len(), 100);
    }
}
