use ecg_types::constants::HIGHPASS_CUTOFF_HZ;
use ecg_types::EcgError;
use ndarray::Array1;

/// First-order Butterworth highpass filter, applied forward and then
/// backward to cancel phase delay, removing baseline wander below
/// [`HIGHPASS_CUTOFF_HZ`].
pub fn highpass(samples: &Array1<f64>, frequency: f64) -> Result<Array1<f64>, EcgError> {
    highpass_with_cutoff(samples, frequency, HIGHPASS_CUTOFF_HZ)
}

/// As [`highpass`], with an explicit cutoff in Hz.
pub fn highpass_with_cutoff(
    samples: &Array1<f64>,
    frequency: f64,
    cutoff: f64,
) -> Result<Array1<f64>, EcgError> {
    if frequency <= 0.0 {
        return Err(EcgError::InvalidFrequency(frequency));
    }
    if samples.is_empty() {
        return Err(EcgError::EmptySamples);
    }

    let section = FirstOrderSection::design(frequency, cutoff);

    // Zero-phase filtfilt: forward, reverse, forward again, reverse back.
    let forward = section.apply(samples.as_slice().unwrap());
    let mut reversed = forward;
    reversed.reverse();
    let mut backward = section.apply(&reversed);
    backward.reverse();

    Ok(Array1::from(backward))
}

/// Coefficients for a single first-order Butterworth highpass section,
/// derived via the bilinear transform of the analog prototype
/// `H(s) = s / (s + wc)` with cutoff prewarping.
struct FirstOrderSection {
    b0: f64,
    b1: f64,
    a1: f64,
}

impl FirstOrderSection {
    fn design(frequency: f64, cutoff_hz: f64) -> Self {
        let wc = 2.0 * frequency * (std::f64::consts::PI * cutoff_hz / frequency).tan();
        let denom = 2.0 * frequency + wc;
        let b0 = 2.0 * frequency / denom;
        let b1 = -b0;
        let a1 = (wc - 2.0 * frequency) / denom;
        FirstOrderSection { b0, b1, a1 }
    }

    fn apply(&self, input: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; input.len()];
        let mut x_prev = input.first().copied().unwrap_or(0.0);
        let mut y_prev = 0.0;
        for (i, &x) in input.iter().enumerate() {
            let y = self.b0 * x + self.b1 * x_prev - self.a1 * y_prev;
            out[i] = y;
            x_prev = x;
            y_prev = y;
        }
        out
    }
}
