use ecg_types::EcgError;
use ndarray::Array1;

use crate::highpass::highpass;
use crate::savgol::savitzky_golay;

/// Noise-reduction pipeline: Savitzky-Golay smoothing to remove
/// electromyogenic noise, then a zero-phase Butterworth highpass to
/// remove baseline wander. Length-preserving.
pub fn bandpass(samples: &Array1<f64>, frequency: f64) -> Result<Array1<f64>, EcgError> {
    log::debug!("bandpass: smoothing {} samples at {} Hz", samples.len(), frequency);
    let smoothed = savitzky_golay(samples);
    let out = highpass(&smoothed, frequency)?;
    log::trace!("bandpass: applied");
    Ok(out)
}
