use ecg_dsp::{bandpass, derivative, local_peak, moving_average, squaring};
use ecg_types::constants::{
    QRS_BACKTRACK_FACTOR, QRS_BASE_CUTOFF_FACTOR, QRS_LOWERED_CUTOFF_FACTOR,
    QRS_REFRACTORY_PERIOD, QRS_WIDTH_MAX, QR_INTERVAL,
};
use ecg_types::{Boundary, EcgError};
use ndarray::{s, Array1};

use crate::heart_rate::heart_rate;

/// Full QRS complex boundaries for a single lead: runs [`qrs_detect`] on
/// the waveform's derivative, then refines each detection into a
/// `(start, end)` boundary using an envelope of the squared derivative.
pub fn qrs_boundaries(
    samples: &Array1<f64>,
    frequency: f64,
    do_filter: bool,
) -> Result<Vec<Boundary>, EcgError> {
    if frequency <= 0.0 {
        return Err(EcgError::InvalidFrequency(frequency));
    }
    if samples.is_empty() {
        return Err(EcgError::EmptySamples);
    }

    log::debug!(
        "qrs_boundaries: scanning {} samples at {} Hz (filter={})",
        samples.len(),
        frequency,
        do_filter
    );

    let filtered = if do_filter {
        bandpass(samples, frequency)?
    } else {
        samples.clone()
    };

    let derived = derivative(&filtered);
    let mut detections = qrs_detect(&derived, frequency);

    let window = (frequency * QRS_WIDTH_MAX) as usize;
    let envelope = moving_average(&squaring(&derived, false), window);

    if let Some(&first) = detections.first() {
        if first < window {
            detections.remove(0);
        }
    }

    let qr_shift = (frequency * QR_INTERVAL) as isize;
    let mut boundaries = Vec::with_capacity(detections.len());

    for detection in detections {
        if detection < window {
            log::warn!(
                "qrs_boundaries: skipping detection at {} (closer to the recording start than the {}-sample refinement window)",
                detection,
                window
            );
            continue;
        }

        let end_hi = (detection + window).min(envelope.len());
        let end_window = envelope.slice(s![detection..end_hi]);
        let (end_rel, local_max) = argmax(end_window);
        let end = detection + end_rel;

        let start_lo = detection - window;
        let start_window = envelope.slice(s![start_lo..detection]);
        let local_min = start_window.iter().cloned().fold(f64::INFINITY, f64::min);
        let start_threshold = local_min + 0.05 * local_max;

        let start_rel = match start_window
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v < start_threshold)
            .last()
        {
            Some((idx, _)) => idx as isize,
            None => {
                log::warn!("qrs_boundaries: skipping detection at {} (no threshold crossing in start window)", detection);
                continue;
            }
        };

        let start_abs = start_lo as isize + start_rel - qr_shift;
        let start = start_abs.max(0) as usize;

        boundaries.push(Boundary::new(start, end));
    }

    log::debug!("qrs_boundaries: finished with {} boundaries", boundaries.len());
    Ok(boundaries)
}

/// Adaptive-threshold scan over the squared derivative locating one
/// detection index per QRS complex.
pub fn qrs_detect(derivative: &Array1<f64>, frequency: f64) -> Vec<usize> {
    log::debug!("qrs_detect: scan started over {} samples at {} Hz", derivative.len(), frequency);
    let squared = squaring(derivative, false);
    let n = squared.len();
    let refract = (frequency * QRS_REFRACTORY_PERIOD) as usize;
    let mut hr = (50.0 / 60.0) * frequency;

    let cap = (2.0 * frequency) as usize;
    let local_max = if cap < n {
        squared.slice(s![0..cap]).iter().cloned().fold(f64::MIN, f64::max)
    } else {
        squared.iter().cloned().fold(f64::MIN, f64::max)
    };
    let mut cutoff = QRS_BASE_CUTOFF_FACTOR * local_max;

    let mut detections: Vec<usize> = Vec::new();
    let mut i: i64 = -1;
    while i < n as i64 - 1 {
        i += 1;
        let idx = i as usize;
        let mut found = squared[idx] > cutoff;

        if !found {
            if let Some(&last) = detections.last() {
                if i as f64 > last as f64 + QRS_BACKTRACK_FACTOR * hr {
                    let lower_cutoff = QRS_LOWERED_CUTOFF_FACTOR * cutoff;
                    for j in (last + refract)..idx {
                        if squared[j] > lower_cutoff {
                            i = j as i64;
                            found = true;
                            break;
                        }
                    }
                }
            }
        }

        if found {
            let peak = local_peak(&squared, i as usize, true);
            detections.push(peak);

            if detections.len() > 1 {
                hr = heart_rate(&detections);
            }
            cutoff = 0.8 * cutoff + 0.2 * (0.8 * squared[peak]);

            i = peak as i64 + refract as i64;
        }
    }

    log::debug!("qrs_detect: scan finished with {} detections", detections.len());
    detections
}

fn argmax(view: ndarray::ArrayView1<f64>) -> (usize, f64) {
    view.iter()
        .enumerate()
        .fold((0, f64::MIN), |(bi, bv), (i, &v)| if v > bv { (i, v) } else { (bi, bv) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::synthetic_ecg;

    #[test]
    fn detects_roughly_one_beat_per_synthetic_cycle() {
        let frequency = 250.0;
        let (samples, expected_beats) = synthetic_ecg(frequency, 6.0, 75.0);
        let filtered = bandpass(&samples, frequency).unwrap();
        let derived = derivative(&filtered);
        let detections = qrs_detect(&derived, frequency);
        assert!(
            detections.len() >= expected_beats - 1 && detections.len() <= expected_beats + 1,
            "got {} detections, expected around {}",
            detections.len(),
            expected_beats
        );
    }

    #[test]
    fn boundaries_are_ordered_and_non_overlapping() {
        let frequency = 250.0;
        let (samples, _) = synthetic_ecg(frequency, 6.0, 75.0);
        let boundaries = qrs_boundaries(&samples, frequency, true).unwrap();
        for pair in boundaries.windows(2) {
            assert!(pair[0].end <= pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
    }

    #[test]
    fn rejects_invalid_input() {
        let empty: Array1<f64> = Array1::from(vec![]);
        assert_eq!(
            qrs_boundaries(&empty, 250.0, false).unwrap_err(),
            EcgError::EmptySamples
        );
        let s = Array1::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            qrs_boundaries(&s, -1.0, false).unwrap_err(),
            EcgError::InvalidFrequency(-1.0)
        );
    }
}
