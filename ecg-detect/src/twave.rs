use ecg_dsp::{bandpass, derivative, squaring};
use ecg_types::constants::{BIPHASIC_FACTOR, ST_INTERVAL};
use ecg_types::{Boundary, EcgError};
use ndarray::Array1;

use crate::heart_rate::heart_rate;

/// T-wave boundaries for each gap between consecutive QRS complexes.
///
/// The number of T-waves is one fewer than the number of QRS complexes:
/// each T-wave lives in the window after a QRS and before the next one.
pub fn t_wave_boundaries(
    qrs: &[Boundary],
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

    log::debug!("t_wave_boundaries: scanning {} qrs complexes at {} Hz", qrs.len(), frequency);

    let mut t_waves = Vec::new();
    for (win_start, win_end) in t_wave_windows(qrs, frequency) {
        let slice = samples.slice(ndarray::s![win_start..win_end]).to_owned();
        let filtered = if do_filter {
            bandpass(&slice, frequency)?
        } else {
            slice
        };
        let signed_sq = squaring(&derivative(&filtered), true);

        let (up, _) = argmax(&signed_sq);
        let (down, _) = argmin(&signed_sq);
        let peak_slope = signed_sq[up].abs().max(signed_sq[down].abs());

        let end_peak = if up < down {
            let tail_max = signed_sq.slice(ndarray::s![down..]).iter().cloned().fold(f64::MIN, f64::max);
            if tail_max.abs() * BIPHASIC_FACTOR > peak_slope {
                let (tail_rel, _) = argmax(&signed_sq.slice(ndarray::s![down..]).to_owned());
                down + tail_rel
            } else {
                down
            }
        } else {
            let tail_min = signed_sq.slice(ndarray::s![up..]).iter().cloned().fold(f64::MAX, f64::min);
            if tail_min.abs() * BIPHASIC_FACTOR > peak_slope {
                let (tail_rel, _) = argmin(&signed_sq.slice(ndarray::s![up..]).to_owned());
                up + tail_rel
            } else {
                up
            }
        };

        let threshold = signed_sq[end_peak] / 10.0;
        let mut end = end_peak;
        for i in end_peak..signed_sq.len() {
            end = i;
            if threshold > 0.0 {
                if signed_sq[i] < threshold {
                    break;
                }
            } else if signed_sq[i] > threshold {
                break;
            }
        }

        t_waves.push(Boundary::new(win_start, win_start + end));
    }

    log::debug!("t_wave_boundaries: finished with {} t-waves", t_waves.len());
    Ok(t_waves)
}

/// Search-window construction for each QRS pair, shared with multi-lead
/// consensus so every lead searches the same span.
pub fn t_wave_windows(qrs: &[Boundary], frequency: f64) -> Vec<(usize, usize)> {
    let st_offset = (frequency * ST_INTERVAL) as usize;
    let mut windows = Vec::new();

    for i in 0..qrs.len().saturating_sub(1) {
        let win_start = qrs[i].end + st_offset;

        let hr = if i >= 4 {
            let starts: Vec<usize> = qrs[i - 4..=i].iter().map(|b| b.start).collect();
            heart_rate(&starts)
        } else if qrs.len() < 5 {
            let starts: Vec<usize> = qrs.iter().map(|b| b.start).collect();
            heart_rate(&starts)
        } else {
            let starts: Vec<usize> = qrs[..5].iter().map(|b| b.start).collect();
            heart_rate(&starts)
        };

        let length = qrs[i + 1].start as isize - qrs[i].end as isize;
        let win_end = if hr > 0.7 * frequency && length > (0.5 * frequency) as isize {
            qrs[i].end + (0.5 * frequency) as usize
        } else if length > (0.7 * hr) as isize {
            qrs[i].end + (0.7 * hr) as usize
        } else {
            qrs[i].end + (0.7 * length.max(0) as f64) as usize
        };

        // Believed unreachable given well-formed ascending QRS boundaries,
        // but kept as a defensive guard.
        if win_end < win_start {
            log::warn!(
                "t_wave_windows: skipping window after qrs[{}] (win_end {} < win_start {})",
                i,
                win_end,
                win_start
            );
            continue;
        }

        windows.push((win_start, win_end));
    }

    windows
}

fn argmax(arr: &Array1<f64>) -> (usize, f64) {
    arr.iter()
        .enumerate()
        .fold((0, f64::MIN), |(bi, bv), (i, &v)| if v > bv { (i, v) } else { (bi, bv) })
}

fn argmin(arr: &Array1<f64>) -> (usize, f64) {
    arr.iter()
        .enumerate()
        .fold((0, f64::MAX), |(bi, bv), (i, &v)| if v < bv { (i, v) } else { (bi, bv) })
}
