use ecg_dsp::{bandpass, derivative};
use ecg_types::constants::{
    BIPHASIC_FACTOR, PR_INTERVAL_MAX, PR_INTERVAL_MIN, P_START_THRESHOLD_DIVISOR,
    P_WAVE_PRESENCE_FACTOR, P_WAVE_WIDTH_MAX,
};
use ecg_types::{Boundary, EcgError, PWave};
use ndarray::Array1;

/// P-wave boundaries preceding each QRS complex (skipping the first, which
/// has no preceding beat to bound its search window).
pub fn p_wave_boundaries(
    qrs: &[Boundary],
    t_waves: &[Boundary],
    samples: &Array1<f64>,
    frequency: f64,
    do_filter: bool,
) -> Result<Vec<PWave>, EcgError> {
    if frequency <= 0.0 {
        return Err(EcgError::InvalidFrequency(frequency));
    }
    if samples.is_empty() {
        return Err(EcgError::EmptySamples);
    }

    let filtered = if do_filter {
        bandpass(samples, frequency)?
    } else {
        samples.clone()
    };
    let derived = derivative(&filtered);

    let pr_max = (frequency * PR_INTERVAL_MAX) as usize;
    let pr_min_samples = frequency * PR_INTERVAL_MIN;
    let p_width = (frequency * P_WAVE_WIDTH_MAX) as usize;

    log::debug!("p_wave_boundaries: scanning {} qrs complexes at {} Hz", qrs.len(), frequency);

    let mut p_waves = Vec::new();

    for q in qrs.iter().skip(1) {
        let qrs_slope = max_abs(&derived, q.start, q.end);

        let mut win_start = q.start.saturating_sub(pr_max);
        let win_end = q.start;

        for t in t_waves {
            if win_start < t.end && t.end < win_end {
                win_start = t.end;
            }
        }

        if (win_end - win_start) as f64 < pr_min_samples {
            log::warn!(
                "p_wave_boundaries: skipping beat at qrs.start={} (search window {} samples narrower than the minimum PR interval)",
                q.start,
                win_end - win_start
            );
            continue;
        }

        let win = derived.slice(ndarray::s![win_start..win_end]).to_owned();
        let (neg_peak, neg_val) = argmin(&win);

        if neg_val.abs() <= P_WAVE_PRESENCE_FACTOR * qrs_slope {
            log::warn!(
                "p_wave_boundaries: skipping beat at qrs.start={} (no P-wave above presence threshold)",
                q.start
            );
            continue;
        }

        let for_zero = match (neg_peak..win.len()).find(|&i| win[i] > 0.0) {
            Some(i) => i,
            None => {
                log::warn!(
                    "p_wave_boundaries: skipping beat at qrs.start={} (no forward zero-crossing found)",
                    q.start
                );
                continue;
            }
        };
        let back_zero = match (0..neg_peak).rev().find(|&i| win[i] > 0.0) {
            Some(i) => i,
            None => {
                log::warn!(
                    "p_wave_boundaries: skipping beat at qrs.start={} (no backward zero-crossing found)",
                    q.start
                );
                continue;
            }
        };

        let back_peak = if back_zero as isize - p_width as isize > 0 {
            let lo = back_zero - p_width;
            let (rel, _) = argmax(&win.slice(ndarray::s![lo..back_zero]).to_owned());
            lo + rel
        } else {
            let (rel, _) = argmax(&win.slice(ndarray::s![0..back_zero]).to_owned());
            rel
        };

        let for_peak = if for_zero + p_width < win.len() {
            let hi = for_zero + p_width;
            let rel = last_argmax(&win.slice(ndarray::s![for_zero..hi]).to_owned());
            for_zero + rel
        } else {
            let rel = last_argmax(&win.slice(ndarray::s![for_zero..]).to_owned());
            for_zero + rel
        };

        let start_threshold = win[back_peak] / P_START_THRESHOLD_DIVISOR;
        let mut start = back_peak;
        for i in (0..=back_peak).rev() {
            start = i;
            if win[i] < start_threshold {
                break;
            }
        }

        let p_wave = if win[for_peak] * BIPHASIC_FACTOR > win[back_peak] {
            let mid = neg_peak;
            let end_threshold = win[for_peak] / 2.0;
            let mut end = for_peak;
            for j in for_peak..win.len() {
                end = j;
                if win[j] < end_threshold {
                    break;
                }
            }
            PWave::Biphasic {
                start: start + win_start,
                mid: mid + win_start,
                end: end + win_start,
            }
        } else {
            let end_threshold = win[neg_peak] / 2.0;
            let mut end = neg_peak;
            for j in neg_peak..win.len() {
                end = j;
                if win[j] > end_threshold {
                    break;
                }
            }
            PWave::Monophasic {
                start: start + win_start,
                end: end + win_start,
            }
        };

        p_waves.push(p_wave);
    }

    log::debug!("p_wave_boundaries: finished with {} p-waves", p_waves.len());
    Ok(p_waves)
}

/// Maximum absolute value over `[start, end)`, matching the reference
/// slope window which excludes the QRS boundary's own end sample.
fn max_abs(arr: &Array1<f64>, start: usize, end: usize) -> f64 {
    arr.slice(ndarray::s![start..end])
        .iter()
        .cloned()
        .fold(0.0_f64, |best, v| if v.abs() > best.abs() { v } else { best })
        .abs()
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

/// Index of the maximum value, tie-breaking to the rightmost occurrence.
fn last_argmax(arr: &Array1<f64>) -> usize {
    let (_, best) = argmax(arr);
    arr.iter().enumerate().filter(|&(_, &v)| v == best).last().map(|(i, _)| i).unwrap_or(0)
}
