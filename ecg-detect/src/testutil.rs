//! Synthetic P-QRS-T waveform generation for unit tests. Not part of the
//! public API.

use ndarray::Array1;

/// Builds a synthetic single-lead recording made of repeated P-QRS-T
/// morphologies (each a sum of Gaussian bumps) at the given heart rate.
///
/// Returns the sample buffer and the number of full beats placed.
pub fn synthetic_ecg(frequency: f64, duration_s: f64, bpm: f64) -> (Array1<f64>, usize) {
    let n = (duration_s * frequency) as usize;
    let period = frequency * 60.0 / bpm;
    let mut samples = vec![0.0f64; n];

    let mut beat = 0usize;
    loop {
        let center = beat as f64 * period + period; // first beat not flush against t=0
        if center + 0.5 * frequency > n as f64 {
            break;
        }
        add_gaussian(&mut samples, center - 0.18 * frequency, 0.02 * frequency, 0.15);
        add_gaussian(&mut samples, center, 0.008 * frequency, 1.0);
        add_gaussian(&mut samples, center + 0.30 * frequency, 0.06 * frequency, 0.35);
        beat += 1;
    }

    (Array1::from(samples), beat)
}

fn add_gaussian(samples: &mut [f64], center: f64, sigma: f64, amplitude: f64) {
    let n = samples.len();
    if n == 0 {
        return;
    }
    let lo = (center - 4.0 * sigma).max(0.0) as usize;
    let hi = ((center + 4.0 * sigma).max(0.0) as usize).min(n - 1);
    if hi < lo {
        return;
    }
    for i in lo..=hi {
        let d = i as f64 - center;
        samples[i] += amplitude * (-(d * d) / (2.0 * sigma * sigma)).exp();
    }
}
