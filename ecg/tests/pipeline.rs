//! End-to-end tests exercising the full detection pipeline through the
//! public facade, on a synthetic multi-beat waveform.

use ndarray::Array1;

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

fn synthetic_ecg(frequency: f64, duration_s: f64, bpm: f64) -> Array1<f64> {
    let n = (duration_s * frequency) as usize;
    let period = frequency * 60.0 / bpm;
    let mut samples = vec![0.0f64; n];

    let mut beat = 0usize;
    loop {
        let center = beat as f64 * period + period;
        if center + 0.5 * frequency > n as f64 {
            break;
        }
        add_gaussian(&mut samples, center - 0.18 * frequency, 0.02 * frequency, 0.15);
        add_gaussian(&mut samples, center, 0.008 * frequency, 1.0);
        add_gaussian(&mut samples, center + 0.30 * frequency, 0.06 * frequency, 0.35);
        beat += 1;
    }

    Array1::from(samples)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn end_to_end_pipeline_runs_on_a_synthetic_recording() {
    init_logging();
    let frequency = 250.0;
    let samples = synthetic_ecg(frequency, 8.0, 75.0);

    log::info!("running end-to-end pipeline over {} samples", samples.len());

    let qrs = ecg::qrs_boundaries(&samples, frequency, true).expect("qrs detection");
    assert!(qrs.len() >= 5, "expected several beats, got {}", qrs.len());

    let t_waves =
        ecg::t_wave_boundaries(&qrs, &samples, frequency, true).expect("t-wave detection");
    assert_eq!(t_waves.len(), qrs.len() - 1);

    let p_waves = ecg::p_wave_boundaries(&qrs, &t_waves, &samples, frequency, true)
        .expect("p-wave detection");
    assert!(p_waves.len() <= qrs.len() - 1);

    let pterm = ecg::pterm_measurements(&samples, frequency, &p_waves, true)
        .expect("p-terminal force");
    assert_eq!(pterm.len(), p_waves.len());

    log::info!(
        "found {} qrs, {} t-waves, {} p-waves",
        qrs.len(),
        t_waves.len(),
        p_waves.len()
    );
}

#[test]
fn multi_lead_consensus_agrees_with_single_lead_on_identical_leads() {
    init_logging();
    let frequency = 250.0;
    let samples = synthetic_ecg(frequency, 8.0, 75.0);
    let leads = vec![samples.clone(), samples.clone(), samples.clone()];

    let consensus_qrs = ecg::determine_qrs(&leads, frequency).expect("consensus qrs");
    let single_qrs = ecg::qrs_boundaries(&samples, frequency, true).expect("single-lead qrs");
    assert_eq!(consensus_qrs.len(), single_qrs.len());

    let consensus_t = ecg::determine_t_waves(&leads, frequency, &consensus_qrs)
        .expect("consensus t-waves");
    assert_eq!(consensus_t.len(), consensus_qrs.len() - 1);
}

#[test]
fn rejects_mismatched_frequency() {
    let samples = Array1::from(vec![0.0; 10]);
    let err = ecg::qrs_boundaries(&samples, -1.0, false).unwrap_err();
    assert_eq!(err, ecg::EcgError::InvalidFrequency(-1.0));
}
