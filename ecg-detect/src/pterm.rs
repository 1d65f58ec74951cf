use ecg_dsp::bandpass;
use ecg_types::{EcgError, PWave};
use ndarray::Array1;

/// P-terminal force (depth in μV times duration in ms of the negative
/// terminal lobe) for each P-wave. Monophasic P-waves contribute `0.0`
/// (not applicable).
pub fn pterm_measurements(
    samples: &Array1<f64>,
    frequency: f64,
    p_waves: &[PWave],
    do_filter: bool,
) -> Result<Vec<f64>, EcgError> {
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

    let measurements = p_waves
        .iter()
        .map(|p_wave| match *p_wave {
            PWave::Monophasic { .. } => 0.0,
            PWave::Biphasic { start, mid, end } => {
                let duration_ms = 1000.0 * (end - mid) as f64 / frequency;

                let (x1, y1) = (start as f64, filtered[start]);
                let (x2, y2) = (end as f64, filtered[end]);
                let slope = (y1 - y2) / (x1 - x2);
                let intercept = y1 - slope * x1;

                let mut depth_mv: f64 = 0.0;
                for i in mid..end {
                    let line = slope * i as f64 + intercept;
                    let gap = line - filtered[i];
                    if gap > depth_mv {
                        depth_mv = gap;
                    }
                }
                let depth_uv = depth_mv * 1000.0;

                depth_uv * duration_ms
            }
        })
        .collect();

    Ok(measurements)
}
