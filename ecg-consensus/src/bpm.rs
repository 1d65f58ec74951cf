use ecg_detect::heart_rate;

/// Heart rate in beats per minute, derived from the mean inter-detection
/// interval (in samples) and the sampling frequency.
///
/// The source this crate was distilled from only ever computed samples-
/// per-beat directly and converted to BPM inline at call sites; this
/// folds that conversion into a named operation instead of repeating it.
pub fn heart_rate_bpm(detections: &[usize], frequency: f64) -> f64 {
    60.0 * frequency / heart_rate(detections)
}
