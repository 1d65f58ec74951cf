/// Mean inter-detection interval, in samples.
///
/// Requires at least two detections; callers that might have fewer must
/// check before calling (there is no meaningful rate from a single beat).
pub fn heart_rate(detections: &[usize]) -> f64 {
    debug_assert!(detections.len() >= 2, "heart_rate needs at least two detections");
    let max = *detections.iter().max().unwrap();
    let min = *detections.iter().min().unwrap();
    let rates = (detections.len() - 1) as f64;
    (max - min) as f64 / rates
}
