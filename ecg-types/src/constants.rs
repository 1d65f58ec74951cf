//! Physiological and detection-tuning constants, all durations in seconds
//! unless noted otherwise. Centralized here so every crate in the
//! workspace references the same values instead of re-declaring them.

/// Typical QR interval, used to shift an R-wave start back to a Q-wave start.
pub const QR_INTERVAL: f64 = 0.04;

/// Minimum spacing enforced between consecutive QRS detections.
pub const QRS_REFRACTORY_PERIOD: f64 = 0.20;

/// Prolonged QRS duration is clinically defined as >= this value; also used
/// as the QRS boundary-refinement window width.
pub const QRS_WIDTH_MAX: f64 = 0.12;

/// Prolonged PR interval is clinically defined as >= this value; used as the
/// backward reach of the P-wave search window.
pub const PR_INTERVAL_MAX: f64 = 0.22;

/// Short PR interval is clinically defined as < this value; a P-wave search
/// window narrower than this is rejected as degenerate.
pub const PR_INTERVAL_MIN: f64 = 0.12;

/// Widened P-wave duration is clinically defined as >= this value; also used
/// as the P-wave peak-search window width.
pub const P_WAVE_WIDTH_MAX: f64 = 0.12;

/// Factor by which one slope peak must exceed another before a wave is
/// classified biphasic rather than monophasic.
pub const BIPHASIC_FACTOR: f64 = 1.5;

/// Proportion of the local energy maximum used as the base QRS detection
/// cutoff.
pub const QRS_BASE_CUTOFF_FACTOR: f64 = 0.8;

/// Proportion of the base cutoff used once backtracking has been triggered.
pub const QRS_LOWERED_CUTOFF_FACTOR: f64 = 0.5;

/// Number of average inter-complex durations without a detection before
/// backtracking is attempted.
pub const QRS_BACKTRACK_FACTOR: f64 = 1.8;

/// Minimum fraction of the associated QRS's peak slope a P-wave's negative
/// peak must reach to be considered present.
pub const P_WAVE_PRESENCE_FACTOR: f64 = 0.03;

/// Divisor applied to the backward peak slope when walking back to find the
/// P-wave start point. Unexplained in the source this was distilled from;
/// treated as a tuned constant and left unchanged.
pub const P_START_THRESHOLD_DIVISOR: f64 = 1.35;

/// Default Butterworth highpass cutoff, in Hz, used to remove baseline
/// wander.
pub const HIGHPASS_CUTOFF_HZ: f64 = 0.8;

/// Savitzky-Golay smoothing window length, in samples.
pub const SAVGOL_WINDOW: usize = 31;

/// Savitzky-Golay smoothing polynomial order.
pub const SAVGOL_ORDER: usize = 3;

/// Minimum fraction of leads that must report a detection for it to be
/// counted as a QRS consensus.
pub const QRS_CONSENSUS_THRESHOLD: f64 = 0.5;

/// Minimum fraction of leads that must report a detection for it to be
/// counted as a T-wave consensus.
pub const T_WAVE_CONSENSUS_THRESHOLD: f64 = 0.5;

/// ST-segment offset added to a QRS end to start the T-wave search window.
pub const ST_INTERVAL: f64 = 0.04;
