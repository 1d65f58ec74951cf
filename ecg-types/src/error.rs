use thiserror::Error;

/// Errors that invalidate an analysis call outright.
///
/// Signal-level anomalies (a degenerate beat window, a missing P-wave, an
/// under-length recording) are never represented here: they are recovered
/// locally by omitting the affected beat. Only malformed input reaches
/// this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EcgError {
    #[error("frequency must be positive, got {0}")]
    InvalidFrequency(f64),

    #[error("samples must be non-empty")]
    EmptySamples,

    #[error("unrecognized lead identifier: {0:?}")]
    UnknownLead(String),

    #[error("lead waveforms must all share the same length, got {0} and {1}")]
    LeadLengthMismatch(usize, usize),

    #[error("at least one lead is required for multi-lead consensus")]
    NoLeads,
}
