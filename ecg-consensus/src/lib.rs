//! Multi-lead consensus fusion: runs the single-lead QRS and T-wave
//! detectors across every supplied lead and reconciles their votes into
//! one agreed set of boundaries, plus heart-rate estimation.

mod bpm;
mod consensus;

pub use bpm::heart_rate_bpm;
pub use consensus::{determine_qrs, determine_t_waves};
pub use ecg_detect::heart_rate;
