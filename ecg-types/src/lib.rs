//! Shared vocabulary for the ECG waveform analysis crates: lead identifiers,
//! boundary types, the physiological constant table, and the crate-wide
//! error enum.

mod boundary;
mod error;
mod lead;

pub mod constants;

pub use boundary::{Boundary, PWave};
pub use error::EcgError;
pub use lead::Lead;
