//! Single-lead QRS, T-wave, and P-wave boundary detection, and
//! P-terminal-force quantification.

mod heart_rate;
mod pterm;
mod pwave;
mod qrs;
mod twave;

#[cfg(test)]
mod testutil;

pub use heart_rate::heart_rate;
pub use pterm::pterm_measurements;
pub use pwave::p_wave_boundaries;
pub use qrs::{qrs_boundaries, qrs_detect};
pub use twave::{t_wave_boundaries, t_wave_windows};
