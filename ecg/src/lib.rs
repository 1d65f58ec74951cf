//! ECG - A library for ECG waveform analysis
//!
//! This library provides functionality for:
//! - Detecting QRS complexes, T-waves, and P-waves in digitized ECG leads
//! - Fusing per-lead detections into a multi-lead consensus
//! - Quantifying P-terminal force from biphasic P-wave morphology
//!
//! Copyright (C) 2026 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![warn(missing_docs)]

pub use ecg_consensus::{determine_qrs, determine_t_waves, heart_rate, heart_rate_bpm};
pub use ecg_detect::{
    p_wave_boundaries, pterm_measurements, qrs_boundaries, qrs_detect, t_wave_boundaries,
    t_wave_windows,
};
pub use ecg_dsp::{bandpass, derivative, highpass, local_peak, moving_average, savitzky_golay, squaring};
pub use ecg_types::{constants, Boundary, EcgError, Lead, PWave};
