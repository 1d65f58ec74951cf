//! Primitive digital signal processing kernels shared by the detection
//! crates: noise filtering, the derivative/squaring/moving-average chain,
//! and the local peak finder.

mod bandpass;
mod derivative;
mod highpass;
mod moving_average;
mod peak;
mod savgol;
mod squaring;

pub use bandpass::bandpass;
pub use derivative::derivative;
pub use highpass::highpass;
pub use moving_average::moving_average;
pub use peak::local_peak;
pub use savgol::savitzky_golay;
pub use squaring::squaring;
