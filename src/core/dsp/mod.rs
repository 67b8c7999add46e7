//! Small pure DSP helpers shared by the estimators

pub mod stats;
pub mod windows;

pub use stats::{energy, error_energy, mean, peak_amplitude};
pub use windows::hann_window;
