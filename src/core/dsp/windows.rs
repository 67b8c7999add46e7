//! Window function implementations

use std::f64::consts::PI;

/// Create a symmetric Hann window of the given length.
///
/// `w[i] = 0.5 - 0.5*cos(2*pi*i / (size-1))`, zero at both ends.
/// This is the symmetric (analysis) form, not the periodic DFT form.
pub fn hann_window(size: usize) -> Vec<f64> {
    if size == 1 {
        return vec![1.0];
    }
    let n = (size - 1) as f64;
    (0..size)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / n).cos())
        .collect()
}
