//! Elementwise statistics over sample buffers
//!
//! Accumulation happens in f64 even for f32 sample data so long sums do not
//! lose low-order bits.

/// Arithmetic mean of a sample buffer.
pub fn mean(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| s as f64).sum();
    sum / samples.len() as f64
}

/// Compute peak amplitude
pub fn peak_amplitude(samples: &[f32]) -> f64 {
    samples.iter().map(|s| s.abs() as f64).fold(0.0f64, f64::max)
}

/// Total energy: sum of squared samples.
pub fn energy(samples: &[f32]) -> f64 {
    samples.iter().map(|&s| s as f64 * s as f64).sum()
}

/// Energy of the difference signal between two equal-length buffers.
pub fn error_energy(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let samples = vec![1.0, 2.0, 3.0, 4.0];
        assert!((mean(&samples) - 2.5).abs() < 1e-12);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_peak_amplitude() {
        let samples = vec![0.25, -0.75, 0.5];
        assert!((peak_amplitude(&samples) - 0.75).abs() < 1e-12);
        assert_eq!(peak_amplitude(&[]), 0.0);
    }

    #[test]
    fn test_energy() {
        let samples = vec![1.0, -1.0, 2.0];
        assert!((energy(&samples) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_error_energy() {
        let a = vec![1.0, 0.0, -1.0];
        let b = vec![0.0, 0.0, 1.0];
        assert!((error_energy(&a, &b) - 5.0).abs() < 1e-12);
    }
}
