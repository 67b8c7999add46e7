// src/core/snr.rs
//
// Global and Segmental SNR estimators.
//
// Segmental SNR follows the evaluation protocol of Hansen & Pellom,
// "An effective quality evaluation protocol for speech enhancement
// algorithms", ICSLP 1998: short overlapping Hann-windowed frames, a
// per-frame SNR clamped to [-10, +35] dB, averaged across the signal.
// The clamp keeps near-silent frames from dominating the average, which
// is what distinguishes the segmental score from the plain energy ratio.

use log::debug;
use serde::Serialize;

use crate::config::FrameLayout;
use crate::core::dsp::{energy, error_energy, hann_window};
use crate::error::MetricsError;

/// Clamp floor for a single frame's SNR, in dB.
pub const MIN_ALLOWED_SNR: f64 = -10.0;
/// Clamp ceiling for a single frame's SNR, in dB.
pub const MAX_ALLOWED_SNR: f64 = 35.0;

/// Guards both the division by a silent frame's noise power and the
/// logarithm when the speech power is itself ~0.
const EPSILON: f64 = 1e-7;

/// Both scores for one original/degraded pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SnrReport {
    pub snr_db: f64,
    pub segmental_snr_db: f64,
}

/// Whole-signal SNR in dB: `10*log10(sum(orig^2) / sum((orig-deg)^2))`.
///
/// A bit-exact degraded copy has zero error energy and yields `+inf`;
/// that is a boundary value, not an error.
pub fn global_snr(original: &[f32], degraded: &[f32]) -> f64 {
    10.0 * (energy(original) / error_energy(original, degraded)).log10()
}

/// Number of whole frames the protocol reads from a signal of `min_len`
/// samples. This is the floor of the float quotient
/// `min_len/step - frame/step`, which deliberately under-covers the tail
/// rather than reading past the end or taking a partial frame.
pub fn frame_count(min_len: usize, layout: &FrameLayout) -> Result<usize, MetricsError> {
    let n = (min_len as f64 / layout.step_size as f64
        - layout.frame_size as f64 / layout.step_size as f64)
        .floor();
    if n < 1.0 {
        return Err(MetricsError::InsufficientLength {
            samples: min_len,
            frame_size: layout.frame_size,
        });
    }
    Ok(n as usize)
}

/// Lazy sequence of frame start offsets: `0, step, 2*step, ..`.
pub fn frame_offsets(layout: &FrameLayout, n_frames: usize) -> impl Iterator<Item = usize> {
    let step = layout.step_size;
    (0..n_frames).map(move |k| k * step)
}

/// Mean clamped per-frame SNR over the aligned pair.
///
/// Both slices must have equal length; the layout comes from
/// [`crate::config::MetricsConfig::frame_layout`].
pub fn segmental_snr(
    original: &[f32],
    degraded: &[f32],
    layout: &FrameLayout,
) -> Result<f64, MetricsError> {
    let min_len = original.len().min(degraded.len());
    let n_frames = frame_count(min_len, layout)?;
    let window = hann_window(layout.frame_size);
    debug!("segmental SNR over {} frames of {}", n_frames, layout.frame_size);

    let sum: f64 = frame_offsets(layout, n_frames)
        .map(|ind| {
            frame_snr(
                &original[ind..ind + layout.frame_size],
                &degraded[ind..ind + layout.frame_size],
                &window,
            )
        })
        .sum();

    Ok(sum / n_frames as f64)
}

/// Clamped SNR of a single windowed frame pair.
fn frame_snr(original: &[f32], degraded: &[f32], window: &[f64]) -> f64 {
    let mut speech_power = 0.0f64;
    let mut noise_power = 0.0f64;
    for i in 0..window.len() {
        let o = original[i] as f64 * window[i];
        let d = degraded[i] as f64 * window[i];
        speech_power += o * o;
        let e = o - d;
        noise_power += e * e;
    }

    let snr = 10.0 * (speech_power / (noise_power + EPSILON) + EPSILON).log10();
    snr.clamp(MIN_ALLOWED_SNR, MAX_ALLOWED_SNR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetricsConfig;

    fn layout(frame: usize, overlap: u32, sr: u32) -> FrameLayout {
        MetricsConfig {
            normalize: false,
            frame_size: frame,
            overlap_percent: overlap,
        }
        .frame_layout(sr)
        .unwrap()
    }

    fn sine(len: usize, freq: f64, sr: f64, amplitude: f32) -> Vec<f32> {
        (0..len)
            .map(|i| {
                amplitude * (2.0 * std::f64::consts::PI * freq * i as f64 / sr).sin() as f32
            })
            .collect()
    }

    #[test]
    fn test_frame_count_determinism() {
        // 16000 samples, 320-sample frames, 50% overlap: floor(100 - 2) = 98
        let layout = layout(320, 50, 16000);
        assert_eq!(layout.step_size, 160);
        assert_eq!(frame_count(16000, &layout).unwrap(), 98);
    }

    #[test]
    fn test_frame_offsets_stay_in_bounds() {
        let layout = layout(320, 50, 16000);
        let n = frame_count(16000, &layout).unwrap();
        let offsets: Vec<usize> = frame_offsets(&layout, n).collect();
        assert_eq!(offsets.len(), 98);
        assert_eq!(offsets[0], 0);
        assert_eq!(offsets[1], 160);
        assert!(offsets.last().unwrap() + layout.frame_size <= 16000);
    }

    #[test]
    fn test_offsets_iterator_is_restartable() {
        let layout = layout(320, 50, 16000);
        let a: Vec<usize> = frame_offsets(&layout, 5).collect();
        let b: Vec<usize> = frame_offsets(&layout, 5).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_perfect_match_boundaries() {
        let original = sine(16000, 440.0, 16000.0, 0.5);
        let degraded = original.clone();

        assert!(global_snr(&original, &degraded).is_infinite());

        let layout = layout(0, 0, 16000);
        let seg = segmental_snr(&original, &degraded, &layout).unwrap();
        // every frame carries energy, so every frame clamps to the ceiling
        assert_eq!(seg, MAX_ALLOWED_SNR);
    }

    #[test]
    fn test_negated_signal_global_snr() {
        let original = sine(16000, 440.0, 16000.0, 0.5);
        let degraded: Vec<f32> = original.iter().map(|s| -s).collect();

        // error signal is 2*orig, so the ratio is exactly 1/4
        let snr = global_snr(&original, &degraded);
        let expected = 10.0 * 0.25f64.log10();
        assert!((snr - expected).abs() < 1e-9, "got {}", snr);
    }

    #[test]
    fn test_silence_clamps_to_floor() {
        let original = vec![0.0f32; 16000];
        let degraded = vec![0.0f32; 16000];
        let layout = layout(0, 0, 16000);

        // 10*log10(0/eps + eps) = -70 dB before the clamp; no domain error
        let seg = segmental_snr(&original, &degraded, &layout).unwrap();
        assert_eq!(seg, MIN_ALLOWED_SNR);
    }

    #[test]
    fn test_heavy_noise_stays_clamped() {
        let original = sine(16000, 440.0, 16000.0, 0.01);
        // degraded bears no resemblance: loud out-of-phase tone
        let degraded = sine(16000, 1130.0, 16000.0, 0.9);
        let layout = layout(0, 0, 16000);

        let seg = segmental_snr(&original, &degraded, &layout).unwrap();
        assert!(seg >= MIN_ALLOWED_SNR && seg <= MAX_ALLOWED_SNR);
    }

    #[test]
    fn test_moderate_noise_lands_between_clamps() {
        let original = sine(16000, 440.0, 16000.0, 0.5);
        let noise = sine(16000, 3517.0, 16000.0, 0.05);
        let degraded: Vec<f32> = original.iter().zip(&noise).map(|(s, n)| s + n).collect();
        let layout = layout(0, 0, 16000);

        let seg = segmental_snr(&original, &degraded, &layout).unwrap();
        assert!(seg > MIN_ALLOWED_SNR && seg < MAX_ALLOWED_SNR, "got {}", seg);

        let global = global_snr(&original, &degraded);
        assert!(global.is_finite());
        assert!(global > 0.0);
    }

    #[test]
    fn test_signal_shorter_than_one_frame() {
        let original = sine(300, 440.0, 16000.0, 0.5);
        let degraded = original.clone();
        let layout = layout(320, 50, 16000);

        let err = segmental_snr(&original, &degraded, &layout).unwrap_err();
        assert!(matches!(err, MetricsError::InsufficientLength { samples: 300, .. }));
    }

    #[test]
    fn test_exactly_one_frame_is_still_insufficient() {
        // floor(320/160 - 320/160) = 0 frames under the protocol's count
        let layout = layout(320, 50, 16000);
        let err = frame_count(320, &layout).unwrap_err();
        assert!(matches!(err, MetricsError::InsufficientLength { .. }));
        assert_eq!(frame_count(480, &layout).unwrap(), 1);
    }
}
