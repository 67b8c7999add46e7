// src/core/align.rs
//
// Pairwise alignment and normalization of the original/degraded recordings.
// Both estimators require equal-length inputs; loudness matching is opt-in.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

use super::decoder::decode_audio;
use crate::core::dsp::{mean, peak_amplitude};
use crate::error::MetricsError;

/// An original/degraded pair trimmed to a common length and ready to score.
#[derive(Debug, Clone)]
pub struct AlignedPair {
    pub original: Vec<f32>,
    pub degraded: Vec<f32>,
    pub sample_rate: u32,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

/// Decode both files, verify they share a sample rate, and trim both to the
/// shorter length. With `normalize` set, DC bias is removed and the degraded
/// signal is rescaled to the original's peak amplitude.
///
/// Multi-channel audio is treated as a single interleaved sample sequence.
pub fn load_aligned_pair(
    original_path: &Path,
    degraded_path: &Path,
    normalize: bool,
) -> Result<AlignedPair> {
    let original = decode_audio(original_path)
        .with_context(|| format!("Failed to decode original: {}", original_path.display()))?;
    let degraded = decode_audio(degraded_path)
        .with_context(|| format!("Failed to decode degraded: {}", degraded_path.display()))?;

    if original.sample_rate != degraded.sample_rate {
        return Err(MetricsError::SampleRateMismatch {
            original: original.sample_rate,
            degraded: degraded.sample_rate,
        }
        .into());
    }

    info!(
        "original: {} samples, {} ch; degraded: {} samples, {} ch; {} Hz",
        original.samples.len(),
        original.channels,
        degraded.samples.len(),
        degraded.channels,
        original.sample_rate
    );

    let mut pair = AlignedPair {
        sample_rate: original.sample_rate,
        original: original.samples,
        degraded: degraded.samples,
    };
    truncate_pair(&mut pair.original, &mut pair.degraded);
    debug!("aligned length: {} samples", pair.len());

    if normalize {
        normalize_pair(&mut pair.original, &mut pair.degraded)?;
    }

    Ok(pair)
}

/// Trim both buffers to the shorter one, keeping the leading samples.
pub fn truncate_pair(a: &mut Vec<f32>, b: &mut Vec<f32>) {
    let min_len = a.len().min(b.len());
    a.truncate(min_len);
    b.truncate(min_len);
}

/// Zero each signal's DC bias, then scale the degraded signal so its peak
/// amplitude matches the original's. The original keeps its scale.
pub fn normalize_pair(original: &mut [f32], degraded: &mut [f32]) -> Result<(), MetricsError> {
    remove_dc(original);
    remove_dc(degraded);

    let original_peak = peak_amplitude(original);
    let degraded_peak = peak_amplitude(degraded);
    if degraded_peak == 0.0 {
        return Err(MetricsError::SilentDegraded);
    }

    let scale = (original_peak / degraded_peak) as f32;
    for s in degraded.iter_mut() {
        *s *= scale;
    }
    debug!(
        "normalized: peaks {:.6}/{:.6}, scale {:.6}",
        original_peak, degraded_peak, scale
    );
    Ok(())
}

fn remove_dc(samples: &mut [f32]) {
    let bias = mean(samples) as f32;
    for s in samples.iter_mut() {
        *s -= bias;
    }
}
