// src/error.rs
//
// Typed errors for the metric pipeline. Decode/I-O failures travel as
// anyhow::Error with context; these variants cover the cases the
// estimators themselves can reject.

use thiserror::Error;

/// Errors produced by alignment, configuration, and scoring.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The two recordings were captured at different rates; comparing them
    /// sample-for-sample would be meaningless.
    #[error("sample rate mismatch: original {original} Hz, degraded {degraded} Hz")]
    SampleRateMismatch { original: u32, degraded: u32 },

    /// Peak scaling during normalization would divide by zero.
    #[error("degraded signal is silent; cannot match dynamic ranges")]
    SilentDegraded,

    /// The aligned signals are shorter than a single analysis frame.
    #[error("signal too short for segmental analysis: {samples} samples, frame size {frame_size}")]
    InsufficientLength { samples: usize, frame_size: usize },

    /// Overlap so large that consecutive frames would not advance.
    #[error("overlap of {overlap_percent}% leaves no step between {frame_size}-sample frames")]
    InvalidOverlap {
        overlap_percent: u32,
        frame_size: usize,
    },

    /// Frame size too small to window (or auto-derived as zero).
    #[error("invalid frame size: {0} samples (need at least 2)")]
    InvalidFrameSize(usize),

    /// The external ITU-T P.862 evaluator failed or produced no score.
    #[error("PESQ evaluation failed: {0}")]
    Pesq(String),
}
