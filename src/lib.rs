//! SpeechScore - Objective speech-quality metrics
//!
//! Compares a reference ("original") recording against a degraded copy and
//! produces repeatable numeric quality scores, for evaluating speech codecs,
//! noise suppressors, and enhancement algorithms without listening tests.
//!
//! ## Metrics
//!
//! - **Global SNR**: whole-signal energy ratio in dB
//! - **Segmental SNR**: mean of clamped per-frame SNRs over short
//!   overlapping Hann-windowed frames (Hansen & Pellom, 1998)
//! - **PESQ**: delegated to an external ITU-T P.862 reference evaluator
//!
//! ## Module Structure
//!
//! - `core` - decoding, alignment, and the estimators
//! - `config` - scoring configuration and frame layout
//! - `error` - typed error taxonomy
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use speechscore::{load_aligned_pair, global_snr, segmental_snr, MetricsConfig};
//!
//! let pair = load_aligned_pair(original_path, degraded_path, true)?;
//! let layout = MetricsConfig::default().frame_layout(pair.sample_rate)?;
//!
//! println!("SNR: {}", global_snr(&pair.original, &pair.degraded));
//! println!("Segmental SNR: {}", segmental_snr(&pair.original, &pair.degraded, &layout)?);
//! ```

// Decoding, alignment, and estimators
pub mod core;

// Configuration and frame layout
pub mod config;

// Typed errors
pub mod error;

// Re-export commonly used types at crate root for convenience
pub use config::{FrameLayout, MetricsConfig};
pub use core::{
    decode_audio, frame_count, frame_offsets, global_snr, load_aligned_pair, normalize_pair,
    segmental_snr, truncate_pair, AlignedPair, AudioData, ExternalPesq, PesqScorer, SnrReport,
    MAX_ALLOWED_SNR, MIN_ALLOWED_SNR,
};
pub use error::MetricsError;
