//! Core estimation modules

pub mod align;
pub mod decoder;
pub mod dsp;
pub mod pesq;
pub mod snr;

pub use align::{load_aligned_pair, normalize_pair, truncate_pair, AlignedPair};
pub use decoder::{decode_audio, AudioData};
pub use pesq::{ExternalPesq, PesqScorer};
pub use snr::{
    frame_count, frame_offsets, global_snr, segmental_snr, SnrReport, MAX_ALLOWED_SNR,
    MIN_ALLOWED_SNR,
};
