//! Configuration for the metric pipeline
//!
//! A [`MetricsConfig`] carries the raw CLI knobs (zero meaning "pick a
//! default from the sample rate"); [`FrameLayout`] is the validated,
//! fully-resolved framing derived from it.

use log::debug;

use crate::error::MetricsError;

/// Raw scoring options as given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsConfig {
    /// Remove DC bias and match dynamic ranges before scoring
    pub normalize: bool,
    /// Frame size in samples; 0 selects a 20 ms frame at the input rate
    pub frame_size: usize,
    /// Frame overlap in percent; 0 selects 50%
    pub overlap_percent: u32,
}

impl MetricsConfig {
    /// Resolve defaults against the input sample rate and validate.
    pub fn frame_layout(&self, sample_rate: u32) -> Result<FrameLayout, MetricsError> {
        let frame_size = if self.frame_size == 0 {
            (2.0 * sample_rate as f64 / 100.0).floor() as usize
        } else {
            self.frame_size
        };

        if frame_size < 2 {
            return Err(MetricsError::InvalidFrameSize(frame_size));
        }

        let overlap_percent = if self.overlap_percent == 0 {
            50.0
        } else {
            self.overlap_percent as f64
        };

        let overlap_size = (frame_size as f64 * overlap_percent / 100.0).floor() as usize;
        if overlap_size >= frame_size {
            return Err(MetricsError::InvalidOverlap {
                overlap_percent: overlap_percent as u32,
                frame_size,
            });
        }

        let layout = FrameLayout {
            frame_size,
            overlap_size,
            step_size: frame_size - overlap_size,
        };
        debug!(
            "frame layout at {} Hz: frame={} overlap={} step={}",
            sample_rate, layout.frame_size, layout.overlap_size, layout.step_size
        );
        Ok(layout)
    }
}

/// Resolved framing: frame length, overlap, and the hop between frames.
/// Invariant: `step_size = frame_size - overlap_size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub frame_size: usize,
    pub overlap_size: usize,
    pub step_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(frame: usize, overlap: u32) -> MetricsConfig {
        MetricsConfig {
            normalize: false,
            frame_size: frame,
            overlap_percent: overlap,
        }
    }

    #[test]
    fn test_auto_frame_is_20ms() {
        let layout = config(0, 0).frame_layout(16000).unwrap();
        assert_eq!(layout.frame_size, 320);
        assert_eq!(layout.overlap_size, 160);
        assert_eq!(layout.step_size, 160);

        let layout = config(0, 0).frame_layout(8000).unwrap();
        assert_eq!(layout.frame_size, 160);
        assert_eq!(layout.step_size, 80);
    }

    #[test]
    fn test_explicit_frame_and_overlap() {
        let layout = config(400, 75).frame_layout(16000).unwrap();
        assert_eq!(layout.frame_size, 400);
        assert_eq!(layout.overlap_size, 300);
        assert_eq!(layout.step_size, 100);
    }

    #[test]
    fn test_overlap_floor() {
        // floor(333 * 50 / 100) = 166
        let layout = config(333, 50).frame_layout(16000).unwrap();
        assert_eq!(layout.overlap_size, 166);
        assert_eq!(layout.step_size, 167);
    }

    #[test]
    fn test_full_overlap_rejected() {
        let err = config(320, 100).frame_layout(16000).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidOverlap { .. }));
    }

    #[test]
    fn test_tiny_frame_rejected() {
        let err = config(1, 0).frame_layout(16000).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidFrameSize(1)));

        // auto frame at a nonsense sample rate resolves below the minimum
        let err = config(0, 0).frame_layout(50).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidFrameSize(_)));
    }
}
