// src/core/pesq.rs
//
// PESQ (ITU-T P.862) collaborator seam. The perceptual model itself is not
// implemented here; scoring is delegated to an external reference evaluator
// invoked over temporary WAV files. Anything implementing `PesqScorer` can
// stand in for it (tests use a canned scorer).

use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;
use uuid::Uuid;

use crate::error::MetricsError;

/// A perceptual-quality evaluator for an aligned original/degraded pair.
pub trait PesqScorer {
    fn score(
        &self,
        original: &[f32],
        degraded: &[f32],
        sample_rate: u32,
    ) -> Result<f64, MetricsError>;
}

/// Scores by shelling out to an ITU-T P.862 reference binary
/// (`pesq +<rate> <original.wav> <degraded.wav>`).
pub struct ExternalPesq {
    program: PathBuf,
}

impl ExternalPesq {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PesqScorer for ExternalPesq {
    fn score(
        &self,
        original: &[f32],
        degraded: &[f32],
        sample_rate: u32,
    ) -> Result<f64, MetricsError> {
        let tag = Uuid::new_v4();
        let dir = std::env::temp_dir();
        let original_path = dir.join(format!("speechscore-{}-orig.wav", tag));
        let degraded_path = dir.join(format!("speechscore-{}-deg.wav", tag));

        let result = (|| {
            write_wav(&original_path, original, sample_rate)?;
            write_wav(&degraded_path, degraded, sample_rate)?;
            self.run(sample_rate, &original_path, &degraded_path)
        })();

        // temp files are scratch; removal failure is not worth surfacing
        let _ = std::fs::remove_file(&original_path);
        let _ = std::fs::remove_file(&degraded_path);

        result
    }
}

impl ExternalPesq {
    fn run(
        &self,
        sample_rate: u32,
        original_path: &Path,
        degraded_path: &Path,
    ) -> Result<f64, MetricsError> {
        debug!(
            "running {} +{} {} {}",
            self.program.display(),
            sample_rate,
            original_path.display(),
            degraded_path.display()
        );

        let output = Command::new(&self.program)
            .arg(format!("+{}", sample_rate))
            .arg(original_path)
            .arg(degraded_path)
            .output()
            .map_err(|e| {
                MetricsError::Pesq(format!("failed to run {}: {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MetricsError::Pesq(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_prediction(&stdout).ok_or_else(|| {
            MetricsError::Pesq(format!(
                "no P.862 prediction found in output of {}",
                self.program.display()
            ))
        })
    }
}

/// Pull the MOS out of the evaluator's prediction line, e.g.
/// `P.862 Prediction (Raw MOS, MOS-LQO):  = 3.807   3.954`.
fn parse_prediction(stdout: &str) -> Option<f64> {
    stdout
        .lines()
        .rev()
        .find(|line| line.contains("Prediction"))
        .and_then(|line| line.rsplit('=').next())
        .and_then(|values| values.split_whitespace().next())
        .and_then(|token| token.parse().ok())
}

/// Write mono 16-bit PCM for the reference evaluator.
fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), MetricsError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| MetricsError::Pesq(format!("failed to create {}: {}", path.display(), e)))?;
    for &s in samples {
        let v = (s.clamp(-1.0, 1.0) * 32767.0) as i16;
        writer
            .write_sample(v)
            .map_err(|e| MetricsError::Pesq(format!("failed to write {}: {}", path.display(), e)))?;
    }
    writer
        .finalize()
        .map_err(|e| MetricsError::Pesq(format!("failed to finalize {}: {}", path.display(), e)))
}
