// src/bin/snr.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use speechscore::{global_snr, load_aligned_pair, segmental_snr, MetricsConfig, SnrReport};

#[derive(Parser, Debug)]
#[command(name = "snr", version)]
#[command(about = "Calculate SNR and Segmental SNR of a degraded speech recording")]
struct Args {
    /// Original recording with clean speech
    #[arg(short, long)]
    original: PathBuf,

    /// Recording degraded by noise or processing
    #[arg(short, long)]
    degraded: PathBuf,

    /// Normalize DC bias to zero and scale dynamic ranges
    #[arg(short, long)]
    normalize: bool,

    /// Frame size in samples (0 = 20 ms at the input sample rate)
    #[arg(long, default_value_t = 0)]
    frame: usize,

    /// Frame overlap in percent (0 = 50%)
    #[arg(long, default_value_t = 0)]
    overlap: u32,

    /// Output scores as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MetricsConfig {
        normalize: args.normalize,
        frame_size: args.frame,
        overlap_percent: args.overlap,
    };

    let pair = load_aligned_pair(&args.original, &args.degraded, config.normalize)?;
    let layout = config.frame_layout(pair.sample_rate)?;

    let report = SnrReport {
        snr_db: global_snr(&pair.original, &pair.degraded),
        segmental_snr_db: segmental_snr(&pair.original, &pair.degraded, &layout)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("SNR: {}", report.snr_db);
        println!("Segmental SNR: {}", report.segmental_snr_db);
    }

    Ok(())
}
