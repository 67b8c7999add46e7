// src/bin/pesq.rs
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use speechscore::{load_aligned_pair, ExternalPesq, PesqScorer};

#[derive(Parser, Debug)]
#[command(name = "pesq", version)]
#[command(about = "Calculate PESQ (ITU-T P.862) of a degraded speech recording")]
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

    /// ITU-T P.862 reference evaluator executable
    #[arg(long, env = "PESQ_BIN", default_value = "pesq")]
    pesq_bin: PathBuf,

    /// Output score as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct PesqReport {
    pesq: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pair = load_aligned_pair(&args.original, &args.degraded, args.normalize)?;

    let scorer = ExternalPesq::new(&args.pesq_bin);
    let score = scorer.score(&pair.original, &pair.degraded, pair.sample_rate)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&PesqReport { pesq: score })?);
    } else {
        println!("PESQ: {}", score);
    }

    Ok(())
}
