//! Command-line converter for Amiibo dumps
//!
//! Usage: amiibo-nfc [--input <DIR>] [--output <DIR>]
//!
//! Every `.bin` dump under the input directory is converted into a `.nfc`
//! file at the same relative path under the output directory. Set
//! `RUST_LOG=debug` for per-file details.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use amiibo_nfc::batch::{self, BatchConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

/// Convert Amiibo NTAG215 dumps into Flipper Zero .nfc files
#[derive(Parser, Debug)]
#[command(name = "amiibo-nfc", version)]
struct Args {
    /// Directory searched recursively for .bin dumps
    #[arg(short, long, env = "AMIIBO_NFC_INPUT", default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Directory receiving the converted .nfc files
    #[arg(short, long, env = "AMIIBO_NFC_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = BatchConfig::new(args.input, args.output);
    info!("Converting {:?} -> {:?}", config.input_dir, config.output_dir);

    let report = batch::run(&config).context("cannot scan input directory")?;

    if !report.is_success() {
        error!("{} dump(s) could not be converted:", report.failed.len());
        for (path, _) in &report.failed {
            error!("  {:?}", path);
        }
        process::exit(1);
    }

    Ok(())
}
