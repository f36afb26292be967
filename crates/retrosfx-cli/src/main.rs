//! retrosfx - renders the retro arcade notification sounds to MP3.
//!
//! Takes no arguments. All seven sounds are written to the `sounds`
//! directory next to the executable.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use retrosfx_cli::{default_output_dir, run_batch, BatchConfig, BatchEvent};
use retrosfx_encoder::FfmpegEncoder;

/// retrosfx - Retro Arcade Sound Effect Generator
#[derive(Parser)]
#[command(name = "retrosfx")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn run() -> anyhow::Result<()> {
    let config = BatchConfig::new(default_output_dir()?, rand::random::<u32>());
    let encoder = FfmpegEncoder::new();

    println!(
        "{} {}",
        "Output directory:".blue().bold(),
        config.output_dir.display()
    );
    println!("{} {}", "Seed:".blue().bold(), config.seed);
    println!();

    run_batch(&config, &encoder, |event| match event {
        BatchEvent::Started {
            file_name,
            description,
            ..
        } => {
            println!("Generating {}... {}", file_name, description.dimmed());
        }
        BatchEvent::Saved(asset) => {
            println!(
                "  {} {} ({:.0}ms, {:.1} dBFS)",
                "Saved:".green(),
                asset.path.display(),
                asset.duration_ms,
                asset.dbfs
            );
        }
    })?;

    println!();
    println!("{}", "All sounds generated!".green().bold());
    Ok(())
}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
