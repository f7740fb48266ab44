// src/main.rs

use anyhow::Result;
use clap::Parser;
use sln2slnx::convert;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "sln2slnx")]
#[command(author, version, about = "Convert Visual Studio .sln files to the XML-based .slnx format", long_about = None)]
struct Cli {
    /// Solution files or directories to convert (directories are searched
    /// recursively for .sln files)
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so the success output stream stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let targets = convert::collect_targets(&cli.paths);
    if targets.is_empty() {
        println!("No solution files found");
        return Ok(());
    }
    info!("found {} solution file(s)", targets.len());

    let summary = convert::convert_all(&targets);

    println!(
        "Converted {} of {} solution file(s)",
        summary.converted,
        targets.len()
    );
    if summary.tarnished > 0 {
        println!(
            "{} input(s) had formatting issues; output is best-effort",
            summary.tarnished
        );
    }
    if summary.converted == 0 {
        anyhow::bail!("all {} conversion(s) failed", summary.failed);
    }

    Ok(())
}
