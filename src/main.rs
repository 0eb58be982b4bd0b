use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use optimize_images::{run, targets, EncodeSettings, PREFIX, TARGETS};

/// Write AVIF and WebP variants of the home page images
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
    Cli::parse();

    match optimize() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PREFIX} Failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn optimize() -> Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let dir = targets::image_dir(&cwd);
    run(
        &dir,
        &TARGETS,
        &EncodeSettings::default(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}
