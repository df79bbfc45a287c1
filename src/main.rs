//! new-model-detector - find the model added by a pull request
//!
//! Compares the current head with its merge base on the mainline branch,
//! lists the Python files that were added and prints the `models/<name>`
//! directory of the first new modeling file.

mod cli;
mod config;
mod detector;
mod error;
mod export;
mod git;
mod model;

use clap::Parser;
use cli::Cli;
use export::{create_exporter, get_output_writer};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 1: Detection ===
    let report = match detector::detect(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 2: Export Results ===
    let exporter = create_exporter(config.output_format);
    let mut writer = match get_output_writer(&config.output_filename) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error creating output: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = exporter.export(&report, &config, &mut *writer) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::from(2);
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error flushing output: {}", e);
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}
