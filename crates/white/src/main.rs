//! White CLI - directive-to-HTML compiler.
//!
//! Discovers `.white` source files at the given path (a single file or a
//! directory) and writes a compiled `.html` page next to each one.

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use output::Output;

/// White - directive language compiler.
#[derive(Parser)]
#[command(name = "white", version, about)]
struct Cli {
    /// A .white file, or a directory to scan for .white files.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Enable verbose output (per-file timing and discovery logs).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = commands::build(&cli.path, &output) {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
