//! # hookci CLI entry point
//!
//! Parses the file list and hands it to the validation loop. Kept to
//! argument parsing and logging setup; everything with behavior lives in
//! the library so tests can drive it directly.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Validate hook-configuration files, including their `ci:` options block.
#[derive(Parser, Debug)]
#[command(name = "hookci", version, about)]
struct Cli {
    /// Configuration files to validate.
    #[arg(value_name = "FILENAMES")]
    filenames: Vec<PathBuf>,
}

fn main() -> ExitCode {
    // Validation traces go to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    ExitCode::from(hookci_cli::run(&cli.filenames))
}
