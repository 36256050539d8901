use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use transcript_cleaner::cli::Cli;

mod commands;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "transcript_cleaner=warn";

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    commands::process::handle(cli)
}

/// Diagnostics go to stderr so they never mix with the progress report.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
