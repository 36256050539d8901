//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TC_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TC_BUILD_DATE"), ")");

/// Clean and organize HTML meeting transcripts into readable text.
///
/// Every .raw export in the input directory is converted into two files:
/// <name>_by_speaker.txt and <name>_chronological.txt.
#[derive(Debug, Parser)]
#[command(name = "transcript-cleaner", version = VERSION, about, long_about)]
pub struct Cli {
    /// Input directory containing .raw files (default: input)
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Output directory for cleaned files (default: output)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Read settings from this TOML file instead of the user config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
