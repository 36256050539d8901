//! Per-file processing errors.

use std::path::PathBuf;

/// Why a single transcript could not be converted.
///
/// None of these abort a batch; the file is counted as failed and the run
/// moves on.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("No transcript data found in {name}")]
    NoTranscript { name: String },

    #[error("No valid speakers found in {name}")]
    NoSpeakers { name: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Whether the input was readable but held nothing usable.
    ///
    /// These are reported as warnings rather than errors.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::NoTranscript { .. } | Self::NoSpeakers { .. })
    }
}
