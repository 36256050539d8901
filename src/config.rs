//! Configuration file handling.
//!
//! Settings live in `<config dir>/transcript-cleaner/config.toml` unless a path
//! is given explicitly. Every field has a default, so an empty or partial file
//! is valid:
//!
//! ```toml
//! [paths]
//! input_dir = "input"
//! output_dir = "output"
//!
//! [batch]
//! extension = "raw"
//! exclude = ["example-meeting.raw"]
//! by_speaker_suffix = "_by_speaker.txt"
//! chronological_suffix = "_chronological.txt"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR: &str = "transcript-cleaner";
const CONFIG_FILE: &str = "config.toml";

/// Errors loading or locating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine the user config directory")]
    NoConfigDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub batch: BatchConfig,
}

/// Where transcripts are read from and written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Which files a batch picks up and how outputs are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Extension of raw transcript exports, without the dot.
    pub extension: String,
    /// Exact file names that are never processed.
    pub exclude: Vec<String>,
    pub by_speaker_suffix: String,
    pub chronological_suffix: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extension: "raw".to_string(),
            exclude: vec!["example-meeting.raw".to_string()],
            by_speaker_suffix: "_by_speaker.txt".to_string(),
            chronological_suffix: "_chronological.txt".to_string(),
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults if there is
    /// no config file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            Ok(_) | Err(ConfigError::NoConfigDir) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML content.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply command-line overrides on top of file settings.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.paths.input_dir = input;
        }
        if let Some(output) = output {
            self.paths.output_dir = output;
        }
        self
    }
}
