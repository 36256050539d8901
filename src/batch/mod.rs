//! Directory-level conversion of raw transcript exports.
//!
//! [`Batch`] finds the exports in the input directory and converts them one
//! at a time. Each file either yields a [`FileReport`] or a [`ProcessError`];
//! a failure never stops the remaining files.

mod error;
mod report;

pub use error::ProcessError;
pub use report::{BatchSummary, FileReport, WrittenFile};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{BatchConfig, Config};
use crate::extractor::extract_with_stats;
use crate::render::{render_chronological_at, render_groups_at};

/// Converts every eligible export found in one directory.
#[derive(Debug, Clone)]
pub struct Batch {
    input_dir: PathBuf,
    output_dir: PathBuf,
    settings: BatchConfig,
}

impl Batch {
    pub fn new(config: &Config) -> Self {
        Self {
            input_dir: config.paths.input_dir.clone(),
            output_dir: config.paths.output_dir.clone(),
            settings: config.batch.clone(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn extension(&self) -> &str {
        &self.settings.extension
    }

    /// Create the output directory if needed. Safe to call repeatedly.
    pub fn ensure_output_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.output_dir)
    }

    /// Eligible input files, sorted by name.
    ///
    /// A missing input directory yields an empty list.
    pub fn discover(&self) -> io::Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.input_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(dir = %self.input_dir.display(), "input directory does not exist");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && self.is_eligible(&path) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Whether a path has the export extension and is not excluded by name.
    pub fn is_eligible(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .is_some_and(|ext| ext == self.settings.extension.as_str());

        let excluded = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.settings.exclude.iter().any(|ex| ex == name));

        has_extension && !excluded
    }

    /// Output paths for an input file: `(by_speaker, chronological)`.
    pub fn output_paths(&self, input: &Path) -> (PathBuf, PathBuf) {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        (
            self.output_dir
                .join(format!("{}{}", stem, self.settings.by_speaker_suffix)),
            self.output_dir
                .join(format!("{}{}", stem, self.settings.chronological_suffix)),
        )
    }

    /// Convert every eligible export in the input directory.
    ///
    /// Creates the output directory, then hands each file's result to
    /// `on_file` as soon as that file is done. Per-file failures are counted
    /// and never stop the run; only setup I/O errors are returned.
    pub fn run(
        &self,
        on_file: impl FnMut(&Path, &Result<FileReport, ProcessError>),
    ) -> io::Result<BatchSummary> {
        self.ensure_output_dir()?;
        let files = self.discover()?;
        Ok(self.run_files(&files, on_file))
    }

    /// [`Batch::run`] over files that were already discovered.
    pub fn run_files(
        &self,
        files: &[PathBuf],
        mut on_file: impl FnMut(&Path, &Result<FileReport, ProcessError>),
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for path in files {
            let result = self.process_file(path);
            on_file(path, &result);
            summary.record(&result);
        }

        tracing::debug!(
            successful = summary.successful,
            failed = summary.failed,
            "batch finished"
        );
        summary
    }

    /// Convert one export and write both views.
    pub fn process_file(&self, path: &Path) -> Result<FileReport, ProcessError> {
        let name = display_name(path);

        let content = fs::read_to_string(path).map_err(|source| ProcessError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (transcript, stats) = extract_with_stats(&content);
        tracing::debug!(
            file = %name,
            segments = stats.segments,
            utterances = transcript.len(),
            "extracted transcript"
        );

        if transcript.is_empty() {
            return Err(ProcessError::NoTranscript { name });
        }

        let groups = transcript.group_by_speaker();
        if groups.is_empty() {
            return Err(ProcessError::NoSpeakers { name });
        }

        // Both views share one timestamp
        let generated = chrono::Local::now().naive_local();
        let by_speaker_text = render_groups_at(&groups, &name, generated);
        let chronological_text = render_chronological_at(&transcript, &name, generated);

        let (by_speaker_path, chronological_path) = self.output_paths(path);
        let by_speaker = write_output(by_speaker_path, &by_speaker_text)?;
        let chronological = write_output(chronological_path, &chronological_text)?;

        Ok(FileReport {
            source: path.to_path_buf(),
            by_speaker,
            chronological,
            speakers: groups.speakers().into_iter().map(String::from).collect(),
        })
    }
}

fn write_output(path: PathBuf, text: &str) -> Result<WrittenFile, ProcessError> {
    match fs::write(&path, text) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "wrote transcript view");
            Ok(WrittenFile {
                path,
                size_bytes: text.len(),
            })
        }
        Err(source) => Err(ProcessError::Write { path, source }),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
