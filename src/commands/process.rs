//! Batch conversion handler

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use transcript_cleaner::cli::Cli;
use transcript_cleaner::console::Palette;
use transcript_cleaner::{Batch, Config, FileReport, ProcessError};

const RULE_WIDTH: usize = 60;

/// Convert every export in the input directory and print a report.
///
/// Per-file failures are reported and counted; only setup problems
/// (bad config, output directory, unreadable input directory) return `Err`.
pub fn handle(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.input, cli.output);

    let palette = Palette::detect();
    let batch = Batch::new(&config);

    batch.ensure_output_dir().with_context(|| {
        format!(
            "Failed to create output directory {}",
            batch.output_dir().display()
        )
    })?;

    let files = batch.discover().with_context(|| {
        format!(
            "Failed to read input directory {}",
            batch.input_dir().display()
        )
    })?;

    if files.is_empty() {
        println!(
            "No .{} files found in {} (excluding example files)",
            batch.extension(),
            batch.input_dir().display()
        );
        return Ok(());
    }

    println!(
        "Found {} transcript file(s) to process (excluding example files)",
        files.len()
    );
    println!("Input directory: {}", batch.input_dir().display());
    println!("Output directory: {}", batch.output_dir().display());
    println!("{}", "-".repeat(RULE_WIDTH));

    let summary = batch.run_files(&files, |path, result| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        println!("Processing: {}", name);
        match result {
            Ok(report) => print_success(report, &palette),
            Err(err) => print_failure(&name, err, &palette),
        }
        println!();
    });

    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Processing complete!");
    let successful = format!("Successful: {}", summary.successful);
    println!("{}", palette.success_text(&successful));
    let failed = format!("Failed: {}", summary.failed);
    if summary.failed > 0 {
        println!("{}", palette.error_text(&failed));
    } else {
        println!("{}", failed);
    }
    println!("Output files saved to: {}", batch.output_dir().display());

    Ok(())
}

fn print_success(report: &FileReport, palette: &Palette) {
    for file in [&report.by_speaker, &report.chronological] {
        println!(
            "  {} {}",
            palette.success_text(&format!("✓ Created: {}", file.name())),
            palette.secondary_text(&format!("({})", format_size(file.size_bytes, DECIMAL)))
        );
    }
    println!("  Speakers found: {}", report.speakers.join(", "));
}

fn print_failure(name: &str, err: &ProcessError, palette: &Palette) {
    if err.is_empty_input() {
        tracing::debug!(file = name, "{}", err);
        println!("  {}", palette.warning_text(&format!("Warning: {}", err)));
    } else {
        tracing::warn!(file = name, error = %err, "failed to process transcript");
        println!(
            "  {}",
            palette.error_text(&format!("✗ Error processing {}: {}", name, err))
        );
    }
}
