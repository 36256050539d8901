//! transcript-cleaner - readable text from HTML meeting transcript exports.
//!
//! The library pulls speaker turns out of a raw export ([`extract`]), tidies
//! each line ([`clean`]) and renders two views: grouped by speaker and
//! chronological. [`Batch`] runs that over a directory.
//!
//! ```
//! use transcript_cleaner::{extract, render_chronological};
//!
//! let html = r#"<p data-index="0"><span data-speaker="true"><span>Alice</span></span><span data-clipped="0" data-speaker="false">Hi</span><span data-clipped="0" data-speaker="false">all .</span></p>"#;
//!
//! let transcript = extract(html);
//! let text = render_chronological(&transcript, "standup.raw");
//! assert!(text.contains("1. Alice: Hi all."));
//! ```

pub mod batch;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod console;
pub mod extractor;
pub mod render;
pub mod transcript;

pub use batch::{Batch, BatchSummary, FileReport, ProcessError};
pub use cleaner::clean;
pub use config::Config;
pub use extractor::{extract, extract_with_stats, ExtractionStats};
pub use render::{render_by_speaker, render_chronological};
pub use transcript::{SpeakerGroup, SpeakerGroups, Transcript, Utterance};
