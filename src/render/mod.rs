//! Plain-text views of a transcript.
//!
//! Both views start with the same header:
//!
//! ```text
//! TRANSCRIPT: meeting.raw
//! Generated: 2024-03-01 14:05:09
//! ================================================================================
//!
//! ```
//!
//! followed by either the per-speaker body ([`render_by_speaker`]) or the
//! running conversation ([`render_chronological`]). Lines are joined with
//! `\n` and there is no trailing newline.

mod by_speaker;
mod chronological;

pub use by_speaker::{render_by_speaker, render_by_speaker_at, render_groups_at};
pub use chronological::{render_chronological, render_chronological_at};

use chrono::NaiveDateTime;

/// Width of the `=` rule under the header.
pub const HEADER_RULE_WIDTH: usize = 80;

/// Width of the `-` rule under each speaker heading.
pub const SPEAKER_RULE_WIDTH: usize = 40;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which header title to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    BySpeaker,
    Chronological,
}

impl View {
    fn title(self) -> &'static str {
        match self {
            View::BySpeaker => "TRANSCRIPT",
            View::Chronological => "TRANSCRIPT (CHRONOLOGICAL)",
        }
    }
}

fn header_lines(view: View, doc_name: &str, generated: NaiveDateTime) -> Vec<String> {
    vec![
        format!("{}: {}", view.title(), doc_name),
        format!("Generated: {}", generated.format(TIMESTAMP_FORMAT)),
        "=".repeat(HEADER_RULE_WIDTH),
        String::new(),
    ]
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
