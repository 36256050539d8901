//! Grouped-by-speaker view.

use chrono::NaiveDateTime;

use super::{header_lines, now, View, SPEAKER_RULE_WIDTH};
use crate::transcript::{SpeakerGroups, Transcript};

/// Render the grouped view, stamped with the current local time.
pub fn render_by_speaker(transcript: &Transcript, doc_name: &str) -> String {
    render_by_speaker_at(transcript, doc_name, now())
}

/// Render the grouped view with an explicit generation time.
pub fn render_by_speaker_at(
    transcript: &Transcript,
    doc_name: &str,
    generated: NaiveDateTime,
) -> String {
    render_groups_at(&transcript.group_by_speaker(), doc_name, generated)
}

/// Render already-built speaker groups.
pub fn render_groups_at(
    groups: &SpeakerGroups,
    doc_name: &str,
    generated: NaiveDateTime,
) -> String {
    let mut lines = header_lines(View::BySpeaker, doc_name, generated);

    for group in groups {
        lines.push(format!("SPEAKER: {}", group.speaker));
        lines.push("-".repeat(SPEAKER_RULE_WIDTH));
        for (i, line) in group.lines.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, line));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
