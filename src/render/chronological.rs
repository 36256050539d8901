//! Chronological view.

use chrono::NaiveDateTime;

use super::{header_lines, now, View};
use crate::transcript::Transcript;

/// Render the running conversation, stamped with the current local time.
pub fn render_chronological(transcript: &Transcript, doc_name: &str) -> String {
    render_chronological_at(transcript, doc_name, now())
}

/// Render the running conversation with an explicit generation time.
///
/// Utterances that clean to nothing are skipped and do not take a number.
pub fn render_chronological_at(
    transcript: &Transcript,
    doc_name: &str,
    generated: NaiveDateTime,
) -> String {
    let mut lines = header_lines(View::Chronological, doc_name, generated);

    let entries = transcript
        .iter()
        .map(|u| (u.speaker.as_str(), u.cleaned_text()))
        .filter(|(_, text)| !text.is_empty());

    for (index, (speaker, text)) in (1..).zip(entries) {
        lines.push(format!("{}. {}: {}", index, speaker, text));
        lines.push(String::new());
    }

    lines.join("\n")
}
