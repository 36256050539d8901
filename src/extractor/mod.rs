//! Speaker turn extraction from raw transcript markup.
//!
//! The export is not parsed as HTML. Three patterns (see [`patterns`]) pick out
//! turns, speaker labels and dialogue leaves. Anything that does not fit them
//! is skipped without error.

mod patterns;

use crate::transcript::{Transcript, Utterance};
use patterns::{FRAGMENT, SEGMENT, SPEAKER};

/// Counters collected while scanning one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// `data-index` paragraphs seen.
    pub segments: usize,
    /// Paragraphs with no speaker label.
    pub without_speaker: usize,
    /// Paragraphs with a speaker label but no dialogue leaves.
    pub without_dialogue: usize,
}

impl ExtractionStats {
    /// Paragraphs that produced an utterance.
    pub fn extracted(&self) -> usize {
        self.segments - self.without_speaker - self.without_dialogue
    }
}

/// Extract the ordered speaker turns from a document.
pub fn extract(document: &str) -> Transcript {
    extract_with_stats(document).0
}

/// Like [`extract`], also returning how many paragraphs were skipped and why.
pub fn extract_with_stats(document: &str) -> (Transcript, ExtractionStats) {
    let mut transcript = Transcript::new();
    let mut stats = ExtractionStats::default();

    for segment in SEGMENT.captures_iter(document) {
        stats.segments += 1;
        let body = segment.get(1).map_or("", |m| m.as_str());

        let Some(speaker) = find_speaker(body) else {
            stats.without_speaker += 1;
            continue;
        };

        let fragments: Vec<&str> = FRAGMENT
            .captures_iter(body)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();

        if fragments.is_empty() {
            tracing::debug!(speaker, "segment has a speaker but no dialogue");
            stats.without_dialogue += 1;
            continue;
        }

        transcript.push(Utterance::new(speaker, fragments.join(" ")));
    }

    tracing::debug!(
        segments = stats.segments,
        extracted = stats.extracted(),
        without_speaker = stats.without_speaker,
        without_dialogue = stats.without_dialogue,
        "extraction finished"
    );

    (transcript, stats)
}

fn find_speaker(segment: &str) -> Option<&str> {
    SPEAKER
        .captures(segment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}
