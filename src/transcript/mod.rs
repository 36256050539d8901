//! Transcript data model.
//!
//! A [`Transcript`] is the ordered list of [`Utterance`]s pulled out of one
//! document. [`SpeakerGroups`] is the derived per-speaker view used by the
//! grouped renderer.

use crate::cleaner::clean;

/// One speaker turn: who spoke and the raw (uncleaned) dialogue text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub speaker: String,
    pub text: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    /// The dialogue text after cleaning.
    pub fn cleaned_text(&self) -> String {
        clean(&self.text)
    }
}

/// All utterances of one document, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    utterances: Vec<Utterance>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, utterance: Utterance) {
        self.utterances.push(utterance);
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Utterance> {
        self.utterances.iter()
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Group cleaned utterances by speaker.
    pub fn group_by_speaker(&self) -> SpeakerGroups {
        SpeakerGroups::from_transcript(self)
    }
}

impl FromIterator<Utterance> for Transcript {
    fn from_iter<I: IntoIterator<Item = Utterance>>(iter: I) -> Self {
        Self {
            utterances: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Utterance;
    type IntoIter = std::slice::Iter<'a, Utterance>;

    fn into_iter(self) -> Self::IntoIter {
        self.utterances.iter()
    }
}

/// A speaker and their cleaned lines, in the order they were spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerGroup {
    pub speaker: String,
    pub lines: Vec<String>,
}

/// Cleaned utterances grouped by speaker.
///
/// Speakers keep the order of their first appearance. Utterances that clean
/// to an empty string are dropped, so a speaker who only produced empty
/// utterances never gets a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerGroups {
    groups: Vec<SpeakerGroup>,
}

impl SpeakerGroups {
    pub fn from_transcript(transcript: &Transcript) -> Self {
        let mut groups: Vec<SpeakerGroup> = Vec::new();

        for utterance in transcript {
            let cleaned = utterance.cleaned_text();
            if cleaned.is_empty() {
                continue;
            }

            match groups.iter_mut().find(|g| g.speaker == utterance.speaker) {
                Some(group) => group.lines.push(cleaned),
                None => groups.push(SpeakerGroup {
                    speaker: utterance.speaker.clone(),
                    lines: vec![cleaned],
                }),
            }
        }

        Self { groups }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpeakerGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Speaker names in first-appearance order.
    pub fn speakers(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.speaker.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SpeakerGroups {
    type Item = &'a SpeakerGroup;
    type IntoIter = std::slice::Iter<'a, SpeakerGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
