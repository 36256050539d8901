//! Utterance text cleaning.
//!
//! Raw dialogue pulled out of the markup still carries character entities,
//! line breaks from the export and the odd space in front of punctuation.
//! [`clean`] turns it into a single tidy line.
//!
//! One pass runs these steps in order:
//! 1. [`decode_entities`]
//! 2. [`collapse_whitespace`]
//! 3. [`tighten_punctuation`]
//! 4. [`strip_tags`]
//! 5. trim
//!
//! A single pass is not always a fixed point: `&amp;lt;b&amp;gt;` only becomes
//! a strippable tag after the second decode, and removing a tag can leave a
//! space in front of punctuation (`a <i>.`). `clean` therefore repeats the
//! pass until the text stops changing, which makes it idempotent.

mod steps;

pub use steps::{collapse_whitespace, decode_entities, has_tag, strip_tags, tighten_punctuation};

/// Clean one utterance.
pub fn clean(raw: &str) -> String {
    let mut current = clean_once(raw);

    // Every pass either shortens the text (in chars) or only rewrites
    // whitespace to plain spaces, so this reaches a fixed point.
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One pass of the cleaning steps.
pub fn clean_once(raw: &str) -> String {
    let text = decode_entities(raw);
    let text = collapse_whitespace(&text);
    let text = tighten_punctuation(&text);
    let text = strip_tags(&text);
    text.trim().to_string()
}
