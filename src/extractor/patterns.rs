//! Markup patterns for the transcript export format.
//!
//! The export writes one `<p data-index="N">` per speaker turn. Inside it the
//! speaker label is a `data-speaker="true"` span wrapping a bare `<span>` with
//! the name, and every spoken word is its own
//! `<span data-clipped="..." data-speaker="false">` leaf:
//!
//! ```html
//! <p data-index="0" class="turn">
//!   <span data-speaker="true" class="label"><span>Alice</span></span>
//!   <span data-clipped="0" data-speaker="false">Hello</span>
//!   <span data-clipped="0" data-speaker="false">there</span>
//! </p>
//! ```
//!
//! These are matched textually. Attribute order matters (`data-clipped`
//! must come before `data-speaker`), the segment ends at the first `</p>`,
//! and leaves containing nested markup do not match.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `<p>` carrying `data-index`; group 1 is the body up to the first `</p>`.
pub(super) static SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<p[^>]*data-index="[^"]*"[^>]*>(.*?)</p>"#).expect("Invalid segment regex")
});

/// The speaker label; group 1 is the name in the first bare `<span>` after it.
pub(super) static SPEAKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<span[^>]*data-speaker="true"[^>]*>.*?<span>([^<]+)</span>"#)
        .expect("Invalid speaker regex")
});

/// One clipped dialogue leaf; group 1 is its text.
pub(super) static FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span[^>]*data-clipped="[^"]*"[^>]*data-speaker="false"[^>]*>([^<]+)</span>"#)
        .expect("Invalid fragment regex")
});
