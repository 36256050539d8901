//! Individual cleaning steps.
//!
//! Each step is a pure `&str -> String` function. [`super::clean`] runs them
//! in the order they are listed here.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,!?;:])").expect("Invalid punctuation regex"));

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

static CHAR_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]+;?|#[xX][0-9a-fA-F]+;?|[^\t\n\f <&#;]{1,32};?)")
        .expect("Invalid character reference regex")
});

/// Named references that still decode without a trailing `;`.
const LEGACY_ENTITIES: &str = "\
    AElig AMP Aacute Acirc Agrave Aring Atilde Auml COPY Ccedil ETH Eacute Ecirc \
    Egrave Euml GT Iacute Icirc Igrave Iuml LT Ntilde Oacute Ocirc Ograve Oslash \
    Otilde Ouml QUOT REG THORN Uacute Ucirc Ugrave Uuml Yacute aacute acirc acute \
    aelig agrave amp aring atilde auml brvbar ccedil cedil cent copy curren deg \
    divide eacute ecirc egrave eth euml frac12 frac14 frac34 gt iacute icirc iexcl \
    igrave iquest iuml laquo lt macr micro middot nbsp not ntilde oacute ocirc \
    ograve ordf ordm oslash otilde ouml para plusmn pound quot raquo reg sect shy \
    sup1 sup2 sup3 szlig thorn times uacute ucirc ugrave uml uuml yacute yen yuml";

/// Decode HTML character references (`&amp;`, `&#39;`, `&#x2014;`).
///
/// Follows the HTML5 parsing rules for sloppy input: the trailing `;` is
/// optional for numeric references and for the legacy named set (`&amp`,
/// `&nbsp`, `&copy`, ...), which also match as a prefix (`AT&ampT` is
/// `AT&T`). Numeric references to NUL, surrogates or past U+10FFFF become
/// U+FFFD and `&#128;`..`&#159;` are read as Windows-1252. Unknown names are
/// left as written.
pub fn decode_entities(text: &str) -> String {
    CHAR_REF
        .replace_all(text, |caps: &Captures| decode_reference(&caps[1]))
        .into_owned()
}

fn decode_reference(reference: &str) -> String {
    match reference.strip_prefix('#') {
        Some(number) => decode_numeric(number.trim_end_matches(';')),
        None => decode_named(reference),
    }
}

fn decode_numeric(number: &str) -> String {
    let parsed = match number.strip_prefix(&['x', 'X'][..]) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => number.parse(),
    };
    // Too many digits for a u32 is out of range all the same
    let code = parsed.unwrap_or(u32::MAX);

    match code {
        0x0D => "\r".to_string(),
        0x80..=0x9F => windows_1252(code).to_string(),
        0 | 0xD800..=0xDFFF | 0x11_0000..=u32::MAX => char::REPLACEMENT_CHARACTER.to_string(),
        _ if is_discarded(code) => String::new(),
        _ => char::from_u32(code).map(String::from).unwrap_or_default(),
    }
}

/// Control characters and noncharacters, which decode to nothing.
fn is_discarded(code: u32) -> bool {
    match code {
        0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF => true,
        _ => (code & 0xFFFE) == 0xFFFE,
    }
}

fn windows_1252(code: u32) -> char {
    let mapped = match code {
        0x80 => 0x20AC,
        0x82 => 0x201A,
        0x83 => 0x0192,
        0x84 => 0x201E,
        0x85 => 0x2026,
        0x86 => 0x2020,
        0x87 => 0x2021,
        0x88 => 0x02C6,
        0x89 => 0x2030,
        0x8A => 0x0160,
        0x8B => 0x2039,
        0x8C => 0x0152,
        0x8E => 0x017D,
        0x91 => 0x2018,
        0x92 => 0x2019,
        0x93 => 0x201C,
        0x94 => 0x201D,
        0x95 => 0x2022,
        0x96 => 0x2013,
        0x97 => 0x2014,
        0x98 => 0x02DC,
        0x99 => 0x2122,
        0x9A => 0x0161,
        0x9B => 0x203A,
        0x9C => 0x0153,
        0x9E => 0x017E,
        0x9F => 0x0178,
        // Unassigned in Windows-1252
        other => other,
    };
    char::from_u32(mapped).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn decode_named(name: &str) -> String {
    let bare = name.trim_end_matches(';');
    if name.ends_with(';') {
        if let Some(decoded) = named_entity(bare) {
            return decoded;
        }
    }

    // Longest legacy name the reference starts with
    for end in (2..=bare.len()).rev() {
        if let Some(decoded) = bare.get(..end).and_then(legacy_entity) {
            return format!("{decoded}{}", &name[end..]);
        }
    }
    format!("&{name}")
}

fn legacy_entity(name: &str) -> Option<String> {
    let mut legacy = LEGACY_ENTITIES.split_whitespace();
    if !legacy.any(|known| known == name) {
        return None;
    }
    named_entity(name)
}

/// Look `&name;` up in the HTML5 entity table.
fn named_entity(name: &str) -> Option<String> {
    let reference = format!("&{name};");
    let decoded = html_escape::decode_html_entities(&reference);
    (decoded != reference.as_str()).then(|| decoded.into_owned())
}

/// Collapse every run of whitespace, newlines and tabs included, into one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Drop whitespace sitting directly in front of `. , ! ? ; :`.
pub fn tighten_punctuation(text: &str) -> String {
    SPACE_BEFORE_PUNCT.replace_all(text, "$1").into_owned()
}

/// Remove anything that still looks like a markup tag.
pub fn strip_tags(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// True if `text` contains something [`strip_tags`] would remove.
pub fn has_tag(text: &str) -> bool {
    MARKUP_TAG.is_match(text)
}
