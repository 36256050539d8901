//! Library-level tests against real export fixtures

use transcript_cleaner::{extract, extract_with_stats, render_by_speaker, Utterance};

use crate::helpers::load_fixture;

#[test]
fn standup_fixture_turns_in_order() {
    let transcript = extract(&load_fixture("standup.raw"));

    let speakers: Vec<&str> = transcript.iter().map(|u| u.speaker.as_str()).collect();
    assert_eq!(
        speakers,
        vec![
            "Alice Moreau",
            "Bob Lin",
            "Alice Moreau",
            "Bob Lin",
            "Bob Lin",
        ]
    );
    assert_eq!(
        transcript.utterances()[1],
        Utterance::new("Bob Lin", "Sure &amp; I&#39;ll go first .")
    );
}

#[test]
fn standup_fixture_stats() {
    let (_, stats) = extract_with_stats(&load_fixture("standup.raw"));

    assert_eq!(stats.segments, 6);
    assert_eq!(stats.without_speaker, 1);
    assert_eq!(stats.without_dialogue, 0);
    assert_eq!(stats.extracted(), 5);
}

#[test]
fn malformed_fixture_yields_nothing() {
    let (transcript, stats) = extract_with_stats(&load_fixture("malformed.raw"));

    assert!(transcript.is_empty());
    // Only the first paragraph is a complete data-index segment
    assert_eq!(stats.segments, 1);
    assert_eq!(stats.without_dialogue, 1);
}

#[test]
fn blank_dialogue_is_extracted_but_not_grouped() {
    let transcript = extract(&load_fixture("blank_dialogue.raw"));

    assert_eq!(transcript.len(), 2);
    assert!(transcript.group_by_speaker().is_empty());
}

#[test]
fn smoke_single_segment() {
    let html = concat!(
        r#"<p data-index="0"><span data-speaker="true"><span>Alice</span></span>"#,
        r#"<span data-clipped="0" data-speaker="false">Hel</span>"#,
        r#"<span data-clipped="0" data-speaker="false">lo</span>"#,
        r#"<span data-clipped="0" data-speaker="false">world</span></p>"#,
    );

    let transcript = extract(html);
    assert_eq!(
        transcript.utterances(),
        &[Utterance::new("Alice", "Hel lo world")]
    );
    assert_eq!(transcript.utterances()[0].cleaned_text(), "Hel lo world");

    let grouped = render_by_speaker(&transcript, "smoke.raw");
    let lines: Vec<&str> = grouped.lines().collect();
    let at = lines.iter().position(|l| *l == "SPEAKER: Alice").unwrap();
    assert_eq!(lines[at + 2], "1. Hel lo world");
}
