//! End-to-end tests for the transcript-cleaner binary

use predicates::prelude::*;

use crate::helpers::Workspace;

// ============================================================================
// Help and Arguments
// ============================================================================

#[test]
fn help_lists_directory_flags() {
    let ws = Workspace::new();

    ws.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_flag_prints_package_version() {
    let ws = Workspace::new();

    ws.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let ws = Workspace::new();

    ws.command().arg("--bogus").assert().code(2);
}

// ============================================================================
// Batch Runs
// ============================================================================

#[test]
fn converts_export_into_two_views() {
    let ws = Workspace::new();
    ws.add_fixture("standup.raw", "standup.raw");

    ws.command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 1 transcript file(s) to process",
        ))
        .stdout(predicate::str::contains("Processing: standup.raw"))
        .stdout(predicate::str::contains(
            "✓ Created: standup_by_speaker.txt",
        ))
        .stdout(predicate::str::contains(
            "✓ Created: standup_chronological.txt",
        ))
        .stdout(predicate::str::contains(
            "Speakers found: Alice Moreau, Bob Lin",
        ))
        .stdout(predicate::str::contains("Successful: 1"))
        .stdout(predicate::str::contains("Failed: 0"));

    assert_eq!(
        ws.output_files(),
        vec!["standup_by_speaker.txt", "standup_chronological.txt"]
    );
}

#[test]
fn grouped_view_content() {
    let ws = Workspace::new();
    ws.add_fixture("standup.raw", "standup.raw");

    ws.command().assert().success();

    let text = ws.read_output("standup_by_speaker.txt");
    let body: Vec<&str> = text.lines().skip(4).collect();
    assert!(text.starts_with("TRANSCRIPT: standup.raw\nGenerated: "));
    assert_eq!(
        body,
        vec![
            "SPEAKER: Alice Moreau",
            "----------------------------------------",
            "1. Morning everyone, shall we start?",
            "2. Great!",
            "",
            "SPEAKER: Bob Lin",
            "----------------------------------------",
            "1. Sure & I'll go first.",
            "2. Yesterday I fixed the bug",
        ]
    );
}

#[test]
fn chronological_view_content() {
    let ws = Workspace::new();
    ws.add_fixture("standup.raw", "standup.raw");

    ws.command().assert().success();

    let text = ws.read_output("standup_chronological.txt");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "TRANSCRIPT (CHRONOLOGICAL): standup.raw");
    assert_eq!(lines[2], "=".repeat(80));
    assert_eq!(
        &lines[4..],
        &[
            "1. Alice Moreau: Morning everyone, shall we start?",
            "",
            "2. Bob Lin: Sure & I'll go first.",
            "",
            "3. Alice Moreau: Great!",
            "",
            "4. Bob Lin: Yesterday I fixed the bug",
        ]
    );
}

#[test]
fn generated_line_is_a_local_timestamp() {
    let ws = Workspace::new();
    ws.add_fixture("standup.raw", "standup.raw");

    ws.command().assert().success();

    let text = ws.read_output("standup_chronological.txt");
    let generated = text.lines().nth(1).unwrap();
    let stamp = generated.strip_prefix("Generated: ").unwrap();
    let parsed = chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S");
    assert!(parsed.is_ok());
}

#[test]
fn example_file_is_never_processed() {
    let ws = Workspace::new();
    ws.add_fixture("standup.raw", "example-meeting.raw");
    ws.add_fixture("standup.raw", "a-real-meeting.raw");
    ws.add_fixture("standup.raw", "zz-real-meeting.raw");

    ws.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 transcript file(s)"))
        .stdout(predicate::str::contains("example-meeting").not());

    assert_eq!(
        ws.output_files(),
        vec![
            "a-real-meeting_by_speaker.txt",
            "a-real-meeting_chronological.txt",
            "zz-real-meeting_by_speaker.txt",
            "zz-real-meeting_chronological.txt",
        ]
    );
}

#[test]
fn empty_input_directory_reports_none_found() {
    let ws = Workspace::new();
    std::fs::write(ws.input().join("notes.txt"), "not a transcript").unwrap();

    ws.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("No .raw files found in input"));

    assert!(ws.output_files().is_empty());
}

#[test]
fn missing_input_directory_reports_none_found() {
    let ws = Workspace::new();

    ws.command()
        .args(["--input", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No .raw files found in does-not-exist",
        ));
}

#[test]
fn output_directory_is_created() {
    let ws = Workspace::new();
    ws.add_fixture("standup.raw", "standup.raw");

    ws.command()
        .args(["-o", "nested/out"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Output files saved to: nested/out",
        ));

    let grouped = ws.path().join("nested/out/standup_by_speaker.txt");
    assert!(grouped.is_file());
}

#[test]
fn failures_are_counted_and_batch_continues() {
    let ws = Workspace::new();
    ws.add_fixture("malformed.raw", "a-malformed.raw");
    ws.add_fixture("blank_dialogue.raw", "b-blank.raw");
    std::fs::write(ws.input().join("c-binary.raw"), [0xff, 0xfe, 0xfd]).unwrap();
    ws.add_fixture("standup.raw", "d-good.raw");

    ws.command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: No transcript data found in a-malformed.raw",
        ))
        .stdout(predicate::str::contains(
            "Warning: No valid speakers found in b-blank.raw",
        ))
        .stdout(predicate::str::contains("✗ Error processing c-binary.raw"))
        .stdout(predicate::str::contains("Successful: 1"))
        .stdout(predicate::str::contains("Failed: 3"));

    assert_eq!(
        ws.output_files(),
        vec!["d-good_by_speaker.txt", "d-good_chronological.txt"]
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_file_sets_directories_and_naming() {
    let ws = Workspace::new();
    std::fs::create_dir(ws.path().join("exports")).unwrap();
    std::fs::write(
        ws.path().join("exports/call.html"),
        crate::helpers::load_fixture("standup.raw"),
    )
    .unwrap();
    ws.write_config(
        r#"
[paths]
input_dir = "exports"
output_dir = "text"

[batch]
extension = "html"
by_speaker_suffix = ".speakers.txt"
"#,
    );

    ws.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Created: call.speakers.txt"))
        .stdout(predicate::str::contains(
            "✓ Created: call_chronological.txt",
        ));

    assert!(ws.path().join("text/call.speakers.txt").is_file());
}

#[test]
fn flags_override_config_file() {
    let ws = Workspace::new();
    ws.add_fixture("standup.raw", "standup.raw");
    ws.write_config("[paths]\noutput_dir = \"from-config\"\n");

    ws.command()
        .args(["--output", "from-flag"])
        .assert()
        .success();

    assert!(ws.path().join("from-flag/standup_by_speaker.txt").is_file());
    assert!(!ws.path().join("from-config").exists());
}

#[test]
fn missing_config_file_is_fatal() {
    let ws = Workspace::new();
    std::fs::remove_file(ws.path().join("config.toml")).unwrap();

    ws.command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_file_is_fatal() {
    let ws = Workspace::new();
    ws.write_config("[batch]\nexclude = 7\n");

    ws.command()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}
