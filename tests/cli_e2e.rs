//! End-to-end CLI tests for chatlens.
//!
//! These tests verify the complete CLI workflow by running the actual
//! binary with various arguments and checking the output.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with transcript fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "\
[1/2/24, 9:15:00 AM] Messages and calls are end-to-end encrypted.
[1/2/24, 10:05:00 AM] Alice: Good morning everyone!
[1/2/24, 10:06:00 AM] Bob: morning! see https://example.com
[1/2/24, 10:07:00 AM] Alice: image omitted
[1/2/24, 12:30:00 PM] Bob: lunch was amazing 😂
[2/2/24, 11:45:00 PM] Alice: late night message
";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    fs::write(dir.path().join("not_a_chat.txt"), "just some notes\nno timestamps\n").unwrap();

    fs::write(dir.path().join("stopwords.txt"), "morning\nlate\n").unwrap();

    dir
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").expect("binary built")
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_text_report_to_stdout() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 6 messages"))
        .stdout(predicate::str::contains("Top Statistics"))
        .stdout(predicate::str::contains("Messages: 6"))
        .stdout(predicate::str::contains("Media:    1"))
        .stdout(predicate::str::contains("Links:    1"))
        .stdout(predicate::str::contains("Busiest Senders"))
        .stdout(predicate::str::contains("Sentiment"));
}

#[test]
fn test_user_filter() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--user", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Statistics — Bob"))
        .stdout(predicate::str::contains("Messages: 2"));
}

#[test]
fn test_list_senders() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .arg("--list-senders")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("system_notification").not());
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_json_report_to_file() {
    let dir = setup_fixtures();
    let out = dir.path().join("report.json");

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--format", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved"));

    let content = fs::read_to_string(&out).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(report["filter"], "Overall");
    assert_eq!(report["stats"]["messages"], 6);
    assert_eq!(report["stats"]["media"], 1);
    assert!(report["heatmap"]["columns"].as_array().unwrap().len() >= 3);
}

#[test]
fn test_json_report_to_stdout_is_parseable() {
    let dir = setup_fixtures();

    let output = chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    // The JSON body starts after the progress lines
    let json_start = stdout.find('{').expect("JSON object in output");
    let report: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(report["stats"]["messages"], 6);
}

// ============================================================================
// Stop words
// ============================================================================

#[test]
fn test_custom_stopword_file() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--format", "json"])
        .arg("--stopwords")
        .arg(dir.path().join("stopwords.txt"))
        .assert()
        .success()
        // "morning" is stopped out of the word table
        .stdout(predicate::str::contains("\"word\": \"morning\"").not());
}

#[test]
fn test_missing_stopword_file_is_not_an_error() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .arg("--stopwords")
        .arg(dir.path().join("does_not_exist.txt"))
        .assert()
        .success();
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_unparseable_transcript_fails_clearly() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("not_a_chat.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("not a supported"));
}

#[test]
fn test_missing_input_file_fails() {
    chatlens()
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_bad_format_value_rejected() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--format", "yaml"])
        .assert()
        .failure();
}
