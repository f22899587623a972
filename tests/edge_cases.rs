//! Edge case tests for chatlens.
//!
//! These tests cover boundary conditions of the parsing pipeline that might
//! not be covered by regular unit and integration tests.

use chatlens::prelude::*;

fn parse(raw: &str) -> RecordSet {
    TranscriptParser::new().parse_str(raw).unwrap()
}

// =========================================================================
// Unicode and invisible characters
// =========================================================================

#[test]
fn test_directional_marks_everywhere() {
    let raw = "[1/2/24, 10:05:00 AM] \u{200E}Ali\u{200F}ce\u{200E}: \u{200E}he\u{200F}llo\u{200E}";
    let records = parse(raw);
    let rec = &records.records()[0];
    assert_eq!(rec.sender, Sender::User("Alice".into()));
    assert_eq!(rec.body, "hello");
}

#[test]
fn test_narrow_no_break_space_and_regular_space_mix() {
    let raw = "[1/2/24, 10:05:00\u{202F}AM] Alice: one\n[1/2/24, 10:06:00 AM] Alice: two";
    let records = parse(raw);
    assert_eq!(records.len(), 2);
    assert_eq!(records.records()[0].features.hour, 10);
    assert_eq!(records.records()[1].features.hour, 10);
}

#[test]
fn test_unicode_senders_and_bodies() {
    let raw = "[1/2/24, 10:05:00 AM] Иван: Привет мир\n[1/2/24, 10:06:00 AM] 田中太郎: こんにちは";
    let records = parse(raw);
    assert_eq!(records.records()[0].sender, Sender::User("Иван".into()));
    assert_eq!(records.records()[1].body, "こんにちは");
}

#[test]
fn test_emoji_in_sender_name() {
    let raw = "[1/2/24, 10:05:00 AM] Mom 💖: call me";
    let records = parse(raw);
    assert_eq!(records.records()[0].sender, Sender::User("Mom 💖".into()));
}

// =========================================================================
// Timestamp variants
// =========================================================================

#[test]
fn test_two_and_four_digit_years_in_one_file() {
    let raw = "[1/2/24, 10:05:00 AM] Alice: short\n[1/2/2024, 10:06:00 AM] Alice: long";
    let records = parse(raw);
    assert_eq!(records.len(), 2);
    assert_eq!(
        records.records()[0].features.year,
        records.records()[1].features.year
    );
}

#[test]
fn test_single_digit_day_month_hour() {
    let raw = "[5/1/24, 9:05:00 AM] Alice: early january";
    let records = parse(raw);
    let features = &records.records()[0].features;
    assert_eq!(features.day, 5);
    assert_eq!(features.month_num, 1);
    assert_eq!(features.hour, 9);
    assert_eq!(features.period, "09-10");
}

#[test]
fn test_invalid_month_fails_whole_transcript() {
    let parser = TranscriptParser::new();
    // First entry is fine, second matches the boundary but month 13 is not
    // a calendar value: the whole file is rejected, no partial output
    let raw = "[1/2/24, 10:05:00 AM] Alice: ok\n[5/13/24, 10:06:00 AM] Alice: boom";
    let err = parser.parse_str(raw).unwrap_err();
    assert!(err.is_timestamp());
}

#[test]
fn test_invalid_hour_fails_whole_transcript() {
    let parser = TranscriptParser::new();
    // %I only accepts 1-12
    let err = parser
        .parse_str("[1/2/24, 13:05:00 AM] Alice: bad hour")
        .unwrap_err();
    assert!(err.is_timestamp());
}

#[test]
fn test_hour_bucket_boundaries() {
    let raw = "\
[1/2/24, 11:59:00 PM] Alice: just before midnight
[2/2/24, 12:01:00 AM] Alice: just after midnight";
    let records = parse(raw);
    assert_eq!(records.records()[0].features.period, "23-00");
    assert_eq!(records.records()[1].features.period, "00-01");
}

// =========================================================================
// Sender/body separation
// =========================================================================

#[test]
fn test_sender_with_embedded_colon_space() {
    // First ": " wins; the rest of the name leaks into the body
    let raw = "[1/2/24, 10:05:00 AM] Work: Design Team: meeting at 3";
    let records = parse(raw);
    let rec = &records.records()[0];
    assert_eq!(rec.sender, Sender::User("Work".into()));
    assert_eq!(rec.body, "Design Team: meeting at 3");
}

#[test]
fn test_body_with_colons_untouched() {
    let raw = "[1/2/24, 10:05:00 AM] Alice: ratio is 3:1 not 2:1";
    let records = parse(raw);
    assert_eq!(records.records()[0].body, "ratio is 3:1 not 2:1");
}

#[test]
fn test_round_trip_sender_body() {
    let sender = "Alice";
    let body = "hello over there";
    let raw = format!("[1/2/24, 10:05:00 AM] {sender}: {body}");
    let records = parse(&raw);
    let rec = &records.records()[0];
    assert_eq!(rec.sender, Sender::User(sender.into()));
    assert_eq!(rec.body, body);
}

#[test]
fn test_trailing_newline_trimmed_from_body() {
    let raw = "[1/2/24, 10:05:00 AM] Alice: hello\n";
    let records = parse(&raw);
    assert_eq!(records.records()[0].body, "hello");
}

// =========================================================================
// Media markers
// =========================================================================

#[test]
fn test_all_media_markers_counted() {
    let raw = "\
[1/2/24, 10:00:00 AM] A: image omitted
[1/2/24, 10:01:00 AM] A: video omitted
[1/2/24, 10:02:00 AM] A: document omitted
[1/2/24, 10:03:00 AM] A: sticker omitted
[1/2/24, 10:04:00 AM] A: GIF omitted
[1/2/24, 10:05:00 AM] A: audio omitted
[1/2/24, 10:06:00 AM] A: not media";
    let records = parse(raw);
    let stats = fetch_stats(&records, &SenderFilter::Overall, &LinkifyUrlDetector);
    assert_eq!(stats.media, 6);
}

#[test]
fn test_media_marker_with_prefix_text_not_counted() {
    let raw = "[1/2/24, 10:00:00 AM] A: that image omitted yesterday was funny";
    let records = parse(raw);
    let stats = fetch_stats(&records, &SenderFilter::Overall, &LinkifyUrlDetector);
    assert_eq!(stats.media, 0);
}

// =========================================================================
// Degenerate transcripts
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
}

#[test]
fn test_whitespace_only_input() {
    assert!(parse("   \n\n\t  ").is_empty());
}

#[test]
fn test_leading_junk_before_first_timestamp() {
    let raw = "some export preamble\nmore junk\n[1/2/24, 10:05:00 AM] Alice: hi";
    let records = parse(raw);
    assert_eq!(records.len(), 1);
    assert_eq!(records.records()[0].body, "hi");
}

#[test]
fn test_timestamp_with_no_block() {
    let raw = "[1/2/24, 10:05:00 AM]";
    let records = parse(raw);
    assert_eq!(records.len(), 1);
    let rec = &records.records()[0];
    assert!(rec.is_system_notification());
    assert_eq!(rec.body, "");
}

#[test]
fn test_very_long_body() {
    let body = "x".repeat(100 * 1024);
    let raw = format!("[1/2/24, 10:05:00 AM] Alice: {body}");
    let records = parse(&raw);
    assert_eq!(records.records()[0].body.len(), 100 * 1024);
}

#[test]
fn test_many_entries() {
    let mut raw = String::new();
    for i in 0..1000 {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        raw.push_str(&format!(
            "[{}/2/24, {}:{:02}:00 AM] {}: message {}\n",
            (i % 28) + 1,
            (i % 12) + 1,
            i % 60,
            sender,
            i
        ));
    }
    let records = parse(&raw);
    assert_eq!(records.len(), 1000);
}
