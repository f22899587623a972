//! Transcript parser: turns raw export text into a [`RecordSet`].
//!
//! The pipeline is split → build → enrich:
//!
//! 1. [`tokenize`](crate::tokenize) finds timestamp boundaries and cuts the
//!    text into `(timestamp, message-block)` pairs.
//! 2. Each pair becomes one [`MessageRecord`]: the timestamp is cleaned and
//!    parsed, the block is split into sender and body (or classified as a
//!    system notification), and invisible directional marks are stripped.
//! 3. Calendar features are derived once per record at construction.
//!
//! A timestamp that matches the boundary pattern but fails calendar parsing
//! aborts the whole parse: the file's export convention is unsupported, and
//! partial output would be misleading.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::dataset::RecordSet;
use crate::error::{ChatlensError, Result};
use crate::record::{MessageRecord, Sender};
use crate::tokenize::{self, RawEntry};

/// Accepted timestamp layouts, tried in order.
///
/// The export writes 2-digit years; 4-digit years appear in some regional
/// variants and are covered by the `%Y` fallback.
const TIMESTAMP_FORMATS: &[&str] = &["%d/%m/%y, %I:%M:%S %p", "%d/%m/%Y, %I:%M:%S %p"];

/// Parser for bracketed `D/M/YY, H:MM:SS AM|PM` chat exports.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse_str("[1/2/24, 10:05:00 AM] Alice: Hello there")?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct TranscriptParser {
    boundary: Regex,
    sender_split: Regex,
}

impl TranscriptParser {
    /// Creates a parser with its patterns compiled.
    pub fn new() -> Self {
        Self {
            boundary: tokenize::boundary_regex(),
            // Shortest leading run up to the first colon-whitespace wins.
            // A sender name containing ": " therefore mis-splits; kept as
            // the documented policy rather than guessing a heuristic.
            sender_split: Regex::new(r"(?s)^(.+?):\s(.*)$").unwrap(),
        }
    }

    /// Parses a transcript file.
    ///
    /// The file must be UTF-8; anything else surfaces as an IO error.
    pub fn parse(&self, path: &Path) -> Result<RecordSet> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content).map_err(|err| match err {
            ChatlensError::Timestamp { input, .. } => {
                ChatlensError::timestamp_in_file(input, path.to_path_buf())
            }
            other => other,
        })
    }

    /// Parses transcript text already in memory.
    ///
    /// A transcript with no timestamp boundary yields an empty record set;
    /// every aggregation handles that as "no data". Front ends that need a
    /// hard failure for unrecognized files check [`RecordSet::is_empty`].
    pub fn parse_str(&self, raw: &str) -> Result<RecordSet> {
        let entries = tokenize::split_entries(&self.boundary, raw);

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            records.push(self.build_record(entry)?);
        }

        Ok(RecordSet::new(records))
    }

    /// Builds one record from a raw `(timestamp, block)` pair.
    fn build_record(&self, entry: RawEntry<'_>) -> Result<MessageRecord> {
        let timestamp = self.parse_timestamp(entry.timestamp)?;
        let (sender, body) = self.split_sender(entry.block);
        Ok(MessageRecord::new(timestamp, sender, body))
    }

    /// Parses a bracketed timestamp into a calendar value.
    ///
    /// Brackets are stripped and the narrow no-break space before AM/PM
    /// (U+202F) is normalized to an ordinary space first.
    fn parse_timestamp(&self, raw: &str) -> Result<DateTime<Utc>> {
        let cleaned = raw
            .trim_matches(['[', ']'])
            .replace('\u{202F}', " ");

        for format in TIMESTAMP_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(&cleaned, format) {
                return Ok(naive.and_utc());
            }
        }

        Err(ChatlensError::timestamp(cleaned))
    }

    /// Splits a message block into sender and body.
    ///
    /// Blocks normally read `Sender Name: body`. The first colon followed by
    /// whitespace separates the two; without one, the whole block is a
    /// system notification under the sentinel sender. Left-to-right and
    /// right-to-left marks are stripped from both halves before trimming.
    fn split_sender(&self, block: &str) -> (Sender, String) {
        match self.sender_split.captures(block) {
            Some(caps) => {
                let sender = strip_marks(caps.get(1).map_or("", |m| m.as_str()));
                let body = strip_marks(caps.get(2).map_or("", |m| m.as_str()));
                (Sender::User(sender), body)
            }
            None => (Sender::System, strip_marks(block)),
        }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes U+200E/U+200F directional marks and trims whitespace.
fn strip_marks(text: &str) -> String {
    text.replace(['\u{200E}', '\u{200F}'], "").trim().to_string()
}
