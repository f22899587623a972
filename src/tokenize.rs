//! Transcript splitting on timestamp boundaries.
//!
//! The export format interleaves bracketed timestamps with message blocks:
//!
//! ```text
//! [1/2/24, 10:05:00 AM] Alice: Hello there
//! [1/2/24, 10:06:00 AM] Bob: A reply
//! that spans two lines
//! ```
//!
//! A message block runs from the end of one timestamp to the start of the
//! next, so embedded newlines stay inside the block. Splitting happens on
//! timestamp boundaries only, never on line breaks.

use regex::Regex;

/// Bracketed timestamp boundary: `[D/M/YY, H:MM:SS AM]`.
///
/// Day/month are 1-2 digits, the year 2-4 digits, the hour 1-2 digits.
/// `\s` matches the narrow no-break space (U+202F) some exports place
/// before AM/PM.
pub(crate) const BOUNDARY_PATTERN: &str =
    r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}\s?(?:AM|PM)\]";

/// Compiles the boundary pattern.
pub(crate) fn boundary_regex() -> Regex {
    Regex::new(BOUNDARY_PATTERN).unwrap()
}

/// A raw `(timestamp, message-block)` pair produced by [`split_entries`].
///
/// Both fields borrow from the transcript text. The timestamp still carries
/// its brackets; the block carries its leading separator space and any
/// trailing newline, which the record builder trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawEntry<'a> {
    pub timestamp: &'a str,
    pub block: &'a str,
}

/// Splits raw transcript text into ordered `(timestamp, block)` pairs.
///
/// Content before the first timestamp match is discarded. A transcript with
/// no matching timestamp produces an empty vector; callers decide whether
/// that is an empty dataset or a format error.
pub(crate) fn split_entries<'a>(boundary: &Regex, raw: &'a str) -> Vec<RawEntry<'a>> {
    let matches: Vec<_> = boundary.find_iter(raw).collect();
    let mut entries = Vec::with_capacity(matches.len());

    for (i, m) in matches.iter().enumerate() {
        let block_end = matches.get(i + 1).map_or(raw.len(), |next| next.start());
        entries.push(RawEntry {
            timestamp: m.as_str(),
            block: &raw[m.end()..block_end],
        });
    }

    entries
}
