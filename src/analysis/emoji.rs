//! Emoji frequency over message bodies.

use std::collections::HashMap;

use serde::Serialize;

use crate::capability::EmojiTable;
use crate::dataset::{RecordSet, SenderFilter};

/// One emoji and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Full emoji frequency table, sorted by descending count.
///
/// Scans every character of every visible body against the emoji table, so
/// multi-codepoint sequences (skin tones, ZWJ families) tally per
/// component. Empty table when no emoji is found. Ties break by code point.
pub fn emoji_frequency(
    records: &RecordSet,
    filter: &SenderFilter,
    table: &dyn EmojiTable,
) -> Vec<EmojiCount> {
    let mut counts: HashMap<char, usize> = HashMap::new();

    for record in records.filtered(filter) {
        for ch in record.body.chars() {
            if table.is_emoji(ch) {
                *counts.entry(ch).or_default() += 1;
            }
        }
    }

    let mut result: Vec<(char, usize)> = counts.into_iter().collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    result
        .into_iter()
        .map(|(ch, count)| EmojiCount {
            emoji: ch.to_string(),
            count,
        })
        .collect()
}
