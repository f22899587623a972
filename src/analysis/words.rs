//! Lexical frequency: the most common words and the word-cloud corpus.

use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::{RecordSet, SenderFilter};
use crate::stopwords::StopWords;

/// How many words the frequency table keeps.
pub const TOP_WORDS: usize = 20;

/// One word and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Top [`TOP_WORDS`] words by frequency.
///
/// Bodies containing "omitted" (case-insensitive) are excluded so media
/// markers never pollute the table. Tokens come from lowercased whitespace
/// splitting; single characters and stop words are dropped. Ties break by
/// word.
pub fn most_common_words(
    records: &RecordSet,
    filter: &SenderFilter,
    stop_words: &StopWords,
) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records.filtered(filter) {
        let body = record.body.to_lowercase();
        if body.contains("omitted") {
            continue;
        }
        for word in body.split_whitespace() {
            if word.chars().count() > 1 && !stop_words.contains(word) {
                *counts.entry(word.to_string()).or_default() += 1;
            }
        }
    }

    let mut table: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    table.truncate(TOP_WORDS);
    table
}

/// The text a word-cloud renderer would consume: all non-media bodies joined
/// by single spaces.
///
/// When the media exclusion leaves nothing, every filtered body is used
/// instead so the cloud is never blank for a media-only sender.
pub fn wordcloud_corpus(records: &RecordSet, filter: &SenderFilter) -> String {
    let bodies: Vec<&str> = records
        .filtered(filter)
        .filter(|r| !r.body.to_lowercase().contains("omitted"))
        .map(|r| r.body.as_str())
        .collect();

    if bodies.is_empty() {
        return records
            .filtered(filter)
            .map(|r| r.body.as_str())
            .collect::<Vec<_>>()
            .join(" ");
    }

    bodies.join(" ")
}
