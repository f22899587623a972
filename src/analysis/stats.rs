//! Headline statistics: messages, words, media, links.

use serde::Serialize;

use crate::capability::UrlDetector;
use crate::dataset::{RecordSet, SenderFilter};

/// Headline counts for a (possibly filtered) record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChatStats {
    /// Number of records visible through the filter
    pub messages: usize,
    /// Sum of whitespace-separated tokens over all bodies
    pub words: usize,
    /// Bodies that are media-omission markers
    pub media: usize,
    /// URL-shaped substrings across all bodies
    pub links: usize,
}

/// Computes the headline statistics in one pass.
///
/// Word and link counts run over every visible body, media markers and
/// system notifications included — a shared link inside a notification is
/// still a shared link.
pub fn fetch_stats(
    records: &RecordSet,
    filter: &SenderFilter,
    urls: &dyn UrlDetector,
) -> ChatStats {
    let mut stats = ChatStats::default();

    for record in records.filtered(filter) {
        stats.messages += 1;
        stats.words += record.word_count();
        if record.is_media() {
            stats.media += 1;
        }
        stats.links += urls.find_urls(&record.body).len();
    }

    stats
}
