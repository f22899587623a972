//! # Chatlens
//!
//! A Rust library for turning WhatsApp chat exports into activity, content,
//! and sentiment analytics.
//!
//! ## Overview
//!
//! Chatlens ingests one exported transcript — a single text blob of
//! interleaved timestamps, sender names, and message bodies — and parses it
//! into an immutable set of typed records. Everything else is aggregation
//! over that set: headline statistics, timelines, activity heatmaps, word
//! and emoji frequencies, and per-message sentiment.
//!
//! The parser is the careful part. Exports are line-noisy: timestamps vary
//! in width, invisible directional marks (U+200E/U+200F) hide inside names
//! and bodies, message bodies span multiple lines, system notifications
//! carry no sender, and attachments appear as "image omitted"-style
//! markers. All of that is handled up front so the aggregations stay plain.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = TranscriptParser::new();
//!     let records = parser.parse_str(
//!         "[1/2/24, 10:05:00 AM] Alice: Hello there\n\
//!          [1/2/24, 10:06:00 AM] image omitted",
//!     )?;
//!
//!     let stats = fetch_stats(&records, &SenderFilter::Overall, &LinkifyUrlDetector);
//!     assert_eq!(stats.messages, 2);
//!     assert_eq!(stats.media, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`TranscriptParser`]: raw text to [`RecordSet`]
//! - [`tokenize`] — timestamp-boundary splitting (internal)
//! - [`record`] — [`MessageRecord`], [`Sender`], media-marker rules
//! - [`features`] — calendar fields derived per record
//! - [`dataset`] — [`RecordSet`] and [`SenderFilter`]
//! - [`analysis`] — the aggregation functions
//! - [`capability`] — swappable URL/emoji/sentiment backends
//! - [`stopwords`] — [`StopWords`](stopwords::StopWords) for lexical frequency
//! - [`report`] — [`AnalysisReport`](report::AnalysisReport), the bundled output
//! - [`error`] — [`ChatlensError`] and [`Result`]

pub mod analysis;
pub mod capability;
pub mod dataset;
pub mod error;
pub mod features;
pub mod parser;
pub mod record;
pub mod report;
pub mod stopwords;
mod tokenize;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use dataset::{RecordSet, SenderFilter};
pub use error::{ChatlensError, Result};
pub use parser::TranscriptParser;
pub use record::{MessageRecord, Sender};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Parsing
    pub use crate::parser::TranscriptParser;

    // Data model
    pub use crate::dataset::{RecordSet, SenderFilter};
    pub use crate::features::CalendarFeatures;
    pub use crate::record::{MessageKind, MessageRecord, Sender};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Aggregations
    pub use crate::analysis::{
        activity_heatmap, busiest_senders, contribution_table, daily_timeline, emoji_frequency,
        fetch_stats, month_activity, monthly_timeline, most_common_words, sentiment_breakdown,
        weekday_activity, wordcloud_corpus,
    };

    // Capabilities and their defaults
    pub use crate::capability::{
        EmojiTable, LinkifyUrlDetector, PolarityScorer, UnicodeEmojiTable, UrlDetector,
        VaderPolarityScorer,
    };

    // Stop words and the bundled report
    pub use crate::report::{AnalysisReport, Capabilities};
    pub use crate::stopwords::StopWords;
}
