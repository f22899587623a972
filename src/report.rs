//! The full analysis report: every aggregation bundled into one value.
//!
//! [`AnalysisReport`] is the structured output handed to a presentation
//! layer — the CLI renders it as text, `--format json` serializes it, and a
//! dashboard would consume the same shape.

use serde::Serialize;

use crate::analysis::{
    ActivityCount, ActivityHeatmap, ChatStats, DailyPoint, EmojiCount, MonthlyPoint, SenderShare,
    SentimentBreakdown, WordCount, activity_heatmap, busiest_senders, contribution_table,
    daily_timeline, emoji_frequency, fetch_stats, month_activity, monthly_timeline,
    most_common_words, sentiment_breakdown, weekday_activity,
};
use crate::capability::{EmojiTable, PolarityScorer, UrlDetector};
use crate::dataset::{RecordSet, SenderFilter};
use crate::stopwords::StopWords;

/// The delegated capabilities an [`AnalysisReport`] needs.
///
/// Bundled so report construction takes one argument instead of three; each
/// backend stays individually swappable.
pub struct Capabilities<'a> {
    pub urls: &'a dyn UrlDetector,
    pub emoji: &'a dyn EmojiTable,
    pub sentiment: &'a dyn PolarityScorer,
}

/// Every aggregation output for one record set and filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The filter the report was computed under (`"Overall"` or a sender)
    pub filter: String,
    pub stats: ChatStats,
    /// Top senders by message count (whole-set view)
    pub busiest_senders: Vec<SenderShare>,
    /// Percent contribution of every sender (whole-set view)
    pub contribution: Vec<SenderShare>,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub weekday_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: ActivityHeatmap,
    pub top_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
    pub sentiment: SentimentBreakdown,
}

impl AnalysisReport {
    /// Runs every aggregation over the record set.
    ///
    /// The leaderboard tables always cover the whole set; everything else
    /// respects the filter. An empty record set produces a report whose
    /// sections are all empty or zero — never an error.
    pub fn build(
        records: &RecordSet,
        filter: &SenderFilter,
        stop_words: &StopWords,
        capabilities: &Capabilities<'_>,
    ) -> Self {
        Self {
            filter: filter.to_string(),
            stats: fetch_stats(records, filter, capabilities.urls),
            busiest_senders: busiest_senders(records),
            contribution: contribution_table(records),
            monthly_timeline: monthly_timeline(records, filter),
            daily_timeline: daily_timeline(records, filter),
            weekday_activity: weekday_activity(records, filter),
            month_activity: month_activity(records, filter),
            heatmap: activity_heatmap(records, filter),
            top_words: most_common_words(records, filter, stop_words),
            emoji: emoji_frequency(records, filter, capabilities.emoji),
            sentiment: sentiment_breakdown(records, filter, capabilities.sentiment),
        }
    }
}
