//! Sentiment classification over message bodies.

use serde::Serialize;

use crate::capability::PolarityScorer;
use crate::dataset::{RecordSet, SenderFilter};

/// Polarity class of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Classifies a signed polarity score.
    ///
    /// Thresholds are fixed: > 0 positive, < 0 negative, exactly 0 neutral
    /// — whatever scorer produced the value.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Classified message counts with their percentage shares.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Percent of classified messages per class, rounded to two decimals
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
}

impl SentimentBreakdown {
    /// Total number of classified messages.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Returns `true` if nothing was eligible for classification.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn finalize(mut self) -> Self {
        let total = self.total();
        if total > 0 {
            self.positive_pct = round2(self.positive as f64 / total as f64 * 100.0);
            self.negative_pct = round2(self.negative as f64 / total as f64 * 100.0);
            self.neutral_pct = round2(self.neutral as f64 / total as f64 * 100.0);
        }
        self
    }
}

/// Classifies every eligible message and tallies the classes.
///
/// Media markers (any body containing "omitted"), system notifications, and
/// empty bodies are excluded before scoring. A filter that leaves nothing
/// eligible yields the zeroed breakdown.
pub fn sentiment_breakdown(
    records: &RecordSet,
    filter: &SenderFilter,
    scorer: &dyn PolarityScorer,
) -> SentimentBreakdown {
    let mut breakdown = SentimentBreakdown::default();

    for record in records.filtered(filter) {
        if record.is_system_notification()
            || record.body.to_lowercase().contains("omitted")
            || record.body.trim().is_empty()
        {
            continue;
        }

        match Polarity::from_score(scorer.polarity(&record.body)) {
            Polarity::Positive => breakdown.positive += 1,
            Polarity::Negative => breakdown.negative += 1,
            Polarity::Neutral => breakdown.neutral += 1,
        }
    }

    breakdown.finalize()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
