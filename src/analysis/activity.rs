//! Activity patterns: weekday/month frequency tables and the day×hour
//! heatmap.

use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::{RecordSet, SenderFilter};
use crate::features::{MONTH_NAMES, WEEKDAY_NAMES};

/// One row of a frequency table keyed by a calendar label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub label: &'static str,
    pub messages: usize,
}

/// Message counts per weekday name, sorted by descending count.
///
/// Ties keep calendar order (Monday first), which makes the sort stable
/// across runs.
pub fn weekday_activity(records: &RecordSet, filter: &SenderFilter) -> Vec<ActivityCount> {
    frequency_table(&WEEKDAY_NAMES, records.filtered(filter).map(|r| r.features.weekday))
}

/// Message counts per month name, sorted by descending count.
pub fn month_activity(records: &RecordSet, filter: &SenderFilter) -> Vec<ActivityCount> {
    frequency_table(&MONTH_NAMES, records.filtered(filter).map(|r| r.features.month))
}

fn frequency_table(
    order: &[&'static str],
    labels: impl Iterator<Item = &'static str>,
) -> Vec<ActivityCount> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    // Seed from calendar order so the descending sort is stable on ties
    let mut table: Vec<ActivityCount> = order
        .iter()
        .copied()
        .filter_map(|label| {
            counts
                .get(label)
                .map(|&messages| ActivityCount { label, messages })
        })
        .collect();
    table.sort_by(|a, b| b.messages.cmp(&a.messages));
    table
}

/// Weekday × hour-bucket message counts.
///
/// Rows are the observed weekdays in Monday→Sunday order; columns are the
/// observed hour-bucket labels in chronological order (`"00-01"` …
/// `"23-00"`). Combinations with no messages hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ActivityHeatmap {
    pub rows: Vec<&'static str>,
    pub columns: Vec<String>,
    /// `counts[row][column]`, zero-filled
    pub counts: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    /// Returns `true` if the heatmap holds no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a cell by weekday and bucket label.
    pub fn get(&self, weekday: &str, period: &str) -> Option<usize> {
        let row = self.rows.iter().position(|r| *r == weekday)?;
        let col = self.columns.iter().position(|c| c == period)?;
        Some(self.counts[row][col])
    }
}

/// Pivots the record set into a weekday × hour-bucket heatmap.
pub fn activity_heatmap(records: &RecordSet, filter: &SenderFilter) -> ActivityHeatmap {
    let mut cells: HashMap<(&str, &str), usize> = HashMap::new();
    let mut periods: Vec<&str> = Vec::new();

    for record in records.filtered(filter) {
        let period = record.features.period.as_str();
        if !periods.contains(&period) {
            periods.push(period);
        }
        *cells.entry((record.features.weekday, period)).or_default() += 1;
    }

    // Hour buckets are zero-padded, so lexicographic order is chronological
    periods.sort_unstable();

    let rows: Vec<&'static str> = WEEKDAY_NAMES
        .iter()
        .copied()
        .filter(|day| cells.keys().any(|&(d, _)| d == *day))
        .collect();

    let counts = rows
        .iter()
        .map(|day| {
            periods
                .iter()
                .map(|period| cells.get(&(*day, *period)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    ActivityHeatmap {
        rows,
        columns: periods.into_iter().map(str::to_string).collect(),
        counts,
    }
}
