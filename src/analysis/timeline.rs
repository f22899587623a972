//! Message volume over time: monthly and daily timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::{RecordSet, SenderFilter};
use crate::features::month_name;

/// One month's message volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    /// Month number, 1-12
    pub month_num: u32,
    /// English month name
    pub month: &'static str,
    /// Combined label for charting, e.g. `"February-2024"`
    pub label: String,
    pub messages: usize,
}

/// One calendar day's message volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Message counts grouped by (year, month), in chronological order.
pub fn monthly_timeline(records: &RecordSet, filter: &SenderFilter) -> Vec<MonthlyPoint> {
    let mut groups: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records.filtered(filter) {
        *groups
            .entry((record.features.year, record.features.month_num))
            .or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((year, month_num), messages)| MonthlyPoint {
            year,
            month_num,
            month: month_name(month_num),
            label: format!("{}-{}", month_name(month_num), year),
            messages,
        })
        .collect()
}

/// Message counts per calendar date, sorted by date ascending.
pub fn daily_timeline(records: &RecordSet, filter: &SenderFilter) -> Vec<DailyPoint> {
    let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records.filtered(filter) {
        *groups.entry(record.features.date).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}
