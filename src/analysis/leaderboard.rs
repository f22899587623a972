//! Sender leaderboard: who carries the conversation.

use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::RecordSet;

/// How many senders the leaderboard keeps.
pub const TOP_SENDERS: usize = 5;

/// One sender's share of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    /// Sender display name (the sentinel name for system notifications)
    pub name: String,
    /// Number of messages from this sender
    pub messages: usize,
    /// Percentage of all messages, rounded to two decimals
    pub percent: f64,
}

/// Top senders by message count, [`TOP_SENDERS`] at most.
///
/// Always computed over the whole set: a per-sender leaderboard is
/// meaningless. System notifications count as a sender of their own unless
/// the caller strips them first. Ties break by name.
pub fn busiest_senders(records: &RecordSet) -> Vec<SenderShare> {
    let mut table = contribution_table(records);
    table.truncate(TOP_SENDERS);
    table
}

/// Percent contribution of every sender, sorted by descending count.
///
/// Percentages are relative to the full record count and rounded to two
/// decimals.
pub fn contribution_table(records: &RecordSet) -> Vec<SenderShare> {
    let total = records.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.sender.name()).or_default() += 1;
    }

    let mut table: Vec<SenderShare> = counts
        .into_iter()
        .map(|(name, messages)| SenderShare {
            name: name.to_string(),
            messages,
            percent: round2(messages as f64 / total as f64 * 100.0),
        })
        .collect();

    table.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.name.cmp(&b.name)));
    table
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MessageRecord, Sender};
    use chrono::{TimeZone, Utc};

    fn set_of(senders: &[&str]) -> RecordSet {
        let ts = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();
        RecordSet::new(
            senders
                .iter()
                .map(|s| {
                    let sender = if *s == "system" {
                        Sender::System
                    } else {
                        Sender::User((*s).to_string())
                    };
                    MessageRecord::new(ts, sender, "hi")
                })
                .collect(),
        )
    }

    #[test]
    fn test_contribution_sorted_and_rounded() {
        let set = set_of(&["Alice", "Alice", "Alice", "Bob", "Bob", "Carol"]);
        let table = contribution_table(&set);

        assert_eq!(table.len(), 3);
        assert_eq!(table[0].name, "Alice");
        assert_eq!(table[0].messages, 3);
        assert_eq!(table[0].percent, 50.0);
        assert_eq!(table[1].name, "Bob");
        assert_eq!(table[1].percent, 33.33);
        assert_eq!(table[2].percent, 16.67);
    }

    #[test]
    fn test_percentages_include_system_notifications() {
        let set = set_of(&["Alice", "system", "system", "system"]);
        let table = contribution_table(&set);

        assert_eq!(table[0].name, "system_notification");
        assert_eq!(table[0].percent, 75.0);
        assert_eq!(table[1].name, "Alice");
        assert_eq!(table[1].percent, 25.0);
    }

    #[test]
    fn test_busiest_truncates_to_top_five() {
        let set = set_of(&["A", "B", "C", "D", "E", "F", "F"]);
        let top = busiest_senders(&set);

        assert_eq!(top.len(), TOP_SENDERS);
        assert_eq!(top[0].name, "F");
        assert_eq!(top[0].messages, 2);
        // Remaining ties resolve by name
        assert_eq!(top[1].name, "A");
    }

    #[test]
    fn test_empty_set_yields_empty_tables() {
        assert!(busiest_senders(&RecordSet::default()).is_empty());
        assert!(contribution_table(&RecordSet::default()).is_empty());
    }
}
