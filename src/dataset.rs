//! The immutable record set and query-time sender filtering.
//!
//! A [`RecordSet`] is built once per transcript and never mutated; every
//! aggregation reads from it through a [`SenderFilter`]. Filtering never
//! removes records from the base set — a new upload replaces the whole set.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::MessageRecord;

/// Filter value meaning "no sender filter applied".
pub const OVERALL: &str = "Overall";

/// Query-time sender filter passed to every aggregation function.
///
/// `Overall` is the sentinel for "use the whole record set"; any other value
/// restricts the view to one sender's records. Filtering by a user name
/// never matches system notifications, since the sentinel sender is not a
/// user name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SenderFilter {
    /// No filter: every record is visible
    #[default]
    Overall,
    /// Only records whose sender name equals this value
    User(String),
}

impl SenderFilter {
    /// Builds a filter for a single sender.
    pub fn user(name: impl Into<String>) -> Self {
        SenderFilter::User(name.into())
    }

    /// Parses the CLI/report convention: `"Overall"` means no filter.
    pub fn parse(value: &str) -> Self {
        if value == OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::User(value.to_string())
        }
    }

    /// Returns `true` if the record is visible through this filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::User(name) => record.sender.name() == name,
        }
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderFilter::Overall => f.write_str(OVERALL),
            SenderFilter::User(name) => f.write_str(name),
        }
    }
}

/// The parsed dataset: transcript-ordered, append-only during parsing,
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecordSet {
    records: Vec<MessageRecord>,
}

impl RecordSet {
    /// Wraps parsed records. Order is preserved as given.
    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in transcript order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Records visible through a filter, in transcript order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        self.records.iter().filter(move |r| filter.matches(r))
    }

    /// Unique human senders, sorted by name. System notifications are
    /// excluded: the sentinel is not a participant.
    pub fn senders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .records
            .iter()
            .filter(|r| !r.is_system_notification())
            .map(|r| r.sender.name())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Timestamps of the first and last record, if any.
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.records.first()?.timestamp;
        let last = self.records.last()?.timestamp;
        Some((first, last))
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Sender;
    use chrono::TimeZone;

    fn record(sender: Sender, body: &str, minute: u32) -> MessageRecord {
        let ts = Utc.with_ymd_and_hms(2024, 2, 1, 10, minute, 0).unwrap();
        MessageRecord::new(ts, sender, body)
    }

    fn sample() -> RecordSet {
        RecordSet::new(vec![
            record(Sender::User("Bob".into()), "hi", 0),
            record(Sender::User("Alice".into()), "hello", 1),
            record(Sender::System, "Alice added Bob", 2),
            record(Sender::User("Bob".into()), "bye", 3),
        ])
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(SenderFilter::parse("Overall"), SenderFilter::Overall);
        assert_eq!(
            SenderFilter::parse("Alice"),
            SenderFilter::User("Alice".into())
        );
        // Sentinel comparison is exact
        assert_eq!(
            SenderFilter::parse("overall"),
            SenderFilter::User("overall".into())
        );
    }

    #[test]
    fn test_overall_sees_everything() {
        let set = sample();
        assert_eq!(set.filtered(&SenderFilter::Overall).count(), 4);
    }

    #[test]
    fn test_user_filter_excludes_others() {
        let set = sample();
        let bob_filter = SenderFilter::user("Bob");
        let bob: Vec<_> = set.filtered(&bob_filter).collect();
        assert_eq!(bob.len(), 2);
        assert!(bob.iter().all(|r| r.sender.name() == "Bob"));
    }

    #[test]
    fn test_user_filter_never_matches_system() {
        let set = sample();
        assert_eq!(set.filtered(&SenderFilter::user("Charlie")).count(), 0);
        // Filtering by the sentinel name does match the sentinel records;
        // callers that want them excluded filter on is_system_notification
        assert_eq!(
            set.filtered(&SenderFilter::user("system_notification")).count(),
            1
        );
    }

    #[test]
    fn test_senders_unique_sorted_without_system() {
        let set = sample();
        assert_eq!(set.senders(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_time_span() {
        let set = sample();
        let (first, last) = set.time_span().unwrap();
        assert!(first < last);
        assert!(RecordSet::default().time_span().is_none());
    }

    #[test]
    fn test_empty_set() {
        let set = RecordSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.senders().is_empty());
    }
}
