//! Calendar features derived from a message timestamp.
//!
//! Every [`MessageRecord`](crate::record::MessageRecord) carries one
//! [`CalendarFeatures`] value, computed once at construction. Aggregations
//! group on these fields instead of re-deriving them per call.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use serde::Serialize;

/// Month names indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names in calendar order, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar fields derived from a single timestamp.
///
/// The timestamp strictly determines every field here; none of them is ever
/// mutated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFeatures {
    /// Calendar date without the time component
    pub date: NaiveDate,
    /// Four-digit year
    pub year: i32,
    /// Month number, 1-12
    pub month_num: u32,
    /// English month name
    pub month: &'static str,
    /// Day of month, 1-31
    pub day: u32,
    /// English weekday name
    pub weekday: &'static str,
    /// Hour of day, 0-23
    pub hour: u32,
    /// Minute of hour, 0-59
    pub minute: u32,
    /// Hour-bucket label for heatmap grouping, e.g. `"09-10"`
    pub period: String,
}

impl CalendarFeatures {
    /// Derives all calendar fields from a timestamp.
    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        let hour = ts.hour();
        Self {
            date: ts.date_naive(),
            year: ts.year(),
            month_num: ts.month(),
            month: month_name(ts.month()),
            day: ts.day(),
            weekday: weekday_name(ts.weekday()),
            hour,
            minute: ts.minute(),
            period: period_label(hour),
        }
    }
}

/// Returns the English name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Returns the English name for a chrono weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns the hour-bucket label for an hour of day.
///
/// Hours 0-22 label as `"HH-HH+1"`. Hour 23 wraps to `"23-00"`, which is a
/// bucket of its own and is never merged with hour 0's `"00-01"`.
pub fn period_label(hour: u32) -> String {
    if hour == 23 {
        "23-00".to_string()
    } else {
        format!("{:02}-{:02}", hour, hour + 1)
    }
}
