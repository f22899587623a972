//! Aggregation functions over the parsed record set.
//!
//! Every function here is a pure consumer: it takes the immutable
//! [`RecordSet`](crate::RecordSet), a [`SenderFilter`](crate::SenderFilter)
//! (`Overall` = no filter), and — where the spec delegates the work — a
//! capability trait. No function mutates the set, and every function returns
//! its empty/zero result on an empty input instead of failing.
//!
//! - [`stats`] — message/word/media/link counts
//! - [`leaderboard`] — busiest senders and percent contribution
//! - [`timeline`] — monthly and daily message volume
//! - [`activity`] — weekday/month frequency and the day×hour heatmap
//! - [`words`] — top word frequencies and the word-cloud corpus
//! - [`emoji`] — emoji frequency table
//! - [`sentiment`] — polarity classification

pub mod activity;
pub mod emoji;
pub mod leaderboard;
pub mod sentiment;
pub mod stats;
pub mod timeline;
pub mod words;

pub use activity::{ActivityCount, ActivityHeatmap, activity_heatmap, month_activity, weekday_activity};
pub use emoji::{EmojiCount, emoji_frequency};
pub use leaderboard::{SenderShare, busiest_senders, contribution_table};
pub use sentiment::{Polarity, SentimentBreakdown, sentiment_breakdown};
pub use stats::{ChatStats, fetch_stats};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use words::{TOP_WORDS, WordCount, most_common_words, wordcloud_corpus};
