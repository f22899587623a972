//! The parsed message record and its classification helpers.
//!
//! [`MessageRecord`] is the unit of the parsed dataset. The record builder
//! produces one per timestamp boundary; aggregations only ever read them.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::features::CalendarFeatures;

/// Name the [`Sender::System`] sentinel renders as in tables and reports.
pub const SYSTEM_SENDER: &str = "system_notification";

/// Media-omission markers emitted by the exporter in place of attachments.
///
/// Compared after trimming, invisible-mark removal, and lowercasing.
pub const MEDIA_MARKERS: [&str; 6] = [
    "image omitted",
    "video omitted",
    "document omitted",
    "sticker omitted",
    "gif omitted",
    "audio omitted",
];

/// The author of a message.
///
/// Every record has exactly one sender. Entries with no human author (group
/// membership changes, settings changes, encryption notices) use the
/// [`Sender::System`] sentinel rather than an empty or missing name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    /// A human participant, by display name
    User(String),
    /// A system notification with no author
    System,
}

impl Sender {
    /// Returns the display name, with the sentinel for system entries.
    pub fn name(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::System => SYSTEM_SENDER,
        }
    }

    /// Returns `true` for the system-notification sentinel.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Broad classification of a message body.
///
/// Derived on demand from the body text and sender; not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    Video,
    Document,
    Sticker,
    Gif,
    Audio,
    Deleted,
    Notification,
}

/// One parsed transcript entry.
///
/// Built once by [`TranscriptParser`](crate::parser::TranscriptParser); the
/// calendar features are derived from the timestamp at construction and
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    /// When the message was sent (naive export time, read as UTC)
    pub timestamp: DateTime<Utc>,
    /// Message author, or the system sentinel
    pub sender: Sender,
    /// Body text after invisible-mark stripping and prefix removal
    pub body: String,
    /// Calendar fields derived from `timestamp`
    pub features: CalendarFeatures,
}

impl MessageRecord {
    /// Creates a record, deriving the calendar features from the timestamp.
    pub fn new(timestamp: DateTime<Utc>, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            features: CalendarFeatures::from_timestamp(timestamp),
            timestamp,
            sender,
            body: body.into(),
        }
    }

    /// Returns `true` if this entry is a system notification.
    pub fn is_system_notification(&self) -> bool {
        self.sender.is_system()
    }

    /// Returns `true` if the body is a media-omission marker.
    pub fn is_media(&self) -> bool {
        is_media_marker(&self.body)
    }

    /// Number of whitespace-separated tokens in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Classifies the body into a [`MessageKind`].
    pub fn kind(&self) -> MessageKind {
        if self.sender.is_system() {
            return MessageKind::Notification;
        }

        let body = self.body.to_lowercase();
        if body.contains("image omitted") {
            MessageKind::Image
        } else if body.contains("video omitted") {
            MessageKind::Video
        } else if body.contains("document omitted") {
            MessageKind::Document
        } else if body.contains("sticker omitted") {
            MessageKind::Sticker
        } else if body.contains("gif omitted") {
            MessageKind::Gif
        } else if body.contains("audio omitted") {
            MessageKind::Audio
        } else if body.starts_with("this message was deleted") {
            MessageKind::Deleted
        } else {
            MessageKind::Text
        }
    }
}

/// Returns `true` if a body is a media-omission marker.
///
/// Exact match against [`MEDIA_MARKERS`] after trimming, invisible-mark
/// removal, and lowercasing — plus a substring match for "document omitted"
/// only, which the exporter suffixes with the original filename. The
/// asymmetry is kept as observed in real exports.
pub fn is_media_marker(body: &str) -> bool {
    let clean = body.replace(['\u{200E}', '\u{200F}'], "");
    let clean = clean.trim().to_lowercase();
    MEDIA_MARKERS.contains(&clean.as_str()) || clean.contains("document omitted")
}
