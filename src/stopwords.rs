//! Stop-word sets for lexical frequency analysis.
//!
//! The chats this tool targets mix Hindi transliteration with English, so
//! the bundled list covers both. The set is loaded once and passed
//! explicitly into [`most_common_words`](crate::analysis::most_common_words)
//! — there is no hidden global and no per-call file read.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Bundled Hindi-English transliteration stop words, one per line.
const BUNDLED: &str = include_str!("../data/stop_hinglish.txt");

/// Minimal fallback used when a caller-supplied file cannot be read.
const FALLBACK: &[&str] = &[
    "aap", "aur", "ka", "ki", "ko", "hai", "he", "ye", "to", "kya", "me", "se", "ne", "par",
];

/// An immutable stop-word set.
///
/// Construct once at startup with [`StopWords::load`] and share by
/// reference.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The bundled Hindi-English transliteration list.
    pub fn bundled() -> Self {
        Self::from_lines(BUNDLED)
    }

    /// The minimal built-in fallback set.
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Loads a stop-word set.
    ///
    /// With a path, reads one word per line from the file; a missing or
    /// unreadable file silently falls back to the built-in set — an absent
    /// optional resource is not an error. Without a path, the bundled list
    /// is used.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(p) => match fs::read_to_string(p) {
                Ok(content) => Self::from_lines(&content),
                Err(_) => Self::fallback(),
            },
            None => Self::bundled(),
        }
    }

    /// Parses one stop word per line, lowercased, blank lines skipped.
    fn from_lines(content: &str) -> Self {
        Self {
            words: content
                .lines()
                .map(|line| line.trim().to_lowercase())
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }

    /// Returns `true` if the (lowercase) word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::bundled()
    }
}
