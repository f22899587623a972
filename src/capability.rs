//! Delegated capabilities behind narrow interfaces.
//!
//! URL extraction, emoji lookup, and polarity scoring are external
//! capabilities: string in, structured result out. The core pipeline and the
//! aggregations only ever see these traits, so the backing libraries can be
//! swapped without touching them.

use linkify::{LinkFinder, LinkKind};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Finds URL-shaped substrings in free text.
pub trait UrlDetector {
    /// Returns every URL-shaped substring, in order of appearance.
    fn find_urls(&self, text: &str) -> Vec<String>;
}

/// Default [`UrlDetector`] backed by the `linkify` crate.
///
/// Only candidates with a scheme (`https://…`, `http://…`) count; bare
/// domains are too easy to confuse with filenames in media markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkifyUrlDetector;

impl UrlDetector for LinkifyUrlDetector {
    fn find_urls(&self, text: &str) -> Vec<String> {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.links(text).map(|link| link.as_str().to_string()).collect()
    }
}

/// Answers whether a character is a known emoji code point.
pub trait EmojiTable {
    /// Returns `true` if the character is in the emoji data table.
    fn is_emoji(&self, ch: char) -> bool;
}

/// Default [`EmojiTable`] backed by the `emojis` crate's Unicode data.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiTable;

impl EmojiTable for UnicodeEmojiTable {
    fn is_emoji(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        emojis::get(ch.encode_utf8(&mut buf)).is_some()
    }
}

/// Scores the polarity of a text: positive > 0, negative < 0, neutral == 0.
pub trait PolarityScorer {
    /// Returns a signed polarity score for the text.
    fn polarity(&self, text: &str) -> f64;
}

/// Default [`PolarityScorer`] backed by the VADER compound score.
pub struct VaderPolarityScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderPolarityScorer {
    /// Creates a scorer with the VADER lexicon loaded.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderPolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderPolarityScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}
