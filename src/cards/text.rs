//! Fixed-capacity card text.
//!
//! Card faces have room for 16 characters per line. `CardText` enforces that
//! at construction: `new` truncates, `try_new` refuses. A `CardText` that
//! exists is always within capacity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text did not fit into a card line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("text {text:?} has {len} characters, a card line holds {capacity}")]
pub struct TextTooLong {
    pub text: String,
    pub len: usize,
    pub capacity: usize,
}

/// One line of card text, at most [`CardText::CAPACITY`] characters.
///
/// ```
/// use horror_deck::cards::CardText;
///
/// let line = CardText::new("a very long line of flavour text");
/// assert_eq!(line.as_str(), "a very long line");
/// assert!(CardText::try_new("a very long line of flavour text").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CardText(String);

impl CardText {
    /// Visible characters per line.
    pub const CAPACITY: usize = 16;

    /// Build a line, dropping everything past the capacity.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let end = text
            .char_indices()
            .nth(Self::CAPACITY)
            .map_or(text.len(), |(idx, _)| idx);
        let line = Self(text[..end].to_string());
        debug_assert!(line.len() <= Self::CAPACITY);
        line
    }

    /// Build a line, failing if it does not fit.
    pub fn try_new(text: &str) -> Result<Self, TextTooLong> {
        let len = text.chars().count();
        if len > Self::CAPACITY {
            return Err(TextTooLong {
                text: text.to_string(),
                len,
                capacity: Self::CAPACITY,
            });
        }
        Ok(Self(text.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CardText {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardText {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<CardText> for String {
    fn from(t: CardText) -> Self {
        t.0
    }
}

impl std::fmt::Display for CardText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
