//! The hidden word.

use crate::letter::Letter;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A nonempty run of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

/// A string that cannot be a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// No characters at all.
    #[display("Word is empty")]
    Empty,
    /// Contains something other than `a`–`z`.
    #[display("Word {:?} contains characters outside a-z", _0)]
    InvalidCharacters(#[error(not(source))] String),
}

impl Word {
    /// Validates a candidate word.
    #[instrument(skip(raw))]
    pub fn new(raw: impl Into<String>) -> Result<Self, WordError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(WordError::Empty);
        }
        if !raw.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letters of the word in order, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        // Validated on construction, so every char converts.
        self.0.chars().filter_map(|c| Letter::new(c).ok())
    }

    /// Returns true if the letter appears anywhere in the word.
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(letter.as_char())
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the word has no letters. Construction rejects empty words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}
