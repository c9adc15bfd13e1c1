//! Single guessable letter.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Every guessable letter, in keyboard order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A single lowercase ASCII letter (`a`–`z`).
///
/// The only way to build one is through validation, so a `Letter` in hand
/// always satisfies the guess invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(char);

/// Rejected guess input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid letter {:?}: expected a single lowercase letter a-z", input)]
pub struct LetterError {
    /// The offending input, verbatim.
    pub input: String,
}

impl LetterError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl Letter {
    /// Validates a single character.
    ///
    /// Uppercase is rejected: case folding belongs to whoever reads the
    /// keyboard, not to the game.
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_lowercase() {
            Ok(Self(c))
        } else {
            Err(LetterError::new(c))
        }
    }

    /// Validates raw input that must be exactly one lowercase letter.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c).map_err(|_| LetterError::new(input)),
            _ => Err(LetterError::new(input)),
        }
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Iterates `a` through `z`.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        ALPHABET.chars().map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl TryFrom<String> for Letter {
    type Error = LetterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.0.to_string()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}
