//! Key-value persistence contract and the on-store layout of a game.
//!
//! The store holds two independent string keys:
//!
//! - [`CURRENT_WORD_KEY`]: the raw word, e.g. `cat`
//! - [`GUESSED_LETTERS_KEY`]: a JSON array of one-letter strings in guess
//!   order, e.g. `["a","t"]`

use crate::letter::Letter;
use crate::state::{DuplicateLetter, GameState, GuessedLetters};
use crate::word::{Word, WordError};
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Store key holding the hidden word.
pub const CURRENT_WORD_KEY: &str = "currentWord";

/// Store key holding the guessed letters.
pub const GUESSED_LETTERS_KEY: &str = "guessedLetters";

/// A string key-value store the session reads once at startup and writes
/// after every mutation.
///
/// Writes are fire-and-forget: an implementation that cannot persist should
/// log and carry on. Reads must be accurate.
pub trait PersistenceAdapter {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

impl<T: PersistenceAdapter + ?Sized> PersistenceAdapter for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `(key, value)` pairs.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PersistenceAdapter for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Why a persisted game could not be restored.
#[derive(Debug, Display, Error, From)]
pub enum CorruptState {
    /// No word stored.
    #[display("No stored word")]
    #[from(ignore)]
    MissingWord,
    /// No guesses stored.
    #[display("No stored guesses")]
    #[from(ignore)]
    MissingGuesses,
    /// Stored word breaks the word invariant.
    #[display("Stored word is invalid: {}", _0)]
    InvalidWord(#[error(source)] WordError),
    /// Stored guesses are not an array of single lowercase letters.
    #[display("Stored guesses are malformed: {}", _0)]
    MalformedGuesses(#[error(source)] serde_json::Error),
    /// Stored guesses repeat a letter.
    #[display("Stored guesses are malformed: {}", _0)]
    DuplicateGuess(#[error(source)] DuplicateLetter),
}

/// Writes both keys for `state`.
#[instrument(skip_all, fields(word = %state.word(), guesses = state.guessed().len()))]
pub fn save_state<S: PersistenceAdapter + ?Sized>(store: &mut S, state: &GameState) {
    let letters: Vec<String> = state.guessed().iter().map(String::from).collect();
    // A Vec<String> always serializes.
    let guesses = serde_json::to_string(&letters).unwrap_or_else(|_| String::from("[]"));
    store.set(CURRENT_WORD_KEY, state.word().as_str());
    store.set(GUESSED_LETTERS_KEY, &guesses);
    debug!("Game state persisted");
}

/// Reads both keys. Either failing invalidates the whole state.
///
/// # Errors
///
/// Returns the first [`CorruptState`] reason found.
#[instrument(skip_all)]
pub fn load_state<S: PersistenceAdapter + ?Sized>(store: &S) -> Result<GameState, CorruptState> {
    let raw_word = store.get(CURRENT_WORD_KEY).ok_or(CorruptState::MissingWord)?;
    let raw_guesses = store
        .get(GUESSED_LETTERS_KEY)
        .ok_or(CorruptState::MissingGuesses)?;

    let word = Word::new(raw_word)?;
    let letters: Vec<Letter> = serde_json::from_str(&raw_guesses)?;
    let guessed = GuessedLetters::try_from(letters)?;

    debug!(word = %word, guesses = guessed.len(), "Game state restored");
    Ok(GameState::with_guesses(word, guessed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(word: &str, guesses: &str) -> MemoryStore {
        MemoryStore::with_values([(CURRENT_WORD_KEY, word), (GUESSED_LETTERS_KEY, guesses)])
    }

    #[test]
    fn test_layout() {
        let mut state = GameState::new(Word::new("cat").expect("valid word"));
        state.guessed_mut().insert(Letter::new('t').expect("letter"));
        state.guessed_mut().insert(Letter::new('z').expect("letter"));

        let mut store = MemoryStore::new();
        save_state(&mut store, &state);

        assert_eq!(store.get(CURRENT_WORD_KEY).as_deref(), Some("cat"));
        assert_eq!(store.get(GUESSED_LETTERS_KEY).as_deref(), Some(r#"["t","z"]"#));
    }

    #[test]
    fn test_load_well_formed() {
        let state = load_state(&stored("dog", r#"["o","x"]"#)).expect("loads");
        assert_eq!(state.word().as_str(), "dog");
        assert_eq!(state.guessed().len(), 2);
        assert_eq!(state.last_guessed_letter().map(Letter::as_char), Some('x'));
    }

    #[test]
    fn test_missing_keys() {
        assert!(matches!(load_state(&MemoryStore::new()), Err(CorruptState::MissingWord)));
        let only_word = MemoryStore::with_values([(CURRENT_WORD_KEY, "dog")]);
        assert!(matches!(load_state(&only_word), Err(CorruptState::MissingGuesses)));
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(
            load_state(&stored("Dog", "[]")),
            Err(CorruptState::InvalidWord(_))
        ));
        for guesses in ["not json", r#"{"a":1}"#, r#"["ab"]"#, r#"["A"]"#, "[1]", r#"[""]"#] {
            assert!(
                matches!(
                    load_state(&stored("dog", guesses)),
                    Err(CorruptState::MalformedGuesses(_))
                ),
                "{guesses} should be malformed"
            );
        }
        assert!(matches!(
            load_state(&stored("dog", r#"["a","a"]"#)),
            Err(CorruptState::DuplicateGuess(_))
        ));
    }
}
