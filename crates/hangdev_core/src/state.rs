//! Game state and the values derived from it.
//!
//! Nothing derived is stored. Every query recomputes from the word and the
//! guessed letters, so there is no cache to fall out of step.

use crate::letter::Letter;
use crate::word::Word;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where a game stands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum GamePhase {
    /// Guesses are still accepted.
    InProgress,
    /// Every letter of the word was found.
    Won,
    /// The wrong-guess budget ran out.
    Lost,
}

/// Guessed letters in the order they were guessed, without repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Letter>", into = "Vec<Letter>")]
pub struct GuessedLetters(Vec<Letter>);

/// A letter appeared twice in a guess list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Letter {} guessed more than once", _0)]
pub struct DuplicateLetter(#[error(not(source))] pub Letter);

impl GuessedLetters {
    /// No guesses yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `letter` unless already present. Returns whether it was added.
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            false
        } else {
            self.0.push(letter);
            true
        }
    }

    /// Membership test.
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }

    /// Most recent guess.
    pub fn last(&self) -> Option<Letter> {
        self.0.last().copied()
    }

    /// Iterates guesses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().copied()
    }

    /// Number of distinct guesses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True before the first guess.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Letter>> for GuessedLetters {
    type Error = DuplicateLetter;

    fn try_from(letters: Vec<Letter>) -> Result<Self, Self::Error> {
        let mut guessed = Self::new();
        for letter in letters {
            if !guessed.insert(letter) {
                return Err(DuplicateLetter(letter));
            }
        }
        Ok(guessed)
    }
}

impl From<GuessedLetters> for Vec<Letter> {
    fn from(guessed: GuessedLetters) -> Self {
        guessed.0
    }
}

/// The word being guessed and everything guessed so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    word: Word,
    guessed: GuessedLetters,
}

impl GameState {
    /// Fresh state: no guesses.
    #[instrument]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            guessed: GuessedLetters::new(),
        }
    }

    /// State restored with prior guesses.
    pub fn with_guesses(word: Word, guessed: GuessedLetters) -> Self {
        Self { word, guessed }
    }

    /// The hidden word.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Guesses so far.
    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    pub(crate) fn guessed_mut(&mut self) -> &mut GuessedLetters {
        &mut self.guessed
    }

    /// Guesses that are not in the word.
    pub fn wrong_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|letter| !self.word.contains(*letter))
            .count()
    }

    /// Every letter of the word has been guessed.
    pub fn is_won(&self) -> bool {
        self.word.letters().all(|letter| self.guessed.contains(letter))
    }

    /// The wrong-guess budget is used up.
    pub fn is_lost(&self, attempts_allowed: usize) -> bool {
        self.wrong_count() >= attempts_allowed
    }

    /// Won or lost.
    pub fn is_over(&self, attempts_allowed: usize) -> bool {
        self.is_won() || self.is_lost(attempts_allowed)
    }

    /// Current phase. A final guess that both completes the word and
    /// exhausts the budget cannot happen (it would have to be right and wrong
    /// at once), but a restored state may be both; winning takes precedence.
    pub fn phase(&self, attempts_allowed: usize) -> GamePhase {
        if self.is_won() {
            GamePhase::Won
        } else if self.is_lost(attempts_allowed) {
            GamePhase::Lost
        } else {
            GamePhase::InProgress
        }
    }

    /// Most recent guess.
    pub fn last_guessed_letter(&self) -> Option<Letter> {
        self.guessed.last()
    }

    /// The most recent guess missed.
    pub fn last_guess_was_wrong(&self) -> bool {
        self.last_guessed_letter()
            .is_some_and(|letter| !self.word.contains(letter))
    }
}
