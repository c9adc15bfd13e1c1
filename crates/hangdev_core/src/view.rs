//! Read-only values a front end renders from a session.
//!
//! All of these are computed on demand from the session's state.

use crate::letter::Letter;
use crate::session::GameSession;
use crate::stakes::StakesEntry;
use crate::state::GamePhase;
use serde::{Deserialize, Serialize};

/// How a key on the on-screen keyboard should look.
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    /// Not guessed yet.
    Unguessed,
    /// Guessed and in the word.
    Correct,
    /// Guessed and not in the word.
    Wrong,
}

/// One position of the hidden word as it should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedLetter {
    /// The letter at this position.
    pub letter: Letter,
    /// Whether to show it.
    pub visible: bool,
    /// Shown only because the game was lost.
    pub missed: bool,
}

/// A stakes entry and whether it has fallen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeStatus<'a> {
    /// The entry.
    pub entry: &'a StakesEntry,
    /// Eliminated by a wrong guess.
    pub eliminated: bool,
}

/// The headline status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Nothing to announce.
    None,
    /// A stake just fell; carries its farewell line.
    Farewell(String),
    /// Game won.
    Victory,
    /// Game lost.
    Defeat,
}

impl Banner {
    /// Heading text, if the banner has one.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Banner::Victory => Some("Victory!"),
            Banner::Defeat => Some("Defeat!"),
            Banner::None | Banner::Farewell(_) => None,
        }
    }

    /// Body text.
    pub fn message(&self) -> Option<&str> {
        match self {
            Banner::None => None,
            Banner::Farewell(line) => Some(line),
            Banner::Victory => Some("console.log('Victory') 🎉"),
            Banner::Defeat => Some("Stack overflowed... and so did your chances."),
        }
    }
}

impl<S, R> GameSession<S, R> {
    /// Whether the word position holding `letter` is shown: guessed, or
    /// everything is revealed after a loss.
    pub fn letter_visible(&self, letter: Letter) -> bool {
        self.guessed().contains(letter) || self.is_lost()
    }

    /// Status of one keyboard key.
    pub fn key_status(&self, letter: Letter) -> KeyStatus {
        if !self.guessed().contains(letter) {
            KeyStatus::Unguessed
        } else if self.word().contains(letter) {
            KeyStatus::Correct
        } else {
            KeyStatus::Wrong
        }
    }

    /// All 26 keys with their status.
    pub fn keyboard(&self) -> Vec<(Letter, KeyStatus)> {
        Letter::alphabet()
            .map(|letter| (letter, self.key_status(letter)))
            .collect()
    }

    /// The word, position by position.
    pub fn revealed_word(&self) -> Vec<RevealedLetter> {
        self.word()
            .letters()
            .map(|letter| {
                let guessed = self.guessed().contains(letter);
                RevealedLetter {
                    letter,
                    visible: self.letter_visible(letter),
                    missed: self.is_lost() && !guessed,
                }
            })
            .collect()
    }

    /// The ladder with elimination marks. Entry `i` falls once
    /// `wrong_count > i`.
    pub fn stakes(&self) -> Vec<StakeStatus<'_>> {
        let wrong = self.wrong_count();
        self.rulebook()
            .ladder()
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| StakeStatus {
                entry,
                eliminated: index < wrong,
            })
            .collect()
    }

    /// What the status area should show.
    pub fn banner(&self) -> Banner {
        if let Some(line) = self.farewell() {
            return Banner::Farewell(line);
        }
        match self.phase() {
            GamePhase::Won => Banner::Victory,
            GamePhase::Lost => Banner::Defeat,
            GamePhase::InProgress => Banner::None,
        }
    }

    /// Screen-reader text about the latest guess. None before any guess.
    pub fn announcement(&self) -> Option<String> {
        let letter = self.last_guessed_letter()?;
        let verdict = if self.word().contains(letter) {
            format!("Correct! The letter {letter} is in the word.")
        } else {
            format!("Sorry, the letter {letter} is not in the word.")
        };
        Some(format!(
            "{verdict} You have {} attempts left.",
            self.attempts_remaining()
        ))
    }

    /// Screen-reader rendering of the word: `c. blank. t.`
    pub fn word_description(&self) -> String {
        self.word()
            .letters()
            .map(|letter| {
                if self.guessed().contains(letter) {
                    format!("{letter}.")
                } else {
                    String::from("blank.")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
