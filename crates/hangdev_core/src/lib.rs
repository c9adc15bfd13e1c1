//! HangDev core - the word-guessing game without any I/O.
//!
//! A hidden [`Word`] is revealed one [`Letter`] at a time. Each wrong guess
//! eliminates the next entry of the [`StakesLadder`]; when all but the last
//! entry are gone the game is lost.
//!
//! # Architecture
//!
//! - **WordBank**: corpus and uniform random selection
//! - **StakesLadder / NarratorMap**: attempt budget and farewell lines
//! - **GameSession**: the state machine, persisted through a
//!   [`PersistenceAdapter`] after every change
//! - **KeyRouter**: explicit subscribe/unsubscribe keyboard routing
//!
//! # Example
//!
//! ```
//! use hangdev_core::{GameSession, MemoryStore, Rulebook, Word};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut game = GameSession::with_word(
//!     Rulebook::default(),
//!     MemoryStore::new(),
//!     StdRng::seed_from_u64(1),
//!     Word::new("cat").expect("valid word"),
//! );
//! for guess in ["c", "a", "t"] {
//!     game.guess_letter(guess).expect("valid letter");
//! }
//! assert!(game.is_won());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod input;
mod letter;
mod narrator;
mod persistence;
mod session;
mod stakes;
mod state;
mod view;
mod word;
mod word_bank;

pub use input::{IgnoreReason, InputError, KeyDispatch, KeyRouter, SubscriptionId};
pub use letter::{ALPHABET, Letter, LetterError};
pub use narrator::NarratorMap;
pub use persistence::{
    CURRENT_WORD_KEY, CorruptState, GUESSED_LETTERS_KEY, MemoryStore, PersistenceAdapter,
    load_state, save_state,
};
pub use session::{GameSession, GuessOutcome, LoadSource, Rulebook};
pub use stakes::{Rgb, StakesEntry, StakesError, StakesLadder};
pub use state::{DuplicateLetter, GamePhase, GameState, GuessedLetters};
pub use view::{Banner, KeyStatus, RevealedLetter, StakeStatus};
pub use word::{Word, WordError};
pub use word_bank::{DEFAULT_WORDS, WordBank, WordBankError};
