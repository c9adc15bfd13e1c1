//! The game session: one live game, its content, and its store.

use crate::letter::{Letter, LetterError};
use crate::narrator::NarratorMap;
use crate::persistence::{PersistenceAdapter, load_state, save_state};
use crate::stakes::StakesLadder;
use crate::state::{GamePhase, GameState, GuessedLetters};
use crate::word::Word;
use crate::word_bank::WordBank;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Static content a session draws on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, new)]
pub struct Rulebook {
    /// Where words come from.
    bank: WordBank,
    /// What each wrong guess costs.
    ladder: StakesLadder,
    /// Last words for each stake.
    narrator: NarratorMap,
}

/// What a guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GuessOutcome {
    /// New letter, in the word.
    Correct(Letter),
    /// New letter, not in the word.
    Wrong(Letter),
    /// Letter was already guessed; nothing changed.
    AlreadyGuessed(Letter),
    /// The game had already ended; nothing changed.
    GameOver,
}

impl GuessOutcome {
    /// True when the guess changed the state.
    pub fn is_applied(self) -> bool {
        matches!(self, GuessOutcome::Correct(_) | GuessOutcome::Wrong(_))
    }
}

/// How the session's state came to be at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum LoadSource {
    /// Persisted state was well formed and restored as is.
    Restored,
    /// Persisted state was missing or corrupt; a fresh game was started.
    Fresh,
}

/// A single game session.
///
/// Owns the current [`GameState`] and writes it to the store after every
/// mutation. `S` is the store, `R` the random source used to draw words.
#[derive(Debug)]
pub struct GameSession<S, R> {
    state: GameState,
    rulebook: Rulebook,
    store: S,
    rng: R,
    load_source: LoadSource,
}

impl<S: PersistenceAdapter, R: Rng> GameSession<S, R> {
    /// Restores the session from `store`, or starts a fresh game if the
    /// stored word or guesses are missing or malformed.
    ///
    /// Recovery never fails: a corrupt store is logged and overwritten.
    #[instrument(skip_all)]
    pub fn load(rulebook: Rulebook, mut store: S, mut rng: R) -> Self {
        let (state, load_source) = match load_state(&store) {
            Ok(state) => {
                info!(
                    guesses = state.guessed().len(),
                    "Restored persisted game"
                );
                (state, LoadSource::Restored)
            }
            Err(reason) => {
                warn!(%reason, "Persisted game unusable, starting fresh");
                let state = GameState::new(rulebook.bank().pick_random(&mut rng));
                save_state(&mut store, &state);
                (state, LoadSource::Fresh)
            }
        };

        Self {
            state,
            rulebook,
            store,
            rng,
            load_source,
        }
    }

    /// Starts a fresh game with a specific word, ignoring whatever `store`
    /// holds. The new state is written immediately.
    #[instrument(skip_all, fields(word = %word))]
    pub fn with_word(rulebook: Rulebook, mut store: S, rng: R, word: Word) -> Self {
        let state = GameState::new(word);
        save_state(&mut store, &state);
        Self {
            state,
            rulebook,
            store,
            rng,
            load_source: LoadSource::Fresh,
        }
    }

    /// Guesses from raw input, which must be exactly one lowercase letter.
    ///
    /// # Errors
    ///
    /// [`LetterError`] if the input is anything else. The state is untouched.
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, input: &str) -> Result<GuessOutcome, LetterError> {
        let letter = Letter::parse(input).inspect_err(|e| debug!(error = %e, "Guess rejected"))?;
        Ok(self.guess(letter))
    }

    /// Applies a validated guess.
    ///
    /// Once the game is over, and for letters already guessed, this is a
    /// no-op that reports why.
    #[instrument(skip(self), fields(letter = %letter))]
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            debug!("Game already over, guess ignored");
            return GuessOutcome::GameOver;
        }
        if !self.state.guessed_mut().insert(letter) {
            debug!("Letter already guessed");
            return GuessOutcome::AlreadyGuessed(letter);
        }

        save_state(&mut self.store, &self.state);

        let outcome = if self.state.word().contains(letter) {
            GuessOutcome::Correct(letter)
        } else {
            GuessOutcome::Wrong(letter)
        };
        info!(
            %outcome,
            wrong = self.wrong_count(),
            phase = %self.phase(),
            "Guess applied"
        );
        outcome
    }

    /// Replaces the game with a freshly drawn word and no guesses, whatever
    /// state the current game is in.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        let word = self.rulebook.bank().pick_random(&mut self.rng);
        self.state = GameState::new(word);
        save_state(&mut self.store, &self.state);
        info!("New game started");
    }
}

impl<S, R> GameSession<S, R> {
    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The hidden word.
    pub fn word(&self) -> &Word {
        self.state.word()
    }

    /// Guesses so far.
    pub fn guessed(&self) -> &GuessedLetters {
        self.state.guessed()
    }

    /// Content the session plays with.
    pub fn rulebook(&self) -> &Rulebook {
        &self.rulebook
    }

    /// Whether startup restored a stored game.
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The backing store, for keys the game does not own.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the session, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Wrong guesses tolerated before loss.
    pub fn attempts_allowed(&self) -> usize {
        self.rulebook.ladder().attempts_allowed()
    }

    /// Wrong guesses left before loss.
    pub fn attempts_remaining(&self) -> usize {
        self.attempts_allowed().saturating_sub(self.wrong_count())
    }

    /// Guesses not in the word. Also the index of the next stake to fall.
    pub fn wrong_count(&self) -> usize {
        self.state.wrong_count()
    }

    /// Every letter found.
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Budget exhausted.
    pub fn is_lost(&self) -> bool {
        self.state.is_lost(self.attempts_allowed())
    }

    /// Won or lost; no further guess has any effect.
    pub fn is_over(&self) -> bool {
        self.state.is_over(self.attempts_allowed())
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase(self.attempts_allowed())
    }

    /// Most recent guess.
    pub fn last_guessed_letter(&self) -> Option<Letter> {
        self.state.last_guessed_letter()
    }

    /// The most recent guess missed.
    pub fn last_guess_was_wrong(&self) -> bool {
        self.state.last_guess_was_wrong()
    }

    /// Farewell for the stake the latest wrong guess eliminated.
    ///
    /// Only present while the game is still running and the last guess
    /// missed.
    pub fn farewell(&self) -> Option<String> {
        if self.is_over() || !self.last_guess_was_wrong() {
            return None;
        }
        let index = self.wrong_count().checked_sub(1)?;
        let entry = self.rulebook.ladder().get(index)?;
        Some(self.rulebook.narrator().farewell(entry.label()))
    }
}
