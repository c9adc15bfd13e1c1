//! One-shot commands against the persisted session.

use crate::config::{ConfigError, HangDevConfig};
use crate::report::render_status;
use crate::store::FileStore;
use anyhow::Result;
use hangdev_core::{GameSession, GuessOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

/// The session type the application plays.
pub type Session = GameSession<FileStore, StdRng>;

/// Opens the store named by `config` and restores (or starts) the game.
///
/// # Errors
///
/// [`ConfigError`] if the word list or stakes are misconfigured.
#[instrument(skip(config), fields(store = %config.store_path().display()))]
pub fn open_session(config: &HangDevConfig) -> Result<Session, ConfigError> {
    let rulebook = config.rulebook()?;
    let store = FileStore::open(config.store_path());
    let session = GameSession::load(rulebook, store, StdRng::from_os_rng());
    info!(source = %session.load_source(), phase = %session.phase(), "Session ready");
    Ok(session)
}

/// Applies one guess and reports the result.
///
/// # Errors
///
/// Fails if `input` is not a single letter.
#[instrument(skip(session))]
pub fn guess(session: &mut Session, input: &str) -> Result<String> {
    let outcome = session.guess_letter(&input.trim().to_ascii_lowercase())?;
    let headline = match outcome {
        GuessOutcome::Correct(letter) => format!("'{letter}' is in the word."),
        GuessOutcome::Wrong(letter) => format!("'{letter}' is not in the word."),
        GuessOutcome::AlreadyGuessed(letter) => format!("'{letter}' was already guessed."),
        GuessOutcome::GameOver => "The game is over. Run `hangdev new` to play again.".to_string(),
    };
    Ok(format!("{headline}\n{}", render_status(session)))
}

/// Starts a new game and reports it.
#[instrument(skip(session))]
pub fn new_game(session: &mut Session) -> String {
    session.start_new_game();
    format!("New game started.\n{}", render_status(session))
}

/// Reports the current game.
pub fn status(session: &Session) -> String {
    render_status(session)
}
