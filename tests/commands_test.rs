//! Tests for the one-shot commands against a saved game on disk.

use hangdev::{FileStore, HangDevConfig, commands};
use hangdev_core::{
    CURRENT_WORD_KEY, GUESSED_LETTERS_KEY, GamePhase, LoadSource, PersistenceAdapter,
};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> HangDevConfig {
    HangDevConfig::default().with_store_path(dir.path().join("store.json"))
}

fn seed(config: &HangDevConfig, word: &str, guesses: &str) {
    let mut store = FileStore::open(config.store_path());
    store.set(CURRENT_WORD_KEY, word);
    store.set(GUESSED_LETTERS_KEY, guesses);
}

#[test]
fn test_first_run_starts_fresh_and_saves() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);

    let session = commands::open_session(&config).expect("open");
    assert_eq!(session.load_source(), LoadSource::Fresh);

    let store = FileStore::open(config.store_path());
    assert_eq!(store.get(CURRENT_WORD_KEY).as_deref(), Some(session.word().as_str()));
}

#[test]
fn test_guess_survives_reload() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    seed(&config, "mutex", "[]");

    let mut session = commands::open_session(&config).expect("open");
    let output = commands::guess(&mut session, "x").expect("guess");
    assert!(output.starts_with("'x' is in the word."));
    drop(session);

    let session = commands::open_session(&config).expect("reopen");
    assert_eq!(session.load_source(), LoadSource::Restored);
    assert_eq!(session.word().as_str(), "mutex");
    assert_eq!(session.guessed().len(), 1);
}

#[test]
fn test_invalid_guess_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    seed(&config, "mutex", "[]");

    let mut session = commands::open_session(&config).expect("open");
    assert!(commands::guess(&mut session, "XY").is_err());
    assert!(session.guessed().is_empty());
}

#[test]
fn test_uppercase_guess_is_lowercased() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    seed(&config, "mutex", "[]");

    let mut session = commands::open_session(&config).expect("open");
    let output = commands::guess(&mut session, "E").expect("guess");
    assert!(output.starts_with("'e' is in the word."));
    assert_eq!(session.guessed().len(), 1);
}

#[test]
fn test_guess_after_loss_reports_game_over() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    seed(&config, "dog", r#"["a","b","c","e","f","h","i","j"]"#);

    let mut session = commands::open_session(&config).expect("open");
    assert_eq!(session.phase(), GamePhase::Lost);
    let output = commands::guess(&mut session, "d").expect("guess");
    assert!(output.starts_with("The game is over."));
    assert!(output.contains("Defeat!"));
}

#[test]
fn test_new_game_clears_guesses_on_disk() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    seed(&config, "dog", r#"["d","o","g"]"#);

    let mut session = commands::open_session(&config).expect("open");
    assert_eq!(session.phase(), GamePhase::Won);
    commands::new_game(&mut session);

    let store = FileStore::open(config.store_path());
    assert_eq!(store.get(GUESSED_LETTERS_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_corrupt_saved_guesses_recover() {
    let dir = TempDir::new().expect("temp dir");
    let config = config_in(&dir);
    seed(&config, "dog", "oops");

    let session = commands::open_session(&config).expect("open");
    assert_eq!(session.load_source(), LoadSource::Fresh);
    assert!(session.guessed().is_empty());
    assert!(commands::status(&session).contains("InProgress"));
}
