//! Tests for restoring sessions from a key-value store.

use hangdev_core::{
    CURRENT_WORD_KEY, GUESSED_LETTERS_KEY, GamePhase, GameSession, LoadSource, MemoryStore,
    PersistenceAdapter, Rulebook, Word, WordBank,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(99)
}

fn store_with(word: &str, guesses: &str) -> MemoryStore {
    MemoryStore::with_values([(CURRENT_WORD_KEY, word), (GUESSED_LETTERS_KEY, guesses)])
}

#[test]
fn test_save_then_load_round_trips() {
    let mut game = GameSession::with_word(
        Rulebook::default(),
        MemoryStore::new(),
        rng(),
        Word::new("closure").expect("valid word"),
    );
    for guess in ["e", "z", "c", "q"] {
        game.guess_letter(guess).expect("valid");
    }
    let before = game.state().clone();

    let reloaded = GameSession::load(Rulebook::default(), game.into_store(), rng());
    assert_eq!(reloaded.load_source(), LoadSource::Restored);
    assert_eq!(reloaded.state(), &before);
    assert_eq!(reloaded.wrong_count(), 2);
    assert_eq!(reloaded.last_guessed_letter(), before.last_guessed_letter());
}

#[test]
fn test_restored_finished_game_stays_finished() {
    let store = store_with("go", r#"["g","o"]"#);
    let mut game = GameSession::load(Rulebook::default(), store, rng());
    assert_eq!(game.phase(), GamePhase::Won);
    assert!(!game.guess_letter("x").expect("valid").is_applied());
}

#[test]
fn test_unparseable_guesses_start_fresh() {
    let store = store_with("dog", "{{not json");
    let game = GameSession::load(Rulebook::default(), store, rng());
    assert_eq!(game.load_source(), LoadSource::Fresh);
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert!(game.guessed().is_empty());
}

#[test]
fn test_partially_valid_state_discards_word_too() {
    let rulebook = Rulebook::new(
        WordBank::new(["fresh"]).expect("valid bank"),
        Default::default(),
        Default::default(),
    );
    let store = store_with("dog", r#"["d", 7]"#);
    let game = GameSession::load(rulebook, store, rng());
    assert_eq!(game.word().as_str(), "fresh");
    assert!(game.guessed().is_empty());
}

#[test]
fn test_invalid_word_starts_fresh() {
    for word in ["", "Dog", "d0g", "hello world"] {
        let game = GameSession::load(Rulebook::default(), store_with(word, "[]"), rng());
        assert_eq!(game.load_source(), LoadSource::Fresh, "{word:?} should be rejected");
    }
}

#[test]
fn test_missing_keys_start_fresh_and_persist() {
    let game = GameSession::load(Rulebook::default(), MemoryStore::new(), rng());
    assert_eq!(game.load_source(), LoadSource::Fresh);

    let store = game.store();
    assert_eq!(store.get(CURRENT_WORD_KEY).as_deref(), Some(game.word().as_str()));
    assert_eq!(store.get(GUESSED_LETTERS_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_duplicate_stored_guesses_start_fresh() {
    let game = GameSession::load(Rulebook::default(), store_with("dog", r#"["o","o"]"#), rng());
    assert_eq!(game.load_source(), LoadSource::Fresh);
}

#[test]
fn test_session_over_borrowed_store() {
    let mut store = MemoryStore::new();
    {
        let mut game = GameSession::with_word(
            Rulebook::default(),
            &mut store,
            rng(),
            Word::new("heap").expect("valid word"),
        );
        game.guess_letter("h").expect("valid");
    }
    assert_eq!(store.get(GUESSED_LETTERS_KEY).as_deref(), Some(r#"["h"]"#));
}
