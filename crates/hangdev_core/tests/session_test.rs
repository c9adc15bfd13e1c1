//! Tests for the game session state machine.

use hangdev_core::{
    GamePhase, GameSession, GuessOutcome, Letter, MemoryStore, NarratorMap, Rulebook, StakesLadder,
    Word, WordBank,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session(word: &str) -> GameSession<MemoryStore, StdRng> {
    GameSession::with_word(
        Rulebook::default(),
        MemoryStore::new(),
        StdRng::seed_from_u64(11),
        Word::new(word).expect("valid word"),
    )
}

fn guessed(game: &GameSession<MemoryStore, StdRng>) -> String {
    game.guessed().iter().map(Letter::as_char).collect()
}

#[test]
fn test_repeat_guess_is_idempotent() {
    for c in hangdev_core::ALPHABET.chars() {
        let input = c.to_string();
        let mut once = session("rust");
        once.guess_letter(&input).expect("valid");

        let mut twice = session("rust");
        twice.guess_letter(&input).expect("valid");
        let second = twice.guess_letter(&input).expect("valid");

        assert!(matches!(second, GuessOutcome::AlreadyGuessed(_)));
        assert_eq!(once.wrong_count(), twice.wrong_count());
        assert_eq!(guessed(&once), guessed(&twice));
    }
}

#[test]
fn test_win_is_order_independent() {
    let orders = [["p", "a", "r", "s", "e"], ["e", "s", "r", "a", "p"], ["r", "e", "p", "s", "a"]];
    for order in orders {
        let mut game = session("parser");
        for guess in order {
            game.guess_letter(guess).expect("valid");
        }
        assert!(game.is_won(), "order {order:?} should win");
        assert_eq!(game.phase(), GamePhase::Won);
    }
}

#[test]
fn test_cat_scenario() {
    let mut game = session("cat");
    assert_eq!(game.attempts_allowed(), 8);

    game.guess_letter("a").expect("valid");
    game.guess_letter("t").expect("valid");
    assert!(!game.is_won());
    assert_eq!(game.wrong_count(), 0);

    game.guess_letter("c").expect("valid");
    assert!(game.is_won());
    assert!(game.is_over());
}

#[test]
fn test_dog_scenario_freezes_after_loss() {
    let mut game = session("dog");
    for guess in ["x", "y", "z", "q", "w", "v", "u", "r"] {
        assert!(!game.is_lost());
        game.guess_letter(guess).expect("valid");
    }
    assert!(game.is_lost());
    assert_eq!(game.wrong_count(), 8);

    let outcome = game.guess_letter("b").expect("valid");
    assert_eq!(outcome, GuessOutcome::GameOver);
    assert_eq!(guessed(&game), "xyzqwvur");
    assert_eq!(game.wrong_count(), 8);
}

#[test]
fn test_terminal_states_reject_correct_letters_too() {
    let mut game = session("dog");
    for guess in ["a", "b", "c", "e", "f", "h", "i", "j"] {
        game.guess_letter(guess).expect("valid");
    }
    assert!(game.is_lost());
    assert_eq!(game.guess_letter("d"), Ok(GuessOutcome::GameOver));
    assert!(!game.is_won());

    let mut won = session("go");
    won.guess_letter("g").expect("valid");
    won.guess_letter("o").expect("valid");
    assert_eq!(won.guess_letter("x"), Ok(GuessOutcome::GameOver));
    assert_eq!(won.wrong_count(), 0);
}

#[test]
fn test_invalid_input_rejected_without_mutation() {
    let mut game = session("dog");
    game.guess_letter("d").expect("valid");
    for bad in ["D", "do", "", "1", "-", " "] {
        let err = game.guess_letter(bad).expect_err("should reject");
        assert_eq!(err.input, bad);
    }
    assert_eq!(guessed(&game), "d");
}

#[test]
fn test_last_guess_tracking() {
    let mut game = session("dog");
    assert_eq!(game.last_guessed_letter(), None);
    assert!(!game.last_guess_was_wrong());

    game.guess_letter("k").expect("valid");
    assert_eq!(game.last_guessed_letter().map(Letter::as_char), Some('k'));
    assert!(game.last_guess_was_wrong());

    game.guess_letter("o").expect("valid");
    assert!(!game.last_guess_was_wrong());

    // A repeated wrong guess does not move "last" back.
    game.guess_letter("k").expect("valid");
    assert_eq!(game.last_guessed_letter().map(Letter::as_char), Some('o'));
}

#[test]
fn test_new_game_draws_from_bank() {
    let rulebook = Rulebook::new(
        WordBank::new(["alpha", "beta"]).expect("valid bank"),
        StakesLadder::builtin(),
        NarratorMap::builtin(),
    );
    let mut game = GameSession::with_word(
        rulebook,
        MemoryStore::new(),
        StdRng::seed_from_u64(5),
        Word::new("dog").expect("valid word"),
    );
    for guess in ["a", "b", "c", "e", "f", "h", "i", "j"] {
        game.guess_letter(guess).expect("valid");
    }
    assert!(game.is_lost());

    game.start_new_game();
    assert!(["alpha", "beta"].contains(&game.word().as_str()));
    assert!(game.guessed().is_empty());
    assert_eq!(game.phase(), GamePhase::InProgress);
}

#[test]
fn test_short_ladder_limits_attempts() {
    let ladder = StakesLadder::new(StakesLadder::builtin().entries()[..3].to_vec())
        .expect("valid ladder");
    let rulebook = Rulebook::new(WordBank::builtin(), ladder, NarratorMap::builtin());
    let mut game = GameSession::with_word(
        rulebook,
        MemoryStore::new(),
        StdRng::seed_from_u64(5),
        Word::new("dog").expect("valid word"),
    );
    assert_eq!(game.attempts_allowed(), 2);
    game.guess_letter("x").expect("valid");
    assert!(!game.is_lost());
    game.guess_letter("y").expect("valid");
    assert!(game.is_lost());
    assert_eq!(game.attempts_remaining(), 0);
}

#[test]
fn test_farewell_texts() {
    let narrator = NarratorMap::builtin();
    assert_eq!(narrator.farewell("Unknown-Label"), "Farewell, Unknown-Label");
    assert_eq!(narrator.farewell("Python"), "IndentationError: Developer lost.");
    assert_eq!(narrator.farewell("React"), "No more hooks... only regrets.");
}
