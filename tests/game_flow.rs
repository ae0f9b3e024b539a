//! End-to-end game sessions through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::{LetterResult, ScoringRule, Word};
use wordle_game::dictionary::Dictionary;
use wordle_game::game::{
    GameState, GameStatus, GuessError, InputEffect, InputToken, MAX_ATTEMPTS, Row,
};

fn press_keys(game: &mut GameState<'_>, keys: &[&str]) -> Vec<InputEffect> {
    keys.iter()
        .filter_map(|key| InputToken::from_key(key))
        .map(|token| game.apply(token))
        .collect()
}

fn type_and_submit(game: &mut GameState<'_>, word: &str) -> InputEffect {
    for c in word.chars() {
        game.apply(InputToken::Letter(c));
    }
    game.apply(InputToken::Enter)
}

#[test]
fn seeded_games_draw_the_same_solution() {
    let dictionary = Dictionary::embedded();
    let a = GameState::start(&dictionary, ScoringRule::Standard, &mut StdRng::seed_from_u64(99))
        .unwrap();
    let b = GameState::start(&dictionary, ScoringRule::Standard, &mut StdRng::seed_from_u64(99))
        .unwrap();

    assert_eq!(a.solution(), b.solution());
    assert!(dictionary.contains(a.solution().text()));
}

#[test]
fn full_session_from_key_names() {
    let dictionary = Dictionary::embedded();
    let mut game = GameState::with_solution(
        &dictionary,
        Word::new("speed").unwrap(),
        ScoringRule::Standard,
    );

    // Shift and digits are dropped before reaching the game
    let effects = press_keys(&mut game, &["Shift", "E", "r", "1", "a", "s", "e", "Enter"]);
    let Some(InputEffect::Submitted(outcome)) = effects.last() else {
        panic!("expected a submission, got {effects:?}");
    };

    use LetterResult::{Absent, Present};
    assert_eq!(
        outcome.feedback.results(),
        &[Present, Absent, Absent, Present, Present]
    );

    // R and A are out; E and S stay available
    let excluded: Vec<char> = game.excluded_letters().iter().copied().collect();
    assert_eq!(excluded, ['a', 'r']);

    match type_and_submit(&mut game, "speed") {
        InputEffect::Submitted(outcome) => {
            assert!(outcome.feedback.is_perfect());
            assert_eq!(outcome.status, GameStatus::Won);
            assert!(outcome.is_final_guess);
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn unknown_word_can_be_corrected_in_place() {
    let dictionary = Dictionary::embedded();
    let mut game = GameState::with_solution(
        &dictionary,
        Word::new("crane").unwrap(),
        ScoringRule::Standard,
    );

    assert_eq!(
        type_and_submit(&mut game, "slatx"),
        InputEffect::Rejected(GuessError::UnknownWord("slatx".to_string()))
    );
    assert_eq!(game.buffer(), "slatx");

    game.apply(InputToken::Backspace);
    assert!(matches!(
        type_and_submit(&mut game, "e"),
        InputEffect::Submitted(_)
    ));
    assert_eq!(game.attempts_used(), 1);
}

#[test]
fn excluded_letters_only_grow() {
    let dictionary = Dictionary::embedded();
    let mut game = GameState::with_solution(
        &dictionary,
        Word::new("audio").unwrap(),
        ScoringRule::Standard,
    );

    let mut previous = game.excluded_letters().clone();
    for guess in ["crane", "slate", "about", "radio", "guard", "upper"] {
        game.submit_guess(guess).unwrap();
        let current = game.excluded_letters().clone();
        assert!(current.is_superset(&previous), "shrank after {guess}");
        previous = current;
    }
}

#[test]
fn six_misses_then_rejection() {
    let dictionary = Dictionary::embedded();
    let mut game = GameState::with_solution(
        &dictionary,
        Word::new("audio").unwrap(),
        ScoringRule::Legacy,
    );

    for guess in ["crane", "slate", "irate", "crate", "grate", "speed"] {
        game.submit_guess(guess).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.guesses().len(), MAX_ATTEMPTS);

    let before = game.snapshot();
    assert_eq!(game.submit_guess("audio"), Err(GuessError::GameAlreadyOver));
    assert_eq!(game.snapshot(), before);
    assert_eq!(before.solution_reveal.as_deref(), Some("audio"));
    assert!(before.rows.iter().all(|row| matches!(row, Row::Scored(_))));
}

#[test]
fn reset_after_loss_starts_over() {
    let dictionary = Dictionary::embedded();
    let mut rng = StdRng::seed_from_u64(1234);
    let mut game = GameState::start(&dictionary, ScoringRule::Standard, &mut rng).unwrap();

    let wrong = if game.solution().text() == "crane" { "slate" } else { "crane" };
    for _ in 0..MAX_ATTEMPTS {
        game.submit_guess(wrong).unwrap();
    }
    assert!(game.is_over());

    let game = game.reset(&mut rng).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
    assert_eq!(game.snapshot().rows[0], Row::Pending(String::new()));
}
