//! Game state and its mutation entry points

use super::error::GuessError;
use super::input::{InputEffect, InputToken};
use super::snapshot::{BoardSnapshot, Row};
use crate::core::{Feedback, LetterResult, ScoringRule, WORD_LENGTH, Word};
use crate::dictionary::{Dictionary, DictionaryError};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, info, trace};

/// Number of guesses a player gets
pub const MAX_ATTEMPTS: usize = 6;

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// An accepted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
    /// True when this guess ended the game
    pub is_final_guess: bool,
}

/// State of a single game session
///
/// Borrows the dictionary it validates guesses against, the same way a solver
/// borrows its word lists. Once the game is won or lost only `delete_char`
/// still has any effect.
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    dictionary: &'a Dictionary,
    rule: ScoringRule,
    solution: Word,
    guesses: Vec<ScoredGuess>,
    buffer: String,
    status: GameStatus,
    excluded: BTreeSet<char>,
}

impl<'a> GameState<'a> {
    /// Start a game with a solution drawn uniformly from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the dictionary has no words.
    pub fn start<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        rule: ScoringRule,
        rng: &mut R,
    ) -> Result<Self, DictionaryError> {
        let solution = dictionary.random_word(rng)?.clone();
        Ok(Self::with_solution(dictionary, solution, rule))
    }

    /// Start a game with a known solution
    #[must_use]
    pub fn with_solution(dictionary: &'a Dictionary, solution: Word, rule: ScoringRule) -> Self {
        info!(rule = %rule, dictionary = dictionary.len(), "game started");
        trace!(solution = %solution, "solution drawn");

        Self {
            dictionary,
            rule,
            solution,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            buffer: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
            excluded: BTreeSet::new(),
        }
    }

    /// Discard this game and start a fresh one on the same dictionary and rule
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the dictionary has no words.
    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, DictionaryError> {
        Self::start(self.dictionary, self.rule, rng)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    /// The in-progress guess
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Letters that scored Absent in any accepted guess
    #[must_use]
    pub const fn excluded_letters(&self) -> &BTreeSet<char> {
        &self.excluded
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.guesses.len()
    }

    /// Submit a full guess
    ///
    /// Checks run in order and the first failure wins: game over, wrong
    /// length, not in the dictionary. A rejected guess changes nothing,
    /// including the buffer.
    ///
    /// # Errors
    ///
    /// Returns the matching `GuessError` variant when the guess is rejected.
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            debug!(guess, "rejected guess: game over");
            return Err(GuessError::GameAlreadyOver);
        }

        if guess.chars().count() != WORD_LENGTH {
            debug!(guess, "rejected guess: incomplete");
            return Err(GuessError::IncompleteGuess);
        }

        let Some(word) = self.dictionary.get(guess) else {
            debug!(guess, "rejected guess: not in dictionary");
            return Err(GuessError::UnknownWord(guess.to_lowercase()));
        };

        let feedback = self.rule.score(&word, &self.solution);

        // Any Absent occurrence excludes the letter, even if another
        // occurrence of it scored Correct or Present.
        for (&letter, &result) in word.chars().iter().zip(feedback.results()) {
            if result == LetterResult::Absent {
                self.excluded.insert(char::from(letter));
            }
        }

        let solved = word == self.solution;
        self.guesses.push(ScoredGuess { word, feedback });
        self.buffer.clear();

        if solved {
            self.status = GameStatus::Won;
        } else if self.guesses.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        debug!(
            attempt = self.guesses.len(),
            feedback = %feedback,
            status = ?self.status,
            "guess accepted"
        );

        Ok(GuessOutcome {
            feedback,
            status: self.status,
            is_final_guess: self.is_over(),
        })
    }

    /// Submit the in-progress buffer
    ///
    /// # Errors
    ///
    /// See [`GameState::submit_guess`].
    pub fn submit(&mut self) -> Result<GuessOutcome, GuessError> {
        let guess = self.buffer.clone();
        self.submit_guess(&guess)
    }

    /// Append a letter to the buffer
    ///
    /// Ignored once the game is over, when the buffer is full, or for
    /// anything but an ASCII letter. Returns whether the buffer changed.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.is_over() || self.buffer.len() >= WORD_LENGTH || !c.is_ascii_alphabetic() {
            return false;
        }
        self.buffer.push(c.to_ascii_lowercase());
        true
    }

    /// Remove the last buffered letter
    ///
    /// Allowed after the game ends; returns whether the buffer changed.
    pub fn delete_char(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Apply one input token
    pub fn apply(&mut self, token: InputToken) -> InputEffect {
        let edited = match token {
            InputToken::Letter(c) => self.append_char(c),
            InputToken::Backspace => self.delete_char(),
            InputToken::Enter => {
                return match self.submit() {
                    Ok(outcome) => InputEffect::Submitted(outcome),
                    Err(err) => InputEffect::Rejected(err),
                };
            }
        };

        if edited {
            InputEffect::Edited
        } else {
            InputEffect::Ignored
        }
    }

    /// Read-only view of the board for rendering
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut rows: Vec<Row> = self.guesses.iter().cloned().map(Row::Scored).collect();

        if !self.is_over() {
            rows.push(Row::Pending(self.buffer.clone()));
        }
        rows.resize(MAX_ATTEMPTS, Row::Empty);

        let used = self
            .guesses
            .iter()
            .flat_map(|guess| guess.word.chars().iter().copied().map(char::from))
            .collect();

        BoardSnapshot {
            rows,
            excluded: self.excluded.clone(),
            used,
            status: self.status,
            attempts_used: self.guesses.len(),
            solution_reveal: (self.status == GameStatus::Lost)
                .then(|| self.solution.text().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "speed", "erase", "audio", "robot", "floor",
        "eerie",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::from_words(words_from_slice(WORDS))
    }

    fn game<'a>(dictionary: &'a Dictionary, solution: &str) -> GameState<'a> {
        GameState::with_solution(
            dictionary,
            Word::new(solution).unwrap(),
            ScoringRule::Standard,
        )
    }

    fn type_word(state: &mut GameState<'_>, word: &str) {
        for c in word.chars() {
            state.append_char(c);
        }
    }

    #[test]
    fn state_outlives_the_solution_text() {
        let dictionary = dictionary();
        let mut state = {
            let solution = String::from("CRANE");
            game(&dictionary, &solution)
        };

        assert_eq!(state.solution().text(), "crane");
        let outcome = state.submit_guess("crane").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
    }

    #[test]
    fn start_draws_from_dictionary() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let state = GameState::start(&dictionary, ScoringRule::Standard, &mut rng).unwrap();

        assert!(dictionary.contains(state.solution().text()));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn start_on_empty_dictionary_fails() {
        let dictionary = Dictionary::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            GameState::start(&dictionary, ScoringRule::Standard, &mut rng),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn incomplete_guess_is_rejected_without_change() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");
        type_word(&mut state, "cra");

        assert_eq!(state.submit(), Err(GuessError::IncompleteGuess));
        assert_eq!(state.buffer(), "cra");
        assert!(state.guesses().is_empty());
    }

    #[test]
    fn unknown_word_keeps_buffer() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");
        type_word(&mut state, "zzzzz");

        assert_eq!(
            state.submit(),
            Err(GuessError::UnknownWord("zzzzz".to_string()))
        );
        assert_eq!(state.buffer(), "zzzzz");
        assert!(state.guesses().is_empty());
        assert!(state.excluded_letters().is_empty());
    }

    #[test]
    fn game_over_check_comes_first() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");
        state.submit_guess("crane").unwrap();

        // Even a malformed guess reports the game as over
        assert_eq!(state.submit_guess("ab"), Err(GuessError::GameAlreadyOver));
        assert_eq!(state.submit_guess("qqqqq"), Err(GuessError::GameAlreadyOver));
    }

    #[test]
    fn accepted_guess_is_scored_and_clears_buffer() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "slate");
        type_word(&mut state, "CRANE");

        let outcome = state.submit().unwrap();
        assert_eq!(outcome.feedback.to_string(), "--G-G");
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert!(!outcome.is_final_guess);

        assert_eq!(state.buffer(), "");
        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.guesses()[0].word.text(), "crane");
    }

    #[test]
    fn absent_letters_are_excluded() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "slate");
        state.submit_guess("crane").unwrap();

        let excluded: Vec<char> = state.excluded_letters().iter().copied().collect();
        assert_eq!(excluded, ['c', 'n', 'r']);
    }

    #[test]
    fn absent_duplicate_excludes_letter_even_when_also_correct() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");

        // EERIE vs CRANE: final E is green, the first two are absent
        state.submit_guess("eerie").unwrap();
        assert!(state.excluded_letters().contains(&'e'));
        assert!(state.excluded_letters().contains(&'i'));
        assert!(!state.excluded_letters().contains(&'r'));
    }

    #[test]
    fn correct_guess_wins() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "audio");
        state.submit_guess("crane").unwrap();

        let outcome = state.submit_guess("AUDIO").unwrap();
        assert!(outcome.feedback.is_perfect());
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(outcome.is_final_guess);
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn six_misses_lose() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "audio");

        for (i, guess) in ["crane", "slate", "irate", "crate", "grate"].iter().enumerate() {
            let outcome = state.submit_guess(guess).unwrap();
            assert_eq!(outcome.status, GameStatus::InProgress, "guess {i}");
        }

        let outcome = state.submit_guess("speed").unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert!(outcome.is_final_guess);
        assert_eq!(state.attempts_remaining(), 0);

        assert_eq!(state.submit_guess("audio"), Err(GuessError::GameAlreadyOver));
        assert_eq!(state.guesses().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_on_last_attempt_beats_loss() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "audio");

        for guess in ["crane", "slate", "irate", "crate", "grate"] {
            state.submit_guess(guess).unwrap();
        }

        let outcome = state.submit_guess("audio").unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
    }

    #[test]
    fn rejection_after_game_over_is_idempotent() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");
        state.submit_guess("crane").unwrap();

        let guesses_before = state.guesses().to_vec();
        let excluded_before = state.excluded_letters().clone();

        for _ in 0..3 {
            assert_eq!(state.submit_guess("slate"), Err(GuessError::GameAlreadyOver));
        }
        assert_eq!(state.guesses(), guesses_before.as_slice());
        assert_eq!(state.excluded_letters(), &excluded_before);
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn buffer_never_exceeds_five() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");

        type_word(&mut state, "abcdefgh");
        assert_eq!(state.buffer(), "abcde");
        assert!(!state.append_char('z'));
    }

    #[test]
    fn append_rejects_non_letters() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");

        assert!(!state.append_char('1'));
        assert!(!state.append_char(' '));
        assert!(!state.append_char('\u{e9}'));
        assert!(state.append_char('Q'));
        assert_eq!(state.buffer(), "q");
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");

        assert!(!state.delete_char());
        state.append_char('a');
        assert!(state.delete_char());
        assert!(!state.delete_char());
        assert_eq!(state.buffer(), "");
    }

    #[test]
    fn append_is_blocked_after_game_over_but_delete_is_not() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");
        state.submit_guess("crane").unwrap();

        assert!(!state.append_char('a'));
        assert_eq!(state.buffer(), "");
        assert!(!state.delete_char());
        assert_eq!(state.apply(InputToken::Backspace), InputEffect::Ignored);
    }

    #[test]
    fn apply_routes_tokens() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "slate");

        assert_eq!(state.apply(InputToken::Backspace), InputEffect::Ignored);
        for c in "crane".chars() {
            assert_eq!(state.apply(InputToken::Letter(c)), InputEffect::Edited);
        }
        assert_eq!(state.apply(InputToken::Letter('x')), InputEffect::Ignored);

        match state.apply(InputToken::Enter) {
            InputEffect::Submitted(outcome) => {
                assert_eq!(outcome.status, GameStatus::InProgress);
            }
            other => panic!("expected submission, got {other:?}"),
        }

        assert_eq!(
            state.apply(InputToken::Enter),
            InputEffect::Rejected(GuessError::IncompleteGuess)
        );
    }

    #[test]
    fn reset_starts_fresh_game() {
        let dictionary = dictionary();
        let mut state = game(&dictionary, "crane");
        state.submit_guess("slate").unwrap();
        type_word(&mut state, "ab");

        let mut rng = StdRng::seed_from_u64(9);
        let fresh = state.reset(&mut rng).unwrap();

        assert_eq!(fresh.status(), GameStatus::InProgress);
        assert!(fresh.guesses().is_empty());
        assert_eq!(fresh.buffer(), "");
        assert!(fresh.excluded_letters().is_empty());
        assert_eq!(fresh.rule(), state.rule());
    }

    #[test]
    fn legacy_rule_is_used_for_every_guess() {
        let dictionary = dictionary();
        let mut state = GameState::with_solution(
            &dictionary,
            Word::new("crane").unwrap(),
            ScoringRule::Legacy,
        );

        let outcome = state.submit_guess("eerie").unwrap();
        assert_eq!(outcome.feedback.to_string(), "Y-Y-G");
        // Second E is still Absent under the legacy rule
        assert!(state.excluded_letters().contains(&'e'));
    }
}
