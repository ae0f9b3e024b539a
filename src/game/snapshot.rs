//! Read-only board view handed to the presentation layer

use super::state::{GameStatus, MAX_ATTEMPTS, ScoredGuess};
use std::collections::BTreeSet;

/// One line of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Not reached yet
    Empty,
    /// The guess being typed (0-5 letters)
    Pending(String),
    /// A submitted guess with its feedback
    Scored(ScoredGuess),
}

/// How a keyboard key should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not guessed yet
    Unused,
    /// Guessed and still possibly useful
    Used,
    /// Scored Absent at least once; the key is disabled
    Excluded,
}

/// Everything a renderer needs after each mutating call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Always `MAX_ATTEMPTS` rows, top to bottom
    pub rows: Vec<Row>,
    pub excluded: BTreeSet<char>,
    pub used: BTreeSet<char>,
    pub status: GameStatus,
    pub attempts_used: usize,
    /// The solution, only once the game has been lost
    pub solution_reveal: Option<String>,
}

impl BoardSnapshot {
    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        let letter = letter.to_ascii_lowercase();
        if self.excluded.contains(&letter) {
            KeyState::Excluded
        } else if self.used.contains(&letter) {
            KeyState::Used
        } else {
            KeyState::Unused
        }
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used)
    }
}
