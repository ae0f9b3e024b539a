//! Guess rejection reasons

use thiserror::Error;

/// Why a submitted guess was rejected
///
/// All variants are recoverable and leave the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Game is over")]
    GameAlreadyOver,
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Word not found")]
    UnknownWord(String),
}
