//! Game session engine
//!
//! Holds one game's state, validates and scores guesses, and exposes a
//! snapshot for whatever front end is drawing the board.

mod error;
mod input;
mod snapshot;
mod state;
mod stats;

pub use error::GuessError;
pub use input::{InputEffect, InputToken};
pub use snapshot::{BoardSnapshot, KeyState, Row};
pub use state::{GameState, GameStatus, GuessOutcome, MAX_ATTEMPTS, ScoredGuess};
pub use stats::SessionStats;
