//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the scoring rules that produce it.
//! Everything here is pure and independent of game state.

mod feedback;
mod scoring;
mod word;

pub use feedback::{Feedback, LetterResult};
pub use scoring::ScoringRule;
pub use word::{WORD_LENGTH, Word, WordError};
