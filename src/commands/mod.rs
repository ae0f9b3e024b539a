//! Command implementations

pub mod compare;
pub mod score;
pub mod simple;

pub use compare::{CompareResult, Divergence, run_compare};
pub use score::{ScoreResult, score_words};
pub use simple::{run_simple, run_simple_with};
