//! Wordle Game
//!
//! Terminal Wordle: guess a hidden five-letter word in six tries, with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{ScoringRule, Word};
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::game::{GameState, GameStatus};
//!
//! let dictionary = Dictionary::embedded();
//! let solution = Word::new("crane").unwrap();
//! let mut game = GameState::with_solution(&dictionary, solution, ScoringRule::Standard);
//!
//! let outcome = game.submit_guess("slate").unwrap();
//! println!("{}", outcome.feedback.to_emoji());
//!
//! let outcome = game.submit_guess("crane").unwrap();
//! assert_eq!(outcome.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Game state engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
