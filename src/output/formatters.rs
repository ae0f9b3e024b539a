//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Render one letter as a coloured tile, e.g. ` C ` on green
#[must_use]
pub fn tile(letter: char, result: LetterResult) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        LetterResult::Correct => text.black().bold().on_green(),
        LetterResult::Present => text.black().bold().on_yellow(),
        LetterResult::Absent => text.white().bold().on_bright_black(),
    }
}

/// Render a scored guess as a row of coloured tiles
#[must_use]
pub fn tile_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.results())
        .map(|(letter, &result)| tile(letter, result).to_string())
        .collect()
}

/// Uppercase, space-separated letter list, e.g. "C N R"
#[must_use]
pub fn letter_list<'a>(letters: impl IntoIterator<Item = &'a char>) -> String {
    letters
        .into_iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
