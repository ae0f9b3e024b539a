//! Guess scoring rules
//!
//! Two rules are supported. They agree on most inputs but diverge on some
//! duplicate-letter cases, so a game picks one up front and uses it for
//! every guess.

use super::feedback::{Feedback, LetterResult};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// How a guess is scored against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringRule {
    /// Two-pass letter budget: greens consume first, then yellows left to right
    #[default]
    Standard,
    /// Prefix-count heuristic used by the classic browser clone
    Legacy,
}

impl ScoringRule {
    /// All rules, in display order
    pub const ALL: [Self; 2] = [Self::Standard, Self::Legacy];

    /// Look up a rule by name ("standard" or "legacy")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" | "canonical" => Some(Self::Standard),
            "legacy" | "classic" => Some(Self::Legacy),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
        }
    }

    /// Score `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{ScoringRule, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    ///
    /// let feedback = ScoringRule::Standard.score(&guess, &solution);
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn score(self, guess: &Word, solution: &Word) -> Feedback {
        match self {
            Self::Standard => score_standard(guess, solution),
            Self::Legacy => score_legacy(guess, solution),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two-pass scoring with a per-letter budget
///
/// 1. First pass: mark exact matches and remove them from the budget
/// 2. Second pass, left to right: mark present while budget remains
fn score_standard(guess: &Word, solution: &Word) -> Feedback {
    let mut results = [LetterResult::Absent; WORD_LENGTH];
    let mut budget = solution.char_counts();

    for (i, (g, s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
        if g == s {
            results[i] = LetterResult::Correct;
            if let Some(count) = budget.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, letter) in guess.chars().iter().enumerate() {
        if results[i] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = budget.get_mut(letter)
            && *count > 0
        {
            results[i] = LetterResult::Present;
            *count -= 1;
        }
    }

    Feedback::new(results)
}

/// Count-based heuristic
///
/// A misplaced letter is present while its occurrences in `guess[..=i]` do
/// not exceed its occurrences in the solution. Exact matches later in the
/// guess are not reserved, so this can over-report yellows.
fn score_legacy(guess: &Word, solution: &Word) -> Feedback {
    let mut results = [LetterResult::Absent; WORD_LENGTH];

    for (i, &letter) in guess.chars().iter().enumerate() {
        let solution_count = solution.occurrences(letter);
        let guess_count = guess.chars()[..=i].iter().filter(|&&c| c == letter).count();

        results[i] = if letter == solution.char_at(i) {
            LetterResult::Correct
        } else if solution.has_letter(letter) && guess_count <= solution_count {
            LetterResult::Present
        } else {
            LetterResult::Absent
        };
    }

    Feedback::new(results)
}
