//! Per-letter feedback for a scored guess
//!
//! Each position of a guess is classified as:
//! - Correct (green): letter matches the solution at this position
//! - Present (yellow): letter is in the solution, elsewhere
//! - Absent (gray): letter contributes no further matches

use super::word::WORD_LENGTH;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    Correct,
    Present,
    Absent,
}

impl LetterResult {
    /// Emoji tile for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one result per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([LetterResult::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    /// The per-position results, left to right
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<LetterResult> {
        self.0.get(position).copied()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given classification
    #[must_use]
    pub fn count(&self, kind: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == kind).count()
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse feedback from "GY-GY" style codes or emoji tiles
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let results: Vec<LetterResult> = s
            .chars()
            .map(LetterResult::from_code)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        let results: [LetterResult; WORD_LENGTH] = results
            .try_into()
            .map_err(|_| format!("Feedback must have {WORD_LENGTH} tiles: {s}"))?;

        Ok(Self(results))
    }
}
