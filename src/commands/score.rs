//! Score a single guess against a chosen solution

use crate::core::{Feedback, ScoringRule, Word, WordError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub solution: Word,
    pub rule: ScoringRule,
    pub feedback: Feedback,
    /// Feedback under the other rule, when it differs
    pub alternative: Option<(ScoringRule, Feedback)>,
}

/// Score `guess` against `solution` with `rule`
///
/// Dictionary membership is not checked, so any two five-letter words work.
///
/// # Errors
///
/// Returns `WordError` if either input is not a five-letter word.
pub fn score_words(
    guess: &str,
    solution: &str,
    rule: ScoringRule,
) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let feedback = rule.score(&guess, &solution);

    let alternative = ScoringRule::ALL
        .into_iter()
        .filter(|&other| other != rule)
        .map(|other| (other, other.score(&guess, &solution)))
        .find(|(_, other_feedback)| *other_feedback != feedback);

    Ok(ScoreResult {
        guess,
        solution,
        rule,
        feedback,
        alternative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_with_selected_rule() {
        let result = score_words("CRANE", "slate", ScoringRule::Standard).unwrap();
        assert_eq!(result.guess.text(), "crane");
        assert_eq!(result.feedback.to_string(), "--G-G");
        assert!(result.alternative.is_none());
    }

    #[test]
    fn reports_divergent_rule() {
        let result = score_words("eerie", "crane", ScoringRule::Standard).unwrap();
        assert_eq!(result.feedback.to_string(), "--Y-G");

        let (other, feedback) = result.alternative.unwrap();
        assert_eq!(other, ScoringRule::Legacy);
        assert_eq!(feedback.to_string(), "Y-Y-G");
    }

    #[test]
    fn rejects_bad_words() {
        assert_eq!(
            score_words("cran", "slate", ScoringRule::Standard).err(),
            Some(WordError::InvalidLength(4))
        );
        assert!(score_words("crane", "sl4te", ScoringRule::Legacy).is_err());
    }
}
