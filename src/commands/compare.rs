//! Scoring rule audit
//!
//! Scores every (solution, guess) pair under both rules and reports where
//! they disagree.

use crate::core::{Feedback, LetterResult, ScoringRule, Word};
use crate::dictionary::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Maximum number of example pairs kept in the result
pub const MAX_EXAMPLES: usize = 10;

/// A pair the two rules score differently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub solution: Word,
    pub guess: Word,
    pub standard: Feedback,
    pub legacy: Feedback,
}

/// Aggregate result of a comparison run
#[derive(Debug)]
pub struct CompareResult {
    pub solutions: usize,
    pub pairs: usize,
    pub divergent: usize,
    /// Tiles the legacy rule marks Present that the standard rule marks Absent
    pub extra_yellows: usize,
    pub examples: Vec<Divergence>,
    pub duration: Duration,
}

impl CompareResult {
    /// Share of pairs that diverge, as a percentage
    #[must_use]
    pub fn divergence_rate(&self) -> f64 {
        if self.pairs == 0 {
            0.0
        } else {
            self.divergent as f64 / self.pairs as f64 * 100.0
        }
    }
}

/// Compare the rules over the first `limit` solutions against every guess
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_compare(
    dictionary: &Dictionary,
    limit: Option<usize>,
    progress: bool,
) -> Result<CompareResult> {
    let solutions: Vec<&Word> = dictionary
        .iter()
        .take(limit.unwrap_or(dictionary.len()))
        .collect();
    let guesses = dictionary.words();

    let pb = if progress {
        let pb = ProgressBar::new(solutions.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let mut divergences: Vec<Divergence> = solutions
        .par_iter()
        .flat_map_iter(|&solution| {
            let found: Vec<Divergence> = guesses
                .iter()
                .filter_map(|guess| {
                    let standard = ScoringRule::Standard.score(guess, solution);
                    let legacy = ScoringRule::Legacy.score(guess, solution);
                    (standard != legacy).then(|| Divergence {
                        solution: solution.clone(),
                        guess: guess.clone(),
                        standard,
                        legacy,
                    })
                })
                .collect();
            pb.inc(1);
            found
        })
        .collect();

    pb.finish_with_message("Complete!");

    let extra_yellows = divergences
        .iter()
        .map(|d| {
            d.standard
                .results()
                .iter()
                .zip(d.legacy.results())
                .filter(|&(s, l)| *s == LetterResult::Absent && *l == LetterResult::Present)
                .count()
        })
        .sum();

    let divergent = divergences.len();
    divergences.sort_by(|a, b| (&a.solution, &a.guess).cmp(&(&b.solution, &b.guess)));
    divergences.truncate(MAX_EXAMPLES);

    let result = CompareResult {
        solutions: solutions.len(),
        pairs: solutions.len() * guesses.len(),
        divergent,
        extra_yellows,
        examples: divergences,
        duration: start.elapsed(),
    };

    tracing::info!(
        pairs = result.pairs,
        divergent = result.divergent,
        "scoring rules compared"
    );

    Ok(result)
}
