//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, tile_row};
use crate::commands::{CompareResult, ScoreResult};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {} ({} scoring)",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.solution.text().to_uppercase().bright_yellow().bold(),
        result.rule
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}  {}",
        tile_row(&result.guess, &result.feedback),
        feedback_to_emoji(&result.feedback),
        result.feedback
    );

    if let Some((other, feedback)) = &result.alternative {
        println!(
            "\n  {} {} scoring gives {} {}",
            "Note:".bright_yellow().bold(),
            other,
            feedback_to_emoji(feedback),
            feedback
        );
    }
    println!();
}

/// Print the result of a scoring rule comparison
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORING RULE COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Solutions:        {}", result.solutions);
    println!("   Pairs scored:     {}", result.pairs);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let rate = result.divergence_rate();
    println!("\n📈 {}", "Divergence:".bright_cyan().bold());
    println!(
        "   Divergent pairs:  {} ({})",
        format!("{}", result.divergent).bright_yellow().bold(),
        format!("{rate:.3}%").yellow()
    );
    println!(
        "   Rate:             {}",
        create_progress_bar(rate, 100.0, 40).green()
    );
    println!("   Extra yellows:    {}", result.extra_yellows);

    if !result.examples.is_empty() {
        println!("\n🔍 {}", "Examples (solution / guess):".bright_cyan().bold());
        for example in &result.examples {
            println!(
                "   {} / {}  standard {}  legacy {}",
                example.solution.text().to_uppercase().bright_white(),
                example.guess.text().to_uppercase().bright_white(),
                feedback_to_emoji(&example.standard),
                feedback_to_emoji(&example.legacy)
            );
        }
    }
    println!();
}
