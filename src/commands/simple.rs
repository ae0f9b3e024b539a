//! Simple line-based game
//!
//! Plays Wordle over plain stdin/stdout without the TUI: one full guess per
//! line, coloured tiles after each accepted guess.

use crate::core::ScoringRule;
use crate::dictionary::Dictionary;
use crate::game::{GameState, GameStatus, GuessError, MAX_ATTEMPTS, SessionStats};
use crate::output::formatters::{letter_list, tile_row};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple mode on the process's stdin and stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if the dictionary is empty.
pub fn run_simple<R: Rng>(dictionary: &Dictionary, rule: ScoringRule, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(dictionary, rule, rng, stdin.lock(), stdout.lock()).map(|_| ())
}

/// Run the simple mode on arbitrary input and output streams
///
/// Returns the statistics gathered before input ran out or the player quit.
///
/// # Errors
///
/// Returns an error on I/O failure or if the dictionary is empty.
pub fn run_simple_with<R, I, O>(
    dictionary: &Dictionary,
    rule: ScoringRule,
    rng: &mut R,
    input: I,
    mut out: O,
) -> Result<SessionStats>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut game = GameState::start(dictionary, rule, rng)?;
    let mut stats = SessionStats::default();

    writeln!(out, "\n{}", "═".repeat(44).bright_cyan())?;
    writeln!(out, "{}", "            W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(44).bright_cyan())?;
    writeln!(
        out,
        "Guess the five-letter word in {MAX_ATTEMPTS} tries ({rule} scoring)."
    )?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    let mut lines = input.lines();

    loop {
        if game.is_over() {
            write!(out, "Play again? (new/quit): ")?;
        } else {
            write!(out, "Guess {}/{MAX_ATTEMPTS}: ", game.attempts_used() + 1)?;
        }
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                if !game.is_over() && game.attempts_used() > 0 {
                    writeln!(
                        out,
                        "Abandoned. The word was {}.",
                        game.solution().text().to_uppercase().bold()
                    )?;
                }
                game = game.reset(rng)?;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        match game.submit_guess(&line) {
            Ok(outcome) => {
                if let Some(last) = game.guesses().last() {
                    writeln!(out, "  {}", tile_row(&last.word, &last.feedback))?;
                }

                match outcome.status {
                    GameStatus::Won => {
                        stats.record(&game);
                        let turns = game.attempts_used();
                        writeln!(
                            out,
                            "\n{} Solved in {turns} {}.",
                            "🎉 You won!".bright_green().bold(),
                            if turns == 1 { "guess" } else { "guesses" }
                        )?;
                        print_stats(&mut out, &stats)?;
                    }
                    GameStatus::Lost => {
                        stats.record(&game);
                        writeln!(
                            out,
                            "\n{} The word was: {}",
                            "❌ Out of guesses.".red().bold(),
                            game.solution().text().to_uppercase().bright_yellow().bold()
                        )?;
                        print_stats(&mut out, &stats)?;
                    }
                    GameStatus::InProgress => {
                        if !game.excluded_letters().is_empty() {
                            writeln!(
                                out,
                                "  Excluded: {}",
                                letter_list(game.excluded_letters()).bright_black()
                            )?;
                        }
                    }
                }
            }
            Err(GuessError::GameAlreadyOver) => {
                writeln!(out, "{}", "Game is over. Type 'new' or 'quit'.".yellow())?;
            }
            Err(err) => writeln!(out, "  {}", err.to_string().red())?,
        }
    }

    writeln!(out, "👋 Thanks for playing!")?;
    Ok(stats)
}

fn print_stats<O: Write>(out: &mut O, stats: &SessionStats) -> io::Result<()> {
    writeln!(
        out,
        "Played: {} | Win rate: {:.0}% | Streak: {} (best {})\n",
        stats.played,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    )
}
