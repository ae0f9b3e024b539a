//! Wordle Game - CLI
//!
//! Play Wordle in the terminal (TUI or plain line mode), score individual
//! guesses, or audit the two scoring rules against each other.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_compare, run_simple, score_words},
    core::ScoringRule,
    dictionary::Dictionary,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::{print_compare_result, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring rule: standard (default) or legacy
    #[arg(short, long, global = true, default_value = "standard")]
    scoring: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the solution draw (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score one guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The solution to score against
        solution: String,
    },

    /// Count where the standard and legacy scoring rules disagree
    Compare {
        /// Limit the number of solutions tested
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary selected by the -w flag
///
/// An empty dictionary is fatal: no game can start without a solution.
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::from_file(path)?,
    };

    if dictionary.is_empty() {
        bail!("word list '{wordlist}' contains no valid five-letter words");
    }
    Ok(dictionary)
}

fn parse_rule(name: &str) -> Result<ScoringRule> {
    ScoringRule::from_name(name)
        .with_context(|| format!("unknown scoring rule '{name}' (expected standard or legacy)"))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs when given a file
    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    init_tracing(log_target, cli.verbose)?;

    let rule = parse_rule(&cli.scoring)?;
    let dictionary = load_dictionary(&cli.wordlist)?;
    tracing::info!(words = dictionary.len(), rule = %rule, "dictionary loaded");

    match command {
        Commands::Play => run_play_command(&dictionary, rule, cli.seed),
        Commands::Simple => run_simple(&dictionary, rule, &mut make_rng(cli.seed)),
        Commands::Score { guess, solution } => run_score_command(&guess, &solution, rule),
        Commands::Compare { limit } => run_compare_command(&dictionary, limit),
    }
}

fn run_play_command(dictionary: &Dictionary, rule: ScoringRule, seed: Option<u64>) -> Result<()> {
    let app = App::new(dictionary, rule, make_rng(seed))?;
    run_tui(app)
}

fn run_score_command(guess: &str, solution: &str, rule: ScoringRule) -> Result<()> {
    let result = score_words(guess, solution, rule)?;
    print_score_result(&result);
    Ok(())
}

fn run_compare_command(dictionary: &Dictionary, limit: Option<usize>) -> Result<()> {
    println!(
        "Comparing scoring rules over {} solutions x {} guesses...",
        limit.unwrap_or(dictionary.len()).min(dictionary.len()),
        dictionary.len()
    );

    let result = run_compare(dictionary, limit, true)?;
    print_compare_result(&result);
    Ok(())
}
