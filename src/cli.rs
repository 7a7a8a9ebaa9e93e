use crate::letters::LetterConfiguration;
use crate::oracle::{Verdict, WordOracle};
use crate::session::{RoundAction, RoundInterface, Submission};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::PathBuf;

/// SpellingBee word oracle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list. Without it, a per-user
    /// words.txt in the data directory is used if present, otherwise a small
    /// built-in sample list of a few hundred words
    #[arg(short = 'i', long = "input", env = "SPELLING_BEE_WORDS", global = true)]
    pub words_path: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check a word, optionally against a letter configuration
    Check {
        word: String,
        /// Mandatory center letter
        #[arg(short, long, requires = "letters")]
        center: Option<char>,
        /// Allowed letters
        #[arg(short, long)]
        letters: Option<String>,
    },
    /// List words that can be spelled from the letters
    Find {
        #[arg(short, long)]
        letters: String,
        /// Only list answers that use this letter
        #[arg(short, long)]
        center: Option<char>,
        /// Print a JSON array instead of one word per line
        #[arg(long)]
        json: bool,
    },
    /// Suggest words for a game observation read from a file or stdin
    Hint {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Play a practice round in the terminal
    Play {
        #[arg(short, long)]
        center: char,
        #[arg(short, long)]
        letters: String,
    },
    /// Serve word-finder tools as JSON-RPC over stdio
    Serve,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Text for the `check` subcommand.
#[must_use]
pub fn describe_check(oracle: &WordOracle, word: &str, config: Option<&LetterConfiguration>) -> String {
    match config {
        Some(config) => match oracle.check_answer(word, config) {
            Verdict::Accepted => format!("{word}: valid answer for {config}"),
            verdict => format!("{word}: not a valid answer for {config} ({verdict})"),
        },
        None if oracle.is_word(word) => format!("{word}: in the word list"),
        None => format!("{word}: not in the word list"),
    }
}

fn parse_action(input: &str) -> Option<RoundAction> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => None,
        "exit" | "quit" => Some(RoundAction::Exit),
        "reveal" => Some(RoundAction::Reveal),
        "new" | "next" => Some(RoundAction::NewRound),
        _ => Some(RoundAction::Submit(input.to_string())),
    }
}

pub fn display_round_start(config: &LetterConfiguration, total: usize) {
    println!("Letters: {config} (center in brackets)");
    println!("There are {total} answers to find.");
}

pub fn display_submission(word: &str, submission: Submission, found: usize, total: usize) {
    match submission {
        Submission::Accepted => println!("✓ {word} ({found}/{total})"),
        Submission::Repeat => println!("{word} already found ({found}/{total})"),
        Submission::Rejected(verdict) => println!("✗ {word}: {verdict}"),
    }
}

pub fn display_answers(answers: &BTreeSet<String>, found: &BTreeSet<String>) {
    println!("Answers ({}):", answers.len());
    for word in answers {
        let mark = if found.contains(word) { "✓" } else { " " };
        println!("{mark} {word}");
    }
}

pub fn display_complete(total: usize) {
    println!("All {total} answers found!");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the RoundInterface trait
/// This struct wraps a BufRead reader and implements the round interface for terminal play
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> RoundInterface for CliInterface<R> {
    fn display_round_start(&mut self, config: &LetterConfiguration, total: usize) {
        display_round_start(config, total);
    }

    fn read_action(&mut self) -> Option<RoundAction> {
        println!("\nEnter a word ('reveal' to show answers, 'new' to restart, 'exit' to quit):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) | Err(_) => Some(RoundAction::Exit),
            Ok(_) => parse_action(&input),
        }
    }

    fn display_submission(&mut self, word: &str, submission: Submission, found: usize, total: usize) {
        display_submission(word, submission, found, total);
    }

    fn display_answers(&mut self, answers: &BTreeSet<String>, found: &BTreeSet<String>) {
        display_answers(answers, found);
    }

    fn display_complete(&mut self, total: usize) {
        display_complete(total);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
