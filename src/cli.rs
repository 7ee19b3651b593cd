use clap::{Parser, Subcommand};
use log::error;
use std::io::BufRead;
use std::path::PathBuf;

use crate::session::{RoundSummary, SessionInterface, SessionStatus, UserAction};

/// Word game session tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the stored word lists (defaults to the user data directory)
    #[arg(long = "store-dir", global = true)]
    pub store_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive session on stdin
    Play {
        /// Print round summaries as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit the word pool
    #[command(subcommand)]
    Words(WordsCommand),
    /// Inspect or extend the poor-word list
    #[command(subcommand)]
    Poor(PoorCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WordsCommand {
    /// Print the stored pool
    List,
    /// Replace the stored pool
    Set { words: Vec<String> },
    /// Remove words from the stored pool
    Remove { words: Vec<String> },
    /// Delete the stored pool
    Clear,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PoorCommand {
    /// Print the poor-word list
    List,
    /// Flag words as poor
    Add { words: Vec<String> },
    /// Delete the poor-word list
    Clear,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

#[derive(Debug, PartialEq, Eq)]
pub enum ActionInput {
    Valid(UserAction),
    Invalid,
}

pub fn parse_action(line: &str) -> ActionInput {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match (command.to_lowercase().as_str(), argument) {
        ("g" | "guess", word) if !word.is_empty() => {
            ActionInput::Valid(UserAction::Guessed(word.to_string()))
        }
        ("s" | "skip", word) if !word.is_empty() => {
            ActionInput::Valid(UserAction::Skipped(word.to_string()))
        }
        ("next", "") => ActionInput::Valid(UserAction::NextRound),
        ("new", "") => ActionInput::Valid(UserAction::NewGame),
        ("status", "") => ActionInput::Valid(UserAction::Status),
        ("exit", "") => ActionInput::Valid(UserAction::Exit),
        _ => ActionInput::Invalid,
    }
}

pub fn read_action<R: BufRead>(reader: &mut R) -> ActionInput {
    println!("\nEnter 'g <word>', 's <word>', 'next', 'new', 'status' or 'exit':");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => ActionInput::Valid(UserAction::Exit),
        Ok(_) => {
            let action = parse_action(&input);
            if action == ActionInput::Invalid {
                println!("Invalid command: {}", input.trim());
            }
            action
        }
        Err(e) => {
            error!("Failed to read input: {e}");
            ActionInput::Valid(UserAction::Exit)
        }
    }
}

pub fn display_round_summary(summary: &RoundSummary) {
    println!("Round {} finished. Score: {}", summary.round, summary.score);
    if !summary.guessed.is_empty() {
        println!("Guessed: {}", summary.guessed.join(", "));
    }
    if !summary.skipped.is_empty() {
        println!("Skipped: {}", summary.skipped.join(", "));
    }
    println!("{} words left in the pool.", summary.words_left);
}

pub fn display_status(status: &SessionStatus) {
    println!(
        "Rounds played: {} | Score: {} (guessed {}, skipped {})",
        status.rounds_played, status.score, status.guessed_words, status.skipped_words
    );
    println!(
        "Pool: {} words | Poor words: {}",
        status.words_left, status.poor_words
    );
}

pub fn display_words(words: &[String]) {
    if words.is_empty() {
        println!("(empty)");
        return;
    }
    for word in words {
        println!("{word}");
    }
}

/// Line-oriented implementation of `SessionInterface`
pub struct CliInterface<R: BufRead> {
    reader: R,
    json: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            json: false,
        }
    }

    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl<R: BufRead> SessionInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        match read_action(&mut self.reader) {
            ActionInput::Valid(action) => Some(action),
            ActionInput::Invalid => None,
        }
    }

    fn display_round_summary(&mut self, summary: &RoundSummary) {
        if self.json {
            match serde_json::to_string(summary) {
                Ok(line) => println!("{line}"),
                Err(e) => error!("Failed to encode round summary: {e}"),
            }
        } else {
            display_round_summary(summary);
        }
    }

    fn display_status(&mut self, status: &SessionStatus) {
        display_status(status);
    }

    fn display_new_game_message(&mut self, words_left: usize) {
        println!("New game started. {words_left} words in the pool.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
