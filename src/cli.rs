//! Command-line interface for hangdev.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HangDev - guess the word before every language is gone
#[derive(Parser, Debug)]
#[command(name = "hangdev")]
#[command(about = "Word-guessing game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "hangdev.toml")]
    pub config: PathBuf,

    /// Override the store file from the configuration
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the interactive terminal UI
    Play,

    /// Guess one letter in the saved game
    Guess {
        /// A single letter (case-insensitive)
        letter: String,
    },

    /// Start a new game, discarding the saved one
    New,

    /// Show the saved game
    Status,
}
