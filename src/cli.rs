//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac::{DEFAULT_CONFIG_PATH, HighlightStyle};

/// Tictac - two-player noughts and crosses
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on this terminal
    Play {
        /// Name of the first player (skips the prompt)
        #[arg(long)]
        first: Option<String>,

        /// Name of the second player (skips the prompt)
        #[arg(long)]
        second: Option<String>,

        /// Override the winning-line highlight (brackets, asterisks)
        #[arg(long)]
        highlight: Option<HighlightStyle>,

        /// Hide cell numbers in empty cells
        #[arg(long)]
        no_numbers: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
