//! Tictac - terminal noughts and crosses.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictac::{AppConfig, DisplayConfig, HighlightStyle, Session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command.unwrap_or(Command::Play {
        first: None,
        second: None,
        highlight: None,
        no_numbers: false,
    }) {
        Command::Play {
            first,
            second,
            highlight,
            no_numbers,
        } => run_play(config, first, second, highlight, no_numbers),
        Command::Config => print_config(&config),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: AppConfig,
    first: Option<String>,
    second: Option<String>,
    highlight: Option<HighlightStyle>,
    no_numbers: bool,
) -> Result<()> {
    let config = apply_overrides(config, highlight, no_numbers);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(stdin, stdout, config).with_names(first, second);
    session.run()?;
    Ok(())
}

/// Folds command-line display flags into the loaded configuration.
fn apply_overrides(
    config: AppConfig,
    highlight: Option<HighlightStyle>,
    no_numbers: bool,
) -> AppConfig {
    if highlight.is_none() && !no_numbers {
        return config;
    }

    let display = DisplayConfig::new(
        highlight.unwrap_or(*config.display().highlight()),
        *config.display().show_cell_numbers() && !no_numbers,
    );
    config.with_display(display)
}

/// Print the configuration that would be used
fn print_config(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
