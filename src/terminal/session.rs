//! Line-oriented game session over any reader and writer.

use super::input::{Command, HELP, parse_command};
use super::render::{render_board, result_line, turn_line};
use crate::config::{AppConfig, DisplayConfig};
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tictac_core::TurnEngine;
use tracing::{debug, info, instrument};

/// Error raised by the terminal front end.
#[derive(Debug, Display, Error, From)]
pub enum AdapterError {
    /// Reading input or writing output failed.
    #[display("terminal I/O failed: {_0}")]
    Io(#[error(source)] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Setup,
    Play,
}

/// Drives a [`TurnEngine`] from text input and renders its results.
///
/// The session starts in name entry, then alternates between reading a
/// command and printing the board. It holds no game rules of its own:
/// every decision is the engine's.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    preset_first: Option<String>,
    preset_second: Option<String>,
    engine: Option<TurnEngine>,
    view: View,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that has not started a game yet.
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
            preset_first: None,
            preset_second: None,
            engine: None,
            view: View::Setup,
        }
    }

    /// Uses the given names for the first game instead of prompting.
    pub fn with_names(mut self, first: Option<String>, second: Option<String>) -> Self {
        self.preset_first = first;
        self.preset_second = second;
        self
    }

    /// Engine of the current game, once one has started.
    pub fn engine(&self) -> Option<&TurnEngine> {
        self.engine.as_ref()
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), AdapterError> {
        info!("Session started");
        loop {
            let keep_going = match self.view {
                View::Setup => self.setup()?,
                View::Play => self.play()?,
            };
            if !keep_going {
                break;
            }
        }
        info!("Session ended");
        Ok(())
    }

    /// Collects names and starts a game. Returns `false` at end of input.
    fn setup(&mut self) -> Result<bool, AdapterError> {
        let first = match self.preset_first.take() {
            Some(name) => name,
            None => {
                let fallback = self.config.players().first().clone();
                match self.ask_name("Player 1", &fallback)? {
                    Some(name) => name,
                    None => return Ok(false),
                }
            }
        };
        let second = match self.preset_second.take() {
            Some(name) => name,
            None => {
                let fallback = self.config.players().second().clone();
                match self.ask_name("Player 2", &fallback)? {
                    Some(name) => name,
                    None => return Ok(false),
                }
            }
        };

        let engine = self.engine.get_or_insert_with(TurnEngine::default);
        engine.init(Some(&first), Some(&second));
        self.view = View::Play;

        writeln!(self.output, "{HELP}")?;
        write_board(&mut self.output, engine, self.config.display())?;
        writeln!(self.output, "{}", turn_line(engine.current_player()))?;
        Ok(true)
    }

    /// Handles one line of play input. Returns `false` when the session ends.
    fn play(&mut self) -> Result<bool, AdapterError> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };

        let Some(command) = parse_command(&line) else {
            let line = line.trim();
            if !line.is_empty() {
                writeln!(self.output, "Unrecognized input: {line}. {HELP}")?;
            }
            return Ok(true);
        };

        let Some(engine) = self.engine.as_mut() else {
            self.view = View::Setup;
            return Ok(true);
        };

        match command {
            Command::Cell(index) => {
                let outcome = engine.play_round(index);
                if !outcome.is_valid() {
                    debug!(index, "Ignoring rejected move");
                    return Ok(true);
                }
                write_board(&mut self.output, engine, self.config.display())?;
                match result_line(&outcome) {
                    Some(result) => {
                        writeln!(self.output, "{result}")?;
                        writeln!(self.output, "r = restart, n = new game, q = quit")?;
                    }
                    None => writeln!(self.output, "{}", turn_line(engine.current_player()))?,
                }
            }
            Command::Restart => {
                engine.reset_game();
                write_board(&mut self.output, engine, self.config.display())?;
                writeln!(self.output, "{}", turn_line(engine.current_player()))?;
            }
            Command::NewGame => {
                debug!("Returning to name entry");
                self.view = View::Setup;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Prompts for a name. Blank input yields `fallback`; `None` means end
    /// of input.
    fn ask_name(&mut self, label: &str, fallback: &str) -> Result<Option<String>, AdapterError> {
        write!(self.output, "{label} name [{fallback}]: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| {
            let name = line.trim();
            if name.is_empty() {
                fallback.to_string()
            } else {
                name.to_string()
            }
        }))
    }

    fn read_line(&mut self) -> Result<Option<String>, AdapterError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn write_board<W: Write>(
    output: &mut W,
    engine: &TurnEngine,
    display: &DisplayConfig,
) -> Result<(), AdapterError> {
    let board = render_board(&engine.board_cells(), engine.winning_combo(), display);
    writeln!(output, "\n{board}\n")?;
    Ok(())
}
