//! Parsing of player input lines.

use tictac_core::Position;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a marker at a board index (0-8).
    Cell(usize),
    /// Restart with the same players.
    Restart,
    /// Return to name entry.
    NewGame,
    /// Show the command summary.
    Help,
    /// Leave the program.
    Quit,
}

/// One-line summary of accepted input.
pub const HELP: &str =
    "Enter 1-9 or a position (e.g. center, top-left); r = restart, n = new game, q = quit";

/// Parses a line of input.
///
/// Cells are numbered 1-9 for the player and mapped to indices 0-8.
/// Returns `None` for anything unrecognised, including out-of-range numbers.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "r" | "restart" => return Some(Command::Restart),
        "n" | "new" => return Some(Command::NewGame),
        "h" | "help" | "?" => return Some(Command::Help),
        "q" | "quit" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    if let Ok(number) = line.parse::<usize>() {
        return (1..=9).contains(&number).then(|| Command::Cell(number - 1));
    }

    Position::from_label(line).map(|pos| Command::Cell(pos.to_index()))
}
