//! Core domain types: markers, cells, players and the board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Symbol a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{_0}")]
pub struct Marker(char);

impl Marker {
    /// Marker of the player who moves first.
    pub const PRIMARY: Marker = Marker('X');
    /// Marker of the player who moves second.
    pub const SECONDARY: Marker = Marker('O');

    /// Creates a marker from any symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the symbol.
    pub const fn symbol(self) -> char {
        self.0
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Which of the two players a reference denotes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Seat {
    /// Moves first.
    First,
    /// Moves second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// A participant: display name plus marker. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on the board.
    marker: Marker,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// 3x3 board, cells in row-major order (0-8).
///
/// Every cell is written at most once between resets; [`Board::set_marker`]
/// is the only way to write.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Returns a copy of all cells.
    pub fn cells(&self) -> [Cell; CELLS] {
        self.cells
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places `marker` at `index`.
    ///
    /// Returns `false` without touching the board when the index is out of
    /// range or the cell is already taken.
    #[instrument(skip(self))]
    pub fn set_marker(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(marker);
                true
            }
            Some(_) => {
                trace!("cell already taken");
                false
            }
            None => {
                trace!("index out of range");
                false
            }
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
    }

    /// Checks whether every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of the cells still open for play.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(marker) => write!(f, "{marker}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
