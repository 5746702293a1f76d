//! Tie detection.

use super::win::winning_combo;
use crate::types::{CELLS, Cell};

/// Checks whether every cell holds a marker.
pub fn is_full(cells: &[Cell; CELLS]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}

/// A full board with no completed line.
pub fn is_tie(cells: &[Cell; CELLS]) -> bool {
    is_full(cells) && winning_combo(cells).is_none()
}
