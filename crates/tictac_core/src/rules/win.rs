//! Win detection.

use crate::types::{CELLS, Cell};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices forming a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinCombo([usize; 3]);

impl WinCombo {
    /// The three indices, in ascending order.
    pub fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for WinCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// Every winning line, in evaluation order: rows, columns, diagonals.
pub const WIN_COMBOS: [WinCombo; 8] = [
    // Rows
    WinCombo([0, 1, 2]),
    WinCombo([3, 4, 5]),
    WinCombo([6, 7, 8]),
    // Columns
    WinCombo([0, 3, 6]),
    WinCombo([1, 4, 7]),
    WinCombo([2, 5, 8]),
    // Diagonals
    WinCombo([0, 4, 8]),
    WinCombo([2, 4, 6]),
];

/// Returns the first line in [`WIN_COMBOS`] whose cells all hold the same
/// marker.
#[instrument(level = "trace")]
pub fn winning_combo(cells: &[Cell; CELLS]) -> Option<WinCombo> {
    WIN_COMBOS.into_iter().find(|combo| {
        let [a, b, c] = combo.indices();
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}
