//! Text rendering of engine state.

use crate::config::DisplayConfig;
use tictac_core::{CELLS, Cell, Player, RoundOutcome, WinCombo};

/// Draws the board as three rows separated by rule lines.
///
/// Cells on `combo` are wrapped in the configured highlight.
pub fn render_board(
    cells: &[Cell; CELLS],
    combo: Option<WinCombo>,
    display: &DisplayConfig,
) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let row_cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let glyph = match cells[index] {
                    Cell::Marked(marker) => marker.symbol(),
                    Cell::Empty if *display.show_cell_numbers() => {
                        char::from_digit(index as u32 + 1, 10).unwrap_or(' ')
                    }
                    Cell::Empty => ' ',
                };
                let (left, right) = match combo {
                    Some(combo) if combo.contains(index) => display.highlight().delimiters(),
                    _ => (' ', ' '),
                };
                format!("{left}{glyph}{right}")
            })
            .collect();
        rows.push(row_cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

/// Status line naming the player to move.
pub fn turn_line(player: &Player) -> String {
    format!("Turn: {} ({})", player.marker(), player.name())
}

/// Announcement for a finished game, if the outcome ended it.
pub fn result_line(outcome: &RoundOutcome) -> Option<String> {
    match outcome {
        RoundOutcome::Won { player, .. } => {
            Some(format!("{} ({}) wins!", player.name(), player.marker()))
        }
        RoundOutcome::Tied => Some("It's a draw!".to_string()),
        RoundOutcome::Rejected | RoundOutcome::Continued { .. } => None,
    }
}
