//! A recorded winning line is real and only exists after a win.

use super::Invariant;
use crate::engine::TurnEngine;
use crate::rules;

/// Invariant: a combo is recorded iff the game is over and won, and the
/// recorded line is the one the rules report for the board.
pub struct ComboMatchesPhase;

impl Invariant<TurnEngine> for ComboMatchesPhase {
    fn holds(engine: &TurnEngine) -> bool {
        let detected = rules::winning_combo(&engine.board_cells());
        match engine.winning_combo() {
            Some(combo) => engine.is_game_over() && detected == Some(combo),
            None => detected.is_none(),
        }
    }

    fn description() -> &'static str {
        "Winning combo is recorded exactly when a completed line ended the game"
    }
}
