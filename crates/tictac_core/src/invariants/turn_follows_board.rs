//! The seat to move can be read off the board.

use super::Invariant;
use crate::engine::TurnEngine;
use crate::types::Seat;

/// Invariant: while the game is running, the first seat moves exactly when
/// both players have placed the same number of markers.
pub struct TurnFollowsBoard;

impl Invariant<TurnEngine> for TurnFollowsBoard {
    fn holds(engine: &TurnEngine) -> bool {
        if engine.is_game_over() {
            return true;
        }
        let board = engine.board();
        let first = board.count(*engine.player(Seat::First).marker());
        let second = board.count(*engine.player(Seat::Second).marker());
        (engine.current_seat() == Seat::First) == (first == second)
    }

    fn description() -> &'static str {
        "Seat to move matches the marker counts on the board"
    }
}
