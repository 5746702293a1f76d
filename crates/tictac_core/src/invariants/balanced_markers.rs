//! Balanced markers: the first player is never behind, and never more
//! than one marker ahead.

use super::Invariant;
use crate::engine::TurnEngine;
use crate::types::Seat;

/// Invariant: first-seat markers minus second-seat markers is 0 or 1.
pub struct BalancedMarkers;

impl Invariant<TurnEngine> for BalancedMarkers {
    fn holds(engine: &TurnEngine) -> bool {
        let board = engine.board();
        let first = board.count(*engine.player(Seat::First).marker());
        let second = board.count(*engine.player(Seat::Second).marker());
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First player has as many markers as the second, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marker;

    #[test]
    fn test_holds_after_alternating_moves() {
        let mut engine = TurnEngine::default();
        engine.play_round(0);
        assert!(BalancedMarkers::holds(&engine));
        engine.play_round(1);
        assert!(BalancedMarkers::holds(&engine));
    }

    #[test]
    fn test_detects_second_player_ahead() {
        let mut engine = TurnEngine::default();
        engine.board.set_marker(0, Marker::SECONDARY);
        assert!(!BalancedMarkers::holds(&engine));
    }
}
