//! Turn sequencing and game-over detection.

use crate::error::EngineError;
use crate::invariants::assert_invariants;
use crate::outcome::{Phase, RoundOutcome};
use crate::rules::{self, WinCombo};
use crate::types::{Board, CELLS, Cell, Marker, Player, Seat};
use tracing::{debug, info, instrument};

/// Name given to the first player when none is supplied.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";
/// Name given to the second player when none is supplied.
pub const DEFAULT_SECOND_NAME: &str = "Player 2";

/// Two-player turn engine over a single [`Board`].
///
/// The engine alternates turns, places markers through the board, and
/// stops accepting moves once a line is completed or the board fills.
/// A refused move never changes state.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    pub(crate) board: Board,
    pub(crate) first: Player,
    pub(crate) second: Player,
    pub(crate) current: Seat,
    pub(crate) game_over: bool,
    pub(crate) winning_combo: Option<WinCombo>,
}

impl TurnEngine {
    /// Creates an engine with the canonical markers and starts a game.
    ///
    /// Missing or empty names fall back to [`DEFAULT_FIRST_NAME`] and
    /// [`DEFAULT_SECOND_NAME`].
    #[instrument]
    pub fn new(first: Option<&str>, second: Option<&str>) -> Self {
        Self::build(first, second, Marker::PRIMARY, Marker::SECONDARY)
    }

    /// Creates an engine whose players use custom markers.
    #[instrument]
    pub fn with_markers(
        first: Option<&str>,
        second: Option<&str>,
        first_marker: Marker,
        second_marker: Marker,
    ) -> Result<Self, EngineError> {
        if first_marker == second_marker {
            return Err(EngineError::DuplicateMarker(first_marker));
        }
        Ok(Self::build(first, second, first_marker, second_marker))
    }

    fn build(
        first: Option<&str>,
        second: Option<&str>,
        first_marker: Marker,
        second_marker: Marker,
    ) -> Self {
        let mut engine = Self {
            board: Board::new(),
            first: Player::new(DEFAULT_FIRST_NAME, first_marker),
            second: Player::new(DEFAULT_SECOND_NAME, second_marker),
            current: Seat::First,
            game_over: false,
            winning_combo: None,
        };
        engine.init(first, second);
        engine
    }

    /// Starts a fresh game with (possibly) new player names.
    ///
    /// Players keep the markers the engine was built with. Safe to call
    /// in any state.
    #[instrument(skip(self))]
    pub fn init(&mut self, first: Option<&str>, second: Option<&str>) {
        self.first = Player::new(resolve_name(first, DEFAULT_FIRST_NAME), *self.first.marker());
        self.second = Player::new(
            resolve_name(second, DEFAULT_SECOND_NAME),
            *self.second.marker(),
        );
        self.reset_game();
        info!(first = %self.first, second = %self.second, "New game started");
    }

    /// Restarts with the same players.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.current = Seat::First;
        self.game_over = false;
        self.winning_combo = None;
        debug!("Game reset");
    }

    /// Attempts to place the current player's marker at `index`.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        if self.game_over {
            debug!("Move after game over rejected");
            return RoundOutcome::Rejected;
        }

        let player = self.current_player().clone();
        if !self.board.set_marker(index, *player.marker()) {
            debug!("Illegal placement rejected");
            return RoundOutcome::Rejected;
        }

        let cells = self.board.cells();
        if let Some(combo) = rules::winning_combo(&cells) {
            self.game_over = true;
            self.winning_combo = Some(combo);
            assert_invariants(self);
            info!(%combo, "Game won");
            return RoundOutcome::Won { player, combo };
        }

        if rules::is_full(&cells) {
            self.game_over = true;
            assert_invariants(self);
            info!("Game tied");
            return RoundOutcome::Tied;
        }

        self.current = self.current.other();
        assert_invariants(self);
        let next = self.current_player().clone();
        debug!(next = %next, "Turn passed");
        RoundOutcome::Continued { next }
    }

    /// Player whose turn it is (or who made the winning move).
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player sitting in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Both players, first seat first.
    pub fn players(&self) -> (&Player, &Player) {
        (&self.first, &self.second)
    }

    /// True once the game has been won or tied.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Line completed by the winner, if the game was won.
    pub fn winning_combo(&self) -> Option<WinCombo> {
        self.winning_combo
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match (self.game_over, self.winning_combo) {
            (false, _) => Phase::InProgress,
            (true, Some(_)) => Phase::Won,
            (true, None) => Phase::Tied,
        }
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of every cell.
    pub fn board_cells(&self) -> [Cell; CELLS] {
        self.board.cells()
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn resolve_name(name: Option<&str>, fallback: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(engine: &mut TurnEngine, moves: &[usize]) -> RoundOutcome {
        let mut last = RoundOutcome::Rejected;
        for &index in moves {
            last = engine.play_round(index);
            assert!(last.is_valid(), "move {index} should be accepted");
        }
        last
    }

    #[test]
    fn test_new_engine_defaults() {
        let engine = TurnEngine::default();
        let (first, second) = engine.players();
        assert_eq!(first.name(), DEFAULT_FIRST_NAME);
        assert_eq!(second.name(), DEFAULT_SECOND_NAME);
        assert_eq!(*first.marker(), Marker::PRIMARY);
        assert_eq!(*second.marker(), Marker::SECONDARY);
        assert_eq!(engine.current_seat(), Seat::First);
        assert_eq!(engine.phase(), Phase::InProgress);
        assert!(!engine.is_game_over());
        assert_eq!(engine.winning_combo(), None);
    }

    #[test]
    fn test_empty_names_fall_back() {
        let engine = TurnEngine::new(Some(""), None);
        assert_eq!(engine.player(Seat::First).name(), DEFAULT_FIRST_NAME);
        assert_eq!(engine.player(Seat::Second).name(), DEFAULT_SECOND_NAME);
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = TurnEngine::new(Some("A"), Some("B"));
        let expected = ["B", "A", "B", "A"];
        for (index, name) in [0, 4, 8, 1].into_iter().zip(expected) {
            match engine.play_round(index) {
                RoundOutcome::Continued { next } => assert_eq!(next.name(), name),
                other => panic!("unexpected outcome {other:?}"),
            }
            assert_eq!(engine.current_player().name(), name);
        }
    }

    #[test]
    fn test_winner_keeps_turn() {
        let mut engine = TurnEngine::new(Some("A"), Some("B"));
        let outcome = play_all(&mut engine, &[0, 3, 1, 4, 2]);

        assert_eq!(outcome.winner().map(|p| p.name().as_str()), Some("A"));
        assert_eq!(engine.current_player().name(), "A");
        assert_eq!(engine.phase(), Phase::Won);
    }

    #[test]
    fn test_tie_records_no_combo() {
        let mut engine = TurnEngine::default();
        let outcome = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(outcome, RoundOutcome::Tied);
        assert!(engine.is_game_over());
        assert_eq!(engine.winning_combo(), None);
        assert_eq!(engine.phase(), Phase::Tied);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut engine = TurnEngine::default();
        engine.play_round(4);
        let cells = engine.board_cells();

        assert_eq!(engine.play_round(4), RoundOutcome::Rejected);
        assert_eq!(engine.play_round(9), RoundOutcome::Rejected);
        assert_eq!(engine.board_cells(), cells);
        assert_eq!(engine.current_seat(), Seat::Second);
    }

    #[test]
    fn test_custom_markers() {
        let mut engine =
            TurnEngine::with_markers(None, None, Marker::new('#'), Marker::new('@')).unwrap();
        engine.play_round(0);
        assert_eq!(engine.board().cell(0), Some(Cell::Marked(Marker::new('#'))));

        // init keeps the markers the engine was built with
        engine.init(Some("C"), Some("D"));
        assert_eq!(*engine.player(Seat::Second).marker(), Marker::new('@'));
    }

    #[test]
    fn test_duplicate_markers_rejected() {
        let err = TurnEngine::with_markers(None, None, Marker::PRIMARY, Marker::PRIMARY)
            .unwrap_err();
        assert_eq!(err, EngineError::DuplicateMarker(Marker::PRIMARY));
    }
}
