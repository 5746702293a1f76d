//! Round results and game phases.

use crate::rules::WinCombo;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Result of a single call to [`TurnEngine::play_round`](crate::TurnEngine::play_round).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// The move was refused; nothing changed.
    Rejected,
    /// The move completed a line.
    Won {
        /// Player who moved.
        player: Player,
        /// Line that was completed.
        combo: WinCombo,
    },
    /// The move filled the board without completing a line.
    Tied,
    /// The move was accepted and play passes on.
    Continued {
        /// Player to move next.
        next: Player,
    },
}

impl RoundOutcome {
    /// True for every accepted move.
    pub fn is_valid(&self) -> bool {
        !matches!(self, RoundOutcome::Rejected)
    }

    /// True when the move ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. } | RoundOutcome::Tied)
    }

    /// Returns the winner if the move won the game.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            RoundOutcome::Won { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Returns the completed line if the move won the game.
    pub fn combo(&self) -> Option<WinCombo> {
        match self {
            RoundOutcome::Won { combo, .. } => Some(*combo),
            _ => None,
        }
    }
}

/// Where a game stands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Moves are being accepted.
    #[display("in progress")]
    InProgress,
    /// Someone completed a line.
    #[display("won")]
    Won,
    /// The board filled up with no line.
    #[display("tied")]
    Tied,
}

impl Phase {
    /// True once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}
