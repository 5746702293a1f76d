//! Noughts-and-crosses game logic.
//!
//! A [`Board`] of nine cells, the eight fixed winning lines in [`rules`],
//! and a [`TurnEngine`] that alternates two [`Player`]s and detects wins
//! and ties. No I/O happens here; front ends drive the engine and render
//! what it returns.
//!
//! ```
//! use tictac_core::{RoundOutcome, TurnEngine};
//!
//! let mut engine = TurnEngine::new(Some("Ada"), Some("Bob"));
//! for index in [0, 3, 1, 4] {
//!     engine.play_round(index);
//! }
//! match engine.play_round(2) {
//!     RoundOutcome::Won { player, combo } => {
//!         assert_eq!(player.name(), "Ada");
//!         assert_eq!(combo.indices(), [0, 1, 2]);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use engine::{DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME, TurnEngine};
pub use error::EngineError;
pub use outcome::{Phase, RoundOutcome};
pub use position::Position;
pub use rules::{WIN_COMBOS, WinCombo};
pub use types::{Board, CELLS, Cell, Marker, Player, Seat};
