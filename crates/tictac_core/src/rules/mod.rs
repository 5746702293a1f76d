//! Game rules.
//!
//! Pure functions over a board snapshot. Rules are kept apart from board
//! storage so the engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WIN_COMBOS, WinCombo, winning_combo};
