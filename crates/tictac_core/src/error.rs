//! Engine construction errors.

use crate::types::Marker;
use derive_more::{Display, Error};

/// Error raised when an engine cannot be built.
///
/// Moves never produce errors; a refused move is reported as
/// [`RoundOutcome::Rejected`](crate::RoundOutcome::Rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Both players were given the same marker.
    #[display("both players cannot use marker {_0}")]
    DuplicateMarker(#[error(not(source))] Marker),
}
