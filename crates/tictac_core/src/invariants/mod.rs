//! First-class invariants for the turn engine.
//!
//! Invariants are logical properties that hold between any two engine
//! calls. They are checked after every accepted move in debug builds and
//! can be tested on their own.

mod balanced_markers;
mod combo_matches_phase;
mod turn_follows_board;

pub use balanced_markers::BalancedMarkers;
pub use combo_matches_phase::ComboMatchesPhase;
pub use turn_follows_board::TurnFollowsBoard;

use crate::engine::TurnEngine;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Every engine invariant.
pub type EngineInvariants = (BalancedMarkers, ComboMatchesPhase, TurnFollowsBoard);

/// Panics on any violated invariant. No-op in release builds.
pub(crate) fn assert_invariants(engine: &TurnEngine) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = EngineInvariants::check_all(engine) {
        tracing::error!(?violations, "Engine invariants violated");
        panic!("engine invariants violated: {violations:?}");
    }
}
