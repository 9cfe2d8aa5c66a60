//! First-class invariants for guess history.
//!
//! Invariants are logical properties that must hold after every accepted
//! guess. They are checked in debug builds and tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod bounded_scores;
pub mod unique_guesses;
pub mod win_is_last;

pub use bounded_scores::BoundedScoresInvariant;
pub use unique_guesses::UniqueGuessesInvariant;
pub use win_is_last::WinIsLastInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    UniqueGuessesInvariant,
    BoundedScoresInvariant,
    WinIsLastInvariant,
);

/// Panics in debug builds if any history invariant is violated.
pub fn assert_invariants(history: &crate::history::HistoryStore) {
    let result = HistoryInvariants::check_all(history);
    debug_assert!(result.is_ok(), "History invariants violated: {:?}", result);
    if let Err(violations) = result {
        tracing::error!(?violations, "History invariants violated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{HistoryEntry, HistoryStore};
    use crate::types::Score;

    #[test]
    fn test_invariant_set_holds_for_empty_history() {
        assert!(HistoryInvariants::check_all(&HistoryStore::new(4)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_appends() {
        let mut history = HistoryStore::new(4);
        history.append(HistoryEntry::new("5678".into(), Score::new(0, 1)));
        history.append(HistoryEntry::new("1234".into(), Score::new(4, 0)));
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut history = HistoryStore::new(4);
        history.append(HistoryEntry::new("1234".into(), Score::new(4, 0)));
        history.append(HistoryEntry::new("5678".into(), Score::new(3, 3)));
        history.used.insert("0000".into());

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
