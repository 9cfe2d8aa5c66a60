//! Scores stay within the secret length.

use super::Invariant;
use crate::history::HistoryStore;

/// Invariant: `bulls + cows <= length` for every entry.
pub struct BoundedScoresInvariant;

impl Invariant<HistoryStore> for BoundedScoresInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history
            .all()
            .all(|e| e.score.bulls + e.score.cows <= history.length())
    }

    fn description() -> &'static str {
        "Bulls plus cows never exceed the secret length"
    }
}
