//! Used-guess set agrees with the recorded entries.

use super::Invariant;
use crate::history::HistoryStore;
use std::collections::HashSet;

/// Invariant: every entry's guess is distinct and the used set holds
/// exactly those guesses.
pub struct UniqueGuessesInvariant;

impl Invariant<HistoryStore> for UniqueGuessesInvariant {
    fn holds(history: &HistoryStore) -> bool {
        let guesses: HashSet<&str> = history.entries.iter().map(|e| e.guess.as_str()).collect();

        guesses.len() == history.entries.len()
            && guesses.len() == history.used.len()
            && history.used.iter().all(|g| guesses.contains(g.as_str()))
    }

    fn description() -> &'static str {
        "Every recorded guess is unique and tracked as used"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::types::Score;

    #[test]
    fn test_appends_hold() {
        let mut history = HistoryStore::new(4);
        history.append(HistoryEntry::new("1234".into(), Score::new(1, 1)));
        history.append(HistoryEntry::new("5678".into(), Score::new(0, 0)));
        assert!(UniqueGuessesInvariant::holds(&history));
    }

    #[test]
    fn test_stale_used_set_violates() {
        let mut history = HistoryStore::new(4);
        history.append(HistoryEntry::new("1234".into(), Score::new(1, 1)));
        history.entries.clear();
        assert!(!UniqueGuessesInvariant::holds(&history));
    }
}
