//! Nothing is recorded after a winning guess.

use super::Invariant;
use crate::history::HistoryStore;

/// Invariant: a winning entry, if any, is the newest entry.
pub struct WinIsLastInvariant;

impl Invariant<HistoryStore> for WinIsLastInvariant {
    fn holds(history: &HistoryStore) -> bool {
        history
            .all()
            .skip(1)
            .all(|e| !e.score.is_win(history.length()))
    }

    fn description() -> &'static str {
        "A winning guess is always the most recent entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::types::Score;

    #[test]
    fn test_win_as_newest_holds() {
        let mut history = HistoryStore::new(4);
        history.append(HistoryEntry::new("5678".into(), Score::new(0, 0)));
        history.append(HistoryEntry::new("1234".into(), Score::new(4, 0)));
        assert!(WinIsLastInvariant::holds(&history));
    }

    #[test]
    fn test_guess_after_win_violates() {
        let mut history = HistoryStore::new(4);
        history.append(HistoryEntry::new("1234".into(), Score::new(4, 0)));
        history.append(HistoryEntry::new("5678".into(), Score::new(0, 0)));
        assert!(!WinIsLastInvariant::holds(&history));
    }
}
