//! Guess history for the current secret.
//!
//! The persisted form is a JSON array of `[guess, {"bulls": n, "cows": n}]`
//! pairs, newest first. Reading it back is fail-soft: anything that cannot
//! be understood is dropped instead of failing the session.

use crate::game::GameSession;
use crate::rules::{is_valid, score};
use crate::types::Score;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, instrument, warn};

/// One accepted guess and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(from = "(String, Score)", into = "(String, Score)")]
pub struct HistoryEntry {
    /// The guess as submitted.
    pub guess: String,
    /// Its score against the secret.
    pub score: Score,
}

impl From<(String, Score)> for HistoryEntry {
    fn from((guess, score): (String, Score)) -> Self {
        Self { guess, score }
    }
}

impl From<HistoryEntry> for (String, Score) {
    fn from(entry: HistoryEntry) -> Self {
        (entry.guess, entry.score)
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.guess, self.score)
    }
}

/// Append-only log of guesses for one secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    pub(crate) length: usize,
    pub(crate) entries: VecDeque<HistoryEntry>,
    pub(crate) used: HashSet<String>,
}

impl HistoryStore {
    /// Creates an empty history for secrets of `length` symbols.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            entries: VecDeque::new(),
            used: HashSet::new(),
        }
    }

    /// Records an entry as the newest one.
    ///
    /// Returns false without changing anything if the guess was already
    /// recorded.
    #[instrument(skip(self), fields(count = self.entries.len()))]
    pub fn append(&mut self, entry: HistoryEntry) -> bool {
        if !self.used.insert(entry.guess.clone()) {
            debug!(guess = %entry.guess, "Guess already recorded");
            return false;
        }
        self.entries.push_front(entry);
        true
    }

    /// Whether the guess was recorded since the last clear.
    pub fn has(&self, guess: &str) -> bool {
        self.used.contains(guess)
    }

    /// Entries, newest first.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + DoubleEndedIterator {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Number of recorded guesses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Secret length the entries are judged against.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether any recorded guess matched every position.
    pub fn has_win(&self) -> bool {
        self.entries.iter().any(|e| e.score.is_win(self.length))
    }

    /// Forgets every entry and every used guess.
    #[instrument(skip(self), fields(count = self.entries.len()))]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.used.clear();
    }

    /// Serializes entries newest first.
    pub fn to_json(&self) -> String {
        // A Vec of (String, Score) pairs cannot fail to serialize.
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parses persisted history, newest first.
    ///
    /// Missing data, malformed JSON, a non-array value, and unreadable
    /// elements all degrade to fewer (possibly zero) entries.
    #[instrument(skip(json), fields(present = json.is_some()))]
    pub fn from_json(json: Option<&str>, length: usize) -> Self {
        let mut store = Self::new(length);
        let Some(json) = json else {
            return store;
        };

        let values = match serde_json::from_str::<serde_json::Value>(json) {
            Ok(serde_json::Value::Array(values)) => values,
            Ok(serde_json::Value::Null) => Vec::new(),
            Ok(other) => vec![other],
            Err(e) => {
                warn!(error = %e, "Stored history is not valid JSON, starting empty");
                return store;
            }
        };

        // Oldest first so that append leaves the newest at the front.
        for value in values.into_iter().rev() {
            if value.is_null() {
                continue;
            }
            match serde_json::from_value::<HistoryEntry>(value) {
                Ok(entry) => {
                    if !store.append(entry) {
                        warn!("Dropping repeated stored guess");
                    }
                }
                Err(e) => warn!(error = %e, "Dropping unreadable history entry"),
            }
        }

        store
    }

    /// Drops entries that could not have been produced by `session`:
    /// illegal guesses, stored scores that disagree with the secret, and
    /// anything recorded after a winning guess.
    #[instrument(skip_all, fields(count = self.entries.len()))]
    pub fn retain_consistent(&mut self, session: &GameSession) {
        let rules = session.rules();
        let secret = session.secret().as_str();
        let length = self.length;

        let mut kept = Self::new(length);
        for entry in self.entries.drain(..).rev() {
            if kept.has_win() {
                warn!(guess = %entry.guess, "Dropping stored guess recorded after a win");
                continue;
            }
            if !is_valid(&entry.guess, rules) {
                warn!(guess = %entry.guess, "Dropping illegal stored guess");
                continue;
            }
            if score(secret, &entry.guess) != entry.score {
                warn!(
                    guess = %entry.guess,
                    "Dropping stored guess whose score disagrees with the secret"
                );
                continue;
            }
            kept.append(entry);
        }

        *self = kept;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::SecretGenerator;
    use crate::types::Rules;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(guess: &str, bulls: usize, cows: usize) -> HistoryEntry {
        HistoryEntry::new(guess.to_string(), Score::new(bulls, cows))
    }

    #[test]
    fn test_append_is_newest_first() {
        let mut history = HistoryStore::new(4);
        assert!(history.append(entry("1234", 0, 1)));
        assert!(history.append(entry("5678", 1, 0)));

        let guesses: Vec<_> = history.all().map(|e| e.guess.as_str()).collect();
        assert_eq!(guesses, ["5678", "1234"]);
        assert!(history.has("1234"));
        assert!(!history.has("4321"));
    }

    #[test]
    fn test_append_ignores_repeat() {
        let mut history = HistoryStore::new(4);
        assert!(history.append(entry("1234", 0, 1)));
        assert!(!history.append(entry("1234", 0, 1)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear_forgets_used_guesses() {
        let mut history = HistoryStore::new(4);
        history.append(entry("1234", 0, 1));
        history.clear();
        assert!(history.is_empty());
        assert!(!history.has("1234"));
    }

    #[test]
    fn test_json_format() {
        let mut history = HistoryStore::new(4);
        history.append(entry("1234", 4, 0));
        assert_eq!(history.to_json(), r#"[["1234",{"bulls":4,"cows":0}]]"#);
        assert!(history.has_win());
    }

    #[test]
    fn test_json_restores_order() {
        let json = r#"[["5678",{"bulls":0,"cows":0}],["1243",{"bulls":2,"cows":2}]]"#;
        let history = HistoryStore::from_json(Some(json), 4);
        let guesses: Vec<_> = history.all().map(|e| e.guess.as_str()).collect();
        assert_eq!(guesses, ["5678", "1243"]);
        assert_eq!(history.to_json(), json);
    }

    #[test]
    fn test_corrupt_json_degrades_to_empty() {
        assert!(HistoryStore::from_json(Some("{not json"), 4).is_empty());
        assert!(HistoryStore::from_json(Some("null"), 4).is_empty());
        assert!(HistoryStore::from_json(None, 4).is_empty());
    }

    #[test]
    fn test_unreadable_elements_are_dropped() {
        let json = r#"[null, ["1234",{"bulls":1,"cows":0}], 42, ["5678"]]"#;
        let history = HistoryStore::from_json(Some(json), 4);
        assert_eq!(history.len(), 1);
        assert!(history.has("1234"));
    }

    #[test]
    fn test_extra_answer_fields_are_ignored() {
        let json = r#"[["1234",{"bulls":4,"cows":0,"win":"1234"}]]"#;
        let history = HistoryStore::from_json(Some(json), 4);
        assert!(history.has_win());
    }

    #[test]
    fn test_retain_consistent_drops_tampered_entries() {
        let mut rng = StdRng::seed_from_u64(0);
        let session = GameSession::with_secret(
            Rules::default(),
            Some("1234"),
            &SecretGenerator::new(),
            &mut rng,
        );

        let json = r#"[
            ["9876",{"bulls":0,"cows":0}],
            ["1234",{"bulls":4,"cows":0}],
            ["5678",{"bulls":3,"cows":0}],
            ["1123",{"bulls":1,"cows":2}],
            ["1243",{"bulls":2,"cows":2}]
        ]"#;
        let mut history = HistoryStore::from_json(Some(json), 4);
        history.retain_consistent(&session);

        let guesses: Vec<_> = history.all().map(|e| e.guess.as_str()).collect();
        assert_eq!(guesses, ["1234", "1243"]);
        assert!(!history.has("9876"));
    }
}
