//! Session controller: the puzzle state machine over a persistence backend.
//!
//! The controller owns one [`GameSession`] and its [`HistoryStore`], keeps
//! both mirrored into a [`KeyValueStore`], and decides what each submitted
//! guess does:
//!
//! ```text
//!            submit (win)                decline
//!   ACTIVE ───────────────▶ PendingWin ─────────▶ FROZEN
//!     ▲                        │ confirm             │
//!     └────────────────────────┴──────── reset ◀─────┘
//! ```
//!
//! A winning guess freezes the session immediately, exactly as a reload of
//! the same persisted state would. Confirming the win starts a new game.

use crate::storage::{KeyValueStore, StorageKey};
use bulls_core::{
    GameSession, HistoryEntry, HistoryStore, Rules, ScoreResult, Secret, SecretGenerator,
    SecretOrigin, invariants,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Whether the session accepts guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SessionPhase {
    /// Guesses are scored and recorded.
    Active,
    /// The secret was found; nothing is recorded until a reset.
    Frozen,
}

/// Why a submission changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum IgnoreReason {
    /// Input was empty or whitespace.
    #[strum(to_string = "blank input")]
    Blank,
    /// The guess is already in the history.
    #[strum(to_string = "already guessed")]
    AlreadyGuessed,
    /// The session is frozen after a win.
    #[strum(to_string = "session is frozen")]
    Frozen,
}

/// What a submitted guess did.
#[must_use]
pub enum Submission<'a, S: KeyValueStore> {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The input is not a legal guess; carries it unchanged.
    Invalid(String),
    /// The guess was scored and recorded.
    Recorded(HistoryEntry),
    /// The guess found the secret. The caller must decide whether to play on.
    Won(PendingWin<'a, S>),
}

impl<S: KeyValueStore> Submission<'_, S> {
    /// Whether the shell should clear its input box.
    pub fn clears_input(&self) -> bool {
        matches!(self, Self::Recorded(_) | Self::Won(_))
    }
}

/// A win awaiting the player's decision.
///
/// Holds the controller mutably, so no other guess can be processed until
/// [`confirm`](Self::confirm) or [`decline`](Self::decline) is called.
/// Dropping it unresolved leaves the session frozen.
#[must_use = "a win must be confirmed or declined"]
pub struct PendingWin<'a, S: KeyValueStore> {
    controller: &'a mut SessionController<S>,
    entry: HistoryEntry,
}

impl<S: KeyValueStore> PendingWin<'_, S> {
    /// The winning entry.
    pub fn entry(&self) -> &HistoryEntry {
        &self.entry
    }

    /// Read access to the frozen session while the decision is pending.
    pub fn controller(&self) -> &SessionController<S> {
        &*self.controller
    }

    /// Starts a new game with a fresh secret and empty history.
    #[instrument(skip(self), fields(guess = %self.entry.guess))]
    pub fn confirm(self) {
        info!("Player continues after win");
        self.controller.start_new_game();
    }

    /// Keeps the finished game on screen, frozen.
    #[instrument(skip(self), fields(guess = %self.entry.guess))]
    pub fn decline(self) {
        info!("Player declined a new game, session stays frozen");
    }

    /// Confirms when `play_again` is true, declines otherwise.
    pub fn resolve(self, play_again: bool) {
        if play_again {
            self.confirm();
        } else {
            self.decline();
        }
    }
}

impl<S: KeyValueStore> std::fmt::Debug for PendingWin<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingWin").field("entry", &self.entry).finish()
    }
}

/// Drives one puzzle session against a persistence backend.
pub struct SessionController<S: KeyValueStore> {
    store: S,
    generator: SecretGenerator,
    rng: StdRng,
    game: GameSession,
    history: HistoryStore,
    phase: SessionPhase,
}

impl<S: KeyValueStore> SessionController<S> {
    /// Restores the session persisted in `store`, or starts a new one.
    #[instrument(skip(store, generator))]
    pub fn new(store: S, rules: Rules, generator: SecretGenerator) -> Self {
        Self::with_rng(store, rules, generator, StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) with an explicit random source.
    #[instrument(skip(store, generator, rng))]
    pub fn with_rng(store: S, rules: Rules, generator: SecretGenerator, mut rng: StdRng) -> Self {
        let stored_secret = if stored_rules_match(&store, &rules) {
            store.get(StorageKey::Secret)
        } else {
            warn!("Stored session was played with different rules, discarding it");
            None
        };

        let game = GameSession::with_secret(rules, stored_secret.as_deref(), &generator, &mut rng);
        let length = game.rules().length();

        let history = match game.origin() {
            SecretOrigin::Restored => stored_history(&store, &game),
            SecretOrigin::Generated => {
                if store.get(StorageKey::History).is_some() {
                    warn!("Discarding stored history that belongs to an unknown secret");
                }
                HistoryStore::new(length)
            }
        };

        let phase = phase_of(&history);

        let mut controller = Self {
            store,
            generator,
            rng,
            game,
            history,
            phase,
        };
        controller.persist_session();

        info!(
            %phase,
            attempts = controller.history.len(),
            "Session ready"
        );
        controller
    }

    /// Submits raw input as a guess.
    ///
    /// Blank input, repeated guesses and anything sent while frozen are
    /// ignored. Invalid input is reported without changing state.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_guess(&mut self, raw: &str) -> Submission<'_, S> {
        if raw.trim().is_empty() {
            return Submission::Ignored(IgnoreReason::Blank);
        }
        if self.phase == SessionPhase::Frozen {
            debug!("Ignoring guess while frozen");
            return Submission::Ignored(IgnoreReason::Frozen);
        }
        if self.history.has(raw) {
            debug!("Ignoring repeated guess");
            return Submission::Ignored(IgnoreReason::AlreadyGuessed);
        }

        let score = match self.game.check(raw) {
            ScoreResult::Invalid(input) => {
                info!("Invalid guess");
                return Submission::Invalid(input);
            }
            ScoreResult::Scored(score) => score,
        };

        let entry = HistoryEntry::new(raw.to_string(), score);
        self.record(entry.clone());

        if score.is_win(self.rules().length()) {
            self.phase = SessionPhase::Frozen;
            info!(goal = "GAME_WIN", attempts = self.history.len(), "Secret found");
            Submission::Won(PendingWin {
                controller: self,
                entry,
            })
        } else {
            info!(bulls = score.bulls, cows = score.cows, "Guess recorded");
            Submission::Recorded(entry)
        }
    }

    /// Discards everything persisted and starts a new game.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) {
        info!(goal = "RESET", "Session reset");
        self.start_new_game();
    }

    /// Remembers text typed but not yet submitted, without whitespace.
    #[instrument(skip(self))]
    pub fn save_draft(&mut self, text: &str) {
        let draft: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if draft.is_empty() {
            self.store.remove(StorageKey::Guess);
        } else {
            self.store.set(StorageKey::Guess, &draft);
        }
    }

    /// Text typed but not yet submitted, if any.
    pub fn draft(&self) -> Option<String> {
        self.store
            .get(StorageKey::Guess)
            .filter(|draft| !draft.is_empty())
    }

    /// Recorded guesses, newest first.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Number of recorded guesses for the current secret.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether submissions are currently ignored.
    pub fn is_frozen(&self) -> bool {
        self.phase == SessionPhase::Frozen
    }

    /// Alphabet and length in play.
    pub fn rules(&self) -> &Rules {
        self.game.rules()
    }

    /// The secret, once it has been found.
    pub fn revealed_secret(&self) -> Option<&Secret> {
        self.is_frozen().then(|| self.game.secret())
    }

    /// The persistence backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.history.append(entry);
        invariants::assert_invariants(&self.history);
        self.store.set(StorageKey::History, &self.history.to_json());
        self.store.remove(StorageKey::Guess);
    }

    #[instrument(skip(self))]
    fn start_new_game(&mut self) {
        self.store.clear();
        self.history.clear();

        let rules = self.game.rules().clone();
        self.game = GameSession::new(rules, &self.generator, &mut self.rng);
        self.phase = SessionPhase::Active;
        self.persist_session();
    }

    fn persist_session(&mut self) {
        let rules = self.game.rules();
        self.store.set(StorageKey::Base, &rules.alphabet().to_string());
        self.store.set(StorageKey::Length, &rules.length().to_string());
        self.store.set(StorageKey::Secret, self.game.secret().as_str());
        self.store.set(StorageKey::History, &self.history.to_json());
    }
}

/// Read-only view of a persisted session.
///
/// Loading never writes to the store, so inspecting a saved game cannot
/// replace or discard it.
#[derive(Debug, Clone)]
pub struct SavedSession {
    game: GameSession,
    history: HistoryStore,
    phase: SessionPhase,
}

impl SavedSession {
    /// Reads the session persisted in `store`.
    ///
    /// Returns `None` if nothing is stored, or if the stored session was
    /// played with different rules or holds an illegal secret.
    #[instrument(skip(store))]
    pub fn load<S: KeyValueStore>(store: &S, rules: &Rules) -> Option<Self> {
        if !stored_rules_match(store, rules) {
            info!("Stored session was played with different rules");
            return None;
        }

        let secret = store.get(StorageKey::Secret)?;
        let Some(game) = GameSession::restore(rules.clone(), &secret) else {
            warn!("Stored secret is not valid for these rules");
            return None;
        };

        let history = stored_history(store, &game);
        let phase = phase_of(&history);
        debug!(%phase, attempts = history.len(), "Saved session loaded");
        Some(Self {
            game,
            history,
            phase,
        })
    }

    /// Recorded guesses, newest first.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Number of recorded guesses.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Phase the session would resume in.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Alphabet and length the session was played with.
    pub fn rules(&self) -> &Rules {
        self.game.rules()
    }

    /// The secret, if it has been found.
    pub fn revealed_secret(&self) -> Option<&Secret> {
        (self.phase == SessionPhase::Frozen).then(|| self.game.secret())
    }
}

/// Stored history for a restored secret, minus anything it could not have produced.
fn stored_history<S: KeyValueStore>(store: &S, game: &GameSession) -> HistoryStore {
    let stored = store.get(StorageKey::History);
    let mut history = HistoryStore::from_json(stored.as_deref(), game.rules().length());
    history.retain_consistent(game);
    history
}

fn phase_of(history: &HistoryStore) -> SessionPhase {
    if history.has_win() {
        SessionPhase::Frozen
    } else {
        SessionPhase::Active
    }
}

/// Whether stored alphabet and length, where present, match `rules`.
fn stored_rules_match<S: KeyValueStore>(store: &S, rules: &Rules) -> bool {
    let base_matches = store
        .get(StorageKey::Base)
        .is_none_or(|base| base == rules.alphabet().to_string());
    let length_matches = store
        .get(StorageKey::Length)
        .is_none_or(|length| length.trim().parse::<usize>() == Ok(rules.length()));
    base_matches && length_matches
}
