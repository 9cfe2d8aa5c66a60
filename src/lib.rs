//! Bulls and cows with persistent sessions.
//!
//! This library wires the pure game logic from [`bulls_core`] to a
//! persistence backend and exposes the session state machine that the
//! line shell and the terminal UI drive.
//!
//! # Architecture
//!
//! - **Controller**: [`SessionController`], ACTIVE/FROZEN state machine
//! - **Storage**: [`KeyValueStore`] backends (memory, JSON file, no-op)
//! - **Settings**: [`Settings`], alphabet and length from TOML
//!
//! # Example
//!
//! ```
//! use bulls_and_cows::{MemoryStore, SessionController, Submission};
//! use bulls_core::{Rules, SecretGenerator};
//!
//! let store = MemoryStore::default();
//! let mut controller = SessionController::new(store, Rules::default(), SecretGenerator::new());
//!
//! match controller.submit_guess("1234") {
//!     Submission::Won(pending) => pending.confirm(),
//!     Submission::Recorded(entry) => println!("{entry}"),
//!     _ => {}
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod settings;
mod storage;

// Crate-level exports - Session state machine
pub use controller::{
    IgnoreReason, PendingWin, SavedSession, SessionController, SessionPhase, Submission,
};

// Crate-level exports - Persistence
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, NullStore, StorageKey, StoreError};

// Crate-level exports - Configuration
pub use settings::{Settings, SettingsError};

// Crate-level exports - Game types
pub use bulls_core::{
    Alphabet, ConfigError, ConfigErrorKind, HistoryEntry, HistoryStore, Rules, Score,
    ScoreResult, Secret, SecretGenerator,
};
