//! Bulls and cows game logic.
//!
//! A secret of unique symbols is drawn once per game; each guess is scored
//! by how many symbols match in place (bulls) and how many appear elsewhere
//! (cows).
//!
//! # Architecture
//!
//! - **Types**: [`Alphabet`], [`Rules`], [`Secret`], [`Score`], [`ScoreResult`]
//! - **Rules**: pure validation and scoring functions
//! - **Secret**: [`SecretGenerator`], uniform draws without repetition
//! - **Game**: [`GameSession`], one secret checked against many guesses
//! - **History**: [`HistoryStore`], the guesses recorded for the current secret
//! - **Invariants**: properties checked after every accepted guess
//!
//! # Example
//!
//! ```
//! use bulls_core::{GameSession, Rules, Score, ScoreResult};
//!
//! let game = GameSession::restore(Rules::default(), "1234").unwrap();
//!
//! assert_eq!(game.check("1243"), ScoreResult::Scored(Score::new(2, 2)));
//! assert_eq!(game.check("11"), ScoreResult::Invalid("11".to_string()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
pub mod rules;
mod secret;
mod types;

pub use error::{ConfigError, ConfigErrorKind};
pub use game::{GameSession, SecretOrigin};
pub use history::{HistoryEntry, HistoryStore};
pub use rules::{GuessViolation, check_guess, is_valid, score};
pub use secret::SecretGenerator;
pub use types::{Alphabet, Rules, Score, ScoreResult, Secret, display_guess};
