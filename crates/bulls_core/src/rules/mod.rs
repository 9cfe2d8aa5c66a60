//! Game rules for bulls and cows.
//!
//! Pure functions for judging guesses. Rules are kept apart from session
//! state so they can be tested and composed independently.

pub mod score;
pub mod validate;

pub use score::score;
pub use validate::{GuessViolation, check_guess, is_valid};
