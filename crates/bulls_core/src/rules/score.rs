//! Bulls and cows scoring.

use crate::types::Score;
use tracing::instrument;

/// Scores a guess against a secret of the same length.
///
/// Every pair of positions is compared: an equal symbol on the diagonal is
/// a bull, an equal symbol anywhere else is a cow. With unique symbols on
/// both sides each guess symbol contributes at most once, so
/// `bulls + cows <= length`.
#[instrument(skip_all)]
pub fn score(secret: &str, guess: &str) -> Score {
    debug_assert_eq!(secret.chars().count(), guess.chars().count());

    let mut bulls = 0;
    let mut cows = 0;

    for (i, s) in secret.chars().enumerate() {
        for (j, g) in guess.chars().enumerate() {
            if s == g {
                if i == j {
                    bulls += 1;
                } else {
                    cows += 1;
                }
            }
        }
    }

    Score::new(bulls, cows)
}
