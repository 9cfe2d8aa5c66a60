//! A single puzzle: one secret checked against many guesses.

use crate::rules::{is_valid, score};
use crate::secret::SecretGenerator;
use crate::types::{Rules, ScoreResult, Secret};
use tracing::{debug, info, instrument, warn};

/// Where a session's secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SecretOrigin {
    /// Freshly generated.
    Generated,
    /// Supplied by the caller, typically restored from storage.
    Restored,
}

/// Owns one secret for its whole lifetime and scores guesses against it.
///
/// The session never resets itself on a win; callers decide what happens next.
#[derive(Debug, Clone)]
pub struct GameSession {
    rules: Rules,
    secret: Secret,
    origin: SecretOrigin,
}

impl GameSession {
    /// Starts a session with a freshly generated secret.
    #[instrument(skip(generator, rng))]
    pub fn new<R: rand::Rng + ?Sized>(
        rules: Rules,
        generator: &SecretGenerator,
        rng: &mut R,
    ) -> Self {
        Self::with_secret(rules, None, generator, rng)
    }

    /// Starts a session from a supplied secret, generating one instead if
    /// the supplied value is missing or not a legal secret for `rules`.
    #[instrument(skip(supplied, generator, rng), fields(supplied = supplied.is_some()))]
    pub fn with_secret<R: rand::Rng + ?Sized>(
        rules: Rules,
        supplied: Option<&str>,
        generator: &SecretGenerator,
        rng: &mut R,
    ) -> Self {
        if let Some(value) = supplied {
            if let Some(session) = Self::restore(rules.clone(), value) {
                return session;
            }
            warn!("Supplied secret is not valid for these rules, generating a new one");
        }

        let secret = generator.generate(&rules, rng);
        info!(origin = %SecretOrigin::Generated, length = rules.length(), "Game session created");
        Self {
            rules,
            secret,
            origin: SecretOrigin::Generated,
        }
    }

    /// Rebuilds a session around a known secret.
    ///
    /// Returns `None` if `value` is not a legal secret for `rules`.
    #[instrument(skip(value))]
    pub fn restore(rules: Rules, value: &str) -> Option<Self> {
        if !is_valid(value, &rules) {
            return None;
        }

        debug!(origin = %SecretOrigin::Restored, length = rules.length(), "Game session restored");
        Some(Self {
            rules,
            secret: Secret::from_valid(value),
            origin: SecretOrigin::Restored,
        })
    }

    /// Validates and scores a raw guess.
    ///
    /// Illegal input comes back as [`ScoreResult::Invalid`] carrying the
    /// original string.
    #[instrument(skip(self))]
    pub fn check(&self, raw: &str) -> ScoreResult {
        if !is_valid(raw, &self.rules) {
            debug!("Guess rejected by validator");
            return ScoreResult::Invalid(raw.to_string());
        }

        let result = score(self.secret.as_str(), raw);
        debug!(bulls = result.bulls, cows = result.cows, "Guess scored");
        ScoreResult::Scored(result)
    }

    /// The secret, for persistence.
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// The rules this session was created with.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Whether the secret was generated or supplied.
    pub fn origin(&self) -> SecretOrigin {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Score;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(secret: &str) -> GameSession {
        let mut rng = StdRng::seed_from_u64(0);
        GameSession::with_secret(Rules::default(), Some(secret), &SecretGenerator::new(), &mut rng)
    }

    #[test]
    fn test_supplied_secret_is_kept() {
        let game = session("1234");
        assert_eq!(game.secret().as_str(), "1234");
        assert_eq!(game.origin(), SecretOrigin::Restored);
    }

    #[test]
    fn test_invalid_supplied_secret_is_replaced() {
        let game = session("1123");
        assert_ne!(game.secret().as_str(), "1123");
        assert_eq!(game.origin(), SecretOrigin::Generated);
        assert!(is_valid(game.secret().as_str(), game.rules()));
    }

    #[test]
    fn test_restore_needs_no_randomness() {
        let game = GameSession::restore(Rules::default(), "9120").unwrap();
        assert_eq!(game.secret().as_str(), "9120");
        assert_eq!(game.origin(), SecretOrigin::Restored);
        assert!(GameSession::restore(Rules::default(), "912").is_none());
    }

    #[test]
    fn test_check_scores_examples() {
        let game = session("1234");
        assert_eq!(game.check("1243"), ScoreResult::Scored(Score::new(2, 2)));
        assert_eq!(game.check("5678"), ScoreResult::Scored(Score::new(0, 0)));

        let win = game.check("1234");
        assert_eq!(win, ScoreResult::Scored(Score::new(4, 0)));
        assert!(win.is_win(4));
    }

    #[test]
    fn test_check_returns_invalid_with_raw_input() {
        let game = session("1234");
        assert_eq!(game.check("11"), ScoreResult::Invalid("11".to_string()));
        assert_eq!(game.check("12 4"), ScoreResult::Invalid("12 4".to_string()));
    }
}
