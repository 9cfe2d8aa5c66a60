//! Secret generation.

use crate::error::ConfigError;
use crate::types::{Rules, Secret};
use rand::Rng;
use tracing::{debug, instrument};

/// Draws secrets of unique symbols from an alphabet.
///
/// Symbols are taken uniformly at random from a shrinking working copy of
/// the alphabet, so uniqueness holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretGenerator {
    avoid_leading_first_symbol: bool,
}

impl SecretGenerator {
    /// Creates a generator that keeps the alphabet's first symbol out of
    /// the leading position (no leading zero for digits).
    pub fn new() -> Self {
        Self {
            avoid_leading_first_symbol: true,
        }
    }

    /// Sets whether the alphabet's first symbol may lead the secret.
    pub fn avoid_leading_first_symbol(mut self, avoid: bool) -> Self {
        self.avoid_leading_first_symbol = avoid;
        self
    }

    /// Generates a secret for already validated rules.
    #[instrument(skip(self, rng), fields(length = rules.length()))]
    pub fn generate<R: Rng + ?Sized>(&self, rules: &Rules, rng: &mut R) -> Secret {
        let mut remaining = rules.alphabet().symbols().to_vec();
        let mut chosen = Vec::with_capacity(rules.length());

        for _ in 0..rules.length() {
            let index = rng.gen_range(0..remaining.len());
            chosen.push(remaining.remove(index));
        }

        // A one-symbol secret has no other arrangement to rotate into.
        if self.avoid_leading_first_symbol
            && chosen.len() > 1
            && chosen[0] == rules.alphabet().first()
        {
            debug!("Rotating leading first symbol to the end");
            chosen.rotate_left(1);
        }

        Secret::from_symbols(&chosen)
    }

    /// Validates an alphabet and length, then generates a secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the alphabet repeats a symbol or the
    /// length is not smaller than the alphabet.
    #[track_caller]
    pub fn generate_from<R: Rng + ?Sized>(
        &self,
        alphabet: &str,
        length: usize,
        rng: &mut R,
    ) -> Result<Secret, ConfigError> {
        let rules = Rules::parse(alphabet, length)?;
        Ok(self.generate(&rules, rng))
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;
    use crate::rules::is_valid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_secrets_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = SecretGenerator::new();

        for (alphabet, length) in [("0123456789", 4), ("0123456789", 9), ("abcdef", 3), ("xy", 1)] {
            let rules = Rules::parse(alphabet, length).unwrap();
            for _ in 0..200 {
                let secret = generator.generate(&rules, &mut rng);
                assert_eq!(secret.as_str().chars().count(), length);
                assert!(is_valid(secret.as_str(), &rules), "{secret} for {alphabet}");
            }
        }
    }

    #[test]
    fn test_leading_first_symbol_is_rotated() {
        let mut rng = StdRng::seed_from_u64(11);
        let generator = SecretGenerator::new();
        let rules = Rules::default();

        for _ in 0..500 {
            let secret = generator.generate(&rules, &mut rng);
            assert!(!secret.as_str().starts_with('0'), "{secret}");
        }
    }

    #[test]
    fn test_leading_first_symbol_allowed_when_disabled() {
        let mut rng = StdRng::seed_from_u64(3);
        let generator = SecretGenerator::new().avoid_leading_first_symbol(false);
        let rules = Rules::parse("01", 1).unwrap();

        let leading_zero = (0..200)
            .map(|_| generator.generate(&rules, &mut rng))
            .any(|secret| secret.as_str() == "0");
        assert!(leading_zero);
    }

    #[test]
    fn test_generate_from_rejects_bad_config() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = SecretGenerator::new();

        let err = generator.generate_from("0123", 4, &mut rng).unwrap_err();
        assert!(matches!(err.kind, ConfigErrorKind::LengthTooLong { .. }));

        let err = generator.generate_from("0120", 2, &mut rng).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::DuplicateSymbol('0'));
    }
}
