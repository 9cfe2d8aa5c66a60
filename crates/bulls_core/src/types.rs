//! Core domain types for bulls and cows.

use crate::error::{ConfigError, ConfigErrorKind};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// Ordered set of distinct symbols a secret is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// The decimal digits, in order.
    pub const DIGITS: &'static str = "0123456789";

    /// Builds an alphabet from a string of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the string is empty, contains whitespace,
    /// or repeats a symbol.
    #[track_caller]
    #[instrument]
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::EmptyAlphabet));
        }

        let mut seen = HashSet::new();
        for symbol in symbols.chars() {
            if symbol.is_whitespace() {
                return Err(ConfigError::new(ConfigErrorKind::WhitespaceSymbol));
            }
            if !seen.insert(symbol) {
                return Err(ConfigError::new(ConfigErrorKind::DuplicateSymbol(symbol)));
            }
        }

        Ok(Self {
            symbols: symbols.chars().collect(),
        })
    }

    /// The default alphabet of ten decimal digits.
    pub fn digits() -> Self {
        Self {
            symbols: Self::DIGITS.chars().collect(),
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in alphabet order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The first symbol of the alphabet.
    pub fn first(&self) -> char {
        self.symbols[0]
    }

    /// Whether the symbol belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::digits()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Alphabet and secret length for one puzzle.
///
/// Invariant: `1 <= length < alphabet.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    alphabet: Alphabet,
    length: usize,
}

impl Rules {
    /// Default secret length.
    pub const DEFAULT_LENGTH: usize = 4;

    /// Combines an alphabet with a secret length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the length is zero or not smaller than the alphabet.
    #[track_caller]
    #[instrument]
    pub fn new(alphabet: Alphabet, length: usize) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::new(ConfigErrorKind::ZeroLength));
        }
        if length >= alphabet.len() {
            return Err(ConfigError::new(ConfigErrorKind::LengthTooLong {
                length,
                symbols: alphabet.len(),
            }));
        }
        Ok(Self { alphabet, length })
    }

    /// Parses the alphabet and validates the combination.
    #[track_caller]
    #[instrument]
    pub fn parse(alphabet: &str, length: usize) -> Result<Self, ConfigError> {
        Self::new(Alphabet::new(alphabet)?, length)
    }

    /// The alphabet secrets and guesses are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of symbols in a secret.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::digits(),
            length: Self::DEFAULT_LENGTH,
        }
    }
}

/// The hidden target string. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Secret(String);

impl Secret {
    pub(crate) fn from_symbols(symbols: &[char]) -> Self {
        Self(symbols.iter().collect())
    }

    pub(crate) fn from_valid(value: &str) -> Self {
        Self(value.to_string())
    }

    /// The secret as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bulls and cows counted for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new)]
pub struct Score {
    /// Symbols matching the secret in value and position.
    pub bulls: usize,
    /// Symbols present in the secret at a different position.
    pub cows: usize,
}

impl Score {
    /// Whether every position matched.
    pub fn is_win(&self, length: usize) -> bool {
        self.bulls == length
    }

    /// Whether the guess shares no symbol with the secret.
    pub fn is_empty(&self) -> bool {
        self.bulls == 0 && self.cows == 0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}b {}c", self.bulls, self.cows)
    }
}

/// Outcome of checking a raw guess against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreResult {
    /// The input failed validation; carries it unchanged.
    Invalid(String),
    /// The input was a legal guess.
    Scored(Score),
}

impl ScoreResult {
    /// Whether this is a scored guess with every position matched.
    pub fn is_win(&self, length: usize) -> bool {
        matches!(self, Self::Scored(score) if score.is_win(length))
    }
}

/// Shortens raw input to at most `length` characters for display.
pub fn display_guess(raw: &str, length: usize) -> String {
    if raw.chars().count() <= length {
        raw.to_string()
    } else {
        let mut shown: String = raw.chars().take(length).collect();
        shown.push('…');
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_rejects_duplicates() {
        let err = Alphabet::new("01231").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::DuplicateSymbol('1'));
    }

    #[test]
    fn test_alphabet_rejects_empty_and_whitespace() {
        assert_eq!(Alphabet::new("").unwrap_err().kind, ConfigErrorKind::EmptyAlphabet);
        assert_eq!(
            Alphabet::new("ab c").unwrap_err().kind,
            ConfigErrorKind::WhitespaceSymbol
        );
    }

    #[test]
    fn test_rules_length_bounds() {
        assert!(Rules::parse("0123456789", 4).is_ok());
        assert!(Rules::parse("0123456789", 9).is_ok());
        assert_eq!(
            Rules::parse("0123456789", 10).unwrap_err().kind,
            ConfigErrorKind::LengthTooLong {
                length: 10,
                symbols: 10
            }
        );
        assert_eq!(
            Rules::parse("0123456789", 0).unwrap_err().kind,
            ConfigErrorKind::ZeroLength
        );
    }

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.length(), 4);
        assert_eq!(rules.alphabet().to_string(), "0123456789");
    }

    #[test]
    fn test_display_guess_truncates() {
        assert_eq!(display_guess("12", 4), "12");
        assert_eq!(display_guess("123456", 4), "1234…");
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::new(1, 2).to_string(), "1b 2c");
        assert!(Score::new(0, 0).is_empty());
        assert!(Score::new(4, 0).is_win(4));
    }
}
