//! Guess validation.

use crate::types::Rules;
use std::collections::HashSet;
use tracing::instrument;

/// Why a candidate guess is not legal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessViolation {
    /// The guess has the wrong number of symbols.
    #[display("expected {} symbols, got {}", expected, found)]
    WrongLength {
        /// Configured length.
        expected: usize,
        /// Length of the candidate.
        found: usize,
    },

    /// The guess uses a symbol outside the alphabet.
    #[display("{:?} is not in the alphabet", _0)]
    ForeignSymbol(char),

    /// The guess repeats a symbol.
    #[display("{:?} is repeated", _0)]
    RepeatedSymbol(char),
}

impl std::error::Error for GuessViolation {}

/// Checks a candidate against the rules, reporting the first violation.
#[instrument(skip(rules), fields(length = rules.length()))]
pub fn check_guess(candidate: &str, rules: &Rules) -> Result<(), GuessViolation> {
    let found = candidate.chars().count();
    if found != rules.length() {
        return Err(GuessViolation::WrongLength {
            expected: rules.length(),
            found,
        });
    }

    let mut seen = HashSet::with_capacity(found);
    for symbol in candidate.chars() {
        if !rules.alphabet().contains(symbol) {
            return Err(GuessViolation::ForeignSymbol(symbol));
        }
        if !seen.insert(symbol) {
            return Err(GuessViolation::RepeatedSymbol(symbol));
        }
    }

    Ok(())
}

/// Returns true if the candidate has the right length, only alphabet
/// symbols, and no repeats.
pub fn is_valid(candidate: &str, rules: &Rules) -> bool {
    check_guess(candidate, rules).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_unique_digits() {
        let rules = Rules::default();
        assert!(is_valid("1234", &rules));
        assert!(is_valid("0987", &rules));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let rules = Rules::default();
        assert_eq!(
            check_guess("11", &rules),
            Err(GuessViolation::WrongLength {
                expected: 4,
                found: 2
            })
        );
        assert!(!is_valid("12345", &rules));
        assert!(!is_valid("", &rules));
    }

    #[test]
    fn test_rejects_foreign_symbol() {
        let rules = Rules::default();
        assert_eq!(check_guess("12a4", &rules), Err(GuessViolation::ForeignSymbol('a')));
        assert!(!is_valid(" 123", &rules));
    }

    #[test]
    fn test_rejects_repeated_symbol() {
        let rules = Rules::default();
        assert_eq!(check_guess("1231", &rules), Err(GuessViolation::RepeatedSymbol('1')));
    }

    #[test]
    fn test_custom_alphabet() {
        let rules = Rules::parse("abcdef", 3).unwrap();
        assert!(is_valid("fad", &rules));
        assert!(!is_valid("123", &rules));
    }
}
