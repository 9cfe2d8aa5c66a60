//! Property checks for secret generation, validation and scoring.

use bulls_core::{Rules, Score, SecretGenerator, is_valid, score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Every ordered arrangement of `length` distinct digits.
fn all_guesses(length: usize) -> Vec<String> {
    fn extend(prefix: &mut String, length: usize, out: &mut Vec<String>) {
        if prefix.len() == length {
            out.push(prefix.clone());
            return;
        }
        for digit in '0'..='9' {
            if !prefix.contains(digit) {
                prefix.push(digit);
                extend(prefix, length, out);
                prefix.pop();
            }
        }
    }

    let mut out = Vec::new();
    extend(&mut String::new(), length, &mut out);
    out
}

#[test]
fn test_generated_secrets_use_distinct_alphabet_symbols() {
    let mut rng = StdRng::seed_from_u64(2024);
    let generator = SecretGenerator::new();

    for length in 1..10 {
        let rules = Rules::parse("0123456789", length).unwrap();
        for _ in 0..100 {
            let secret = generator.generate(&rules, &mut rng);
            let symbols: HashSet<char> = secret.as_str().chars().collect();
            assert_eq!(symbols.len(), length);
            assert!(symbols.iter().all(|c| c.is_ascii_digit()));
        }
    }
}

#[test]
fn test_every_digit_eventually_leads() {
    let mut rng = StdRng::seed_from_u64(5);
    let generator = SecretGenerator::new().avoid_leading_first_symbol(false);
    let rules = Rules::default();

    let leaders: HashSet<char> = (0..2000)
        .filter_map(|_| generator.generate(&rules, &mut rng).as_str().chars().next())
        .collect();
    assert_eq!(leaders.len(), 10);
}

#[test]
fn test_score_bounds_hold_for_all_guesses() {
    let mut rng = StdRng::seed_from_u64(99);
    let guesses = all_guesses(4);
    assert_eq!(guesses.len(), 5040);

    for _ in 0..5 {
        let secret = &guesses[rng.gen_range(0..guesses.len())];
        for guess in &guesses {
            let result = score(secret, guess);
            assert!(result.bulls + result.cows <= 4, "{secret} vs {guess}");
        }
        assert_eq!(score(secret, secret), Score::new(4, 0));
    }
}

#[test]
fn test_score_is_symmetric() {
    let guesses = all_guesses(3);
    let secret = "071";
    for guess in &guesses {
        assert_eq!(score(secret, guess), score(guess, secret));
    }
}

#[test]
fn test_validator_rejects_malformed_input() {
    let rules = Rules::default();
    for bad in ["", "123", "12345", "1a23", "1231", "１２３４", "12 3"] {
        assert!(!is_valid(bad, &rules), "{bad:?} should be invalid");
    }
    assert!(all_guesses(4).iter().all(|g| is_valid(g, &rules)));
}

#[test]
fn test_spec_examples() {
    assert_eq!(score("1234", "1243"), Score::new(2, 2));
    assert_eq!(score("1234", "5678"), Score::new(0, 0));
    assert!(score("1234", "1234").is_win(4));
}
