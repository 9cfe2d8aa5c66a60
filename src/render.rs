//! Text shared by the line shell and the terminal UI.

use bulls_core::{HistoryEntry, Rules, check_guess, display_guess};

/// One history line: `1243: 2b 2c`, `5678: empty` or `1234: bingo!`.
pub fn describe(entry: &HistoryEntry, length: usize) -> String {
    let verdict = if entry.score.is_win(length) {
        "bingo!".to_string()
    } else if entry.score.is_empty() {
        "empty".to_string()
    } else {
        entry.score.to_string()
    };
    format!("{}: {}", entry.guess, verdict)
}

/// Explains why input was rejected, showing at most `length` characters of it.
pub fn invalid_message(raw: &str, rules: &Rules) -> String {
    let shown = display_guess(raw, rules.length());
    match check_guess(raw, rules) {
        Err(violation) => format!("The guess {} is invalid: {}", shown, violation),
        Ok(()) => format!("The guess {} is invalid", shown),
    }
}

/// Short statement of the rules in play.
pub fn help_line(rules: &Rules) -> String {
    format!(
        "Guess {} different symbols from {}",
        rules.length(),
        rules.alphabet()
    )
}
