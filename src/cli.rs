//! Command-line interface for bulls_and_cows.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bulls and Cows - guess the secret of unique symbols
#[derive(Parser, Debug)]
#[command(name = "bulls_and_cows")]
#[command(about = "Bulls and cows number-guessing puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings file (TOML); defaults are used if it does not exist
    #[arg(long, global = true, env = "BULLS_CONFIG", default_value = "bulls_and_cows.toml")]
    pub config: PathBuf,

    /// Symbols the secret is drawn from
    #[arg(long, global = true, env = "BULLS_ALPHABET")]
    pub alphabet: Option<String>,

    /// Number of symbols in the secret
    #[arg(long, global = true, env = "BULLS_LENGTH")]
    pub length: Option<usize>,

    /// JSON file the session is saved to
    #[arg(long, global = true, env = "BULLS_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    pub memory: bool,

    /// Log file used while the terminal UI owns the screen
    #[arg(long, global = true, default_value = "bulls_and_cows.log")]
    pub log_file: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play line by line on stdin/stdout
    Play,

    /// Play in a full-screen terminal UI
    Tui,

    /// Print the guesses of the saved session
    History,

    /// Discard the saved session and choose a new secret
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["bulls_and_cows"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.memory);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["bulls_and_cows", "tui", "--length", "3", "--memory"]).unwrap();
        assert_eq!(cli.command, Some(Command::Tui));
        assert_eq!(cli.length, Some(3));
        assert!(cli.memory);
    }
}
