//! Puzzle settings loaded from TOML.

use bulls_core::{Alphabet, ConfigError, Rules, SecretGenerator};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Alphabet, length and storage location for a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Symbols a secret is drawn from.
    alphabet: String,

    /// Number of symbols in a secret.
    length: usize,

    /// JSON file the session is persisted to.
    state_file: PathBuf,

    /// Keep the alphabet's first symbol out of the secret's leading position.
    avoid_leading_first_symbol: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::DIGITS.to_string(),
            length: Rules::DEFAULT_LENGTH,
            state_file: PathBuf::from("bulls_and_cows.json"),
            avoid_leading_first_symbol: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(alphabet = %settings.alphabet, length = settings.length, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces any field for which an override is given.
    #[instrument(skip(self))]
    pub fn override_with(
        mut self,
        alphabet: Option<String>,
        length: Option<usize>,
        state_file: Option<PathBuf>,
    ) -> Self {
        if let Some(alphabet) = alphabet {
            self.alphabet = alphabet;
        }
        if let Some(length) = length {
            self.length = length;
        }
        if let Some(state_file) = state_file {
            self.state_file = state_file;
        }
        self
    }

    /// Validates the alphabet and length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the alphabet repeats a symbol or the
    /// length is not smaller than the alphabet.
    #[instrument(skip(self))]
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        Rules::parse(&self.alphabet, self.length)
    }

    /// Secret generator configured from these settings.
    pub fn generator(&self) -> SecretGenerator {
        SecretGenerator::new().avoid_leading_first_symbol(self.avoid_leading_first_symbol)
    }
}

/// Settings file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
