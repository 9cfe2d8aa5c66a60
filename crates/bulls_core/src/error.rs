//! Configuration error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Why a set of puzzle rules was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The alphabet has no symbols.
    #[display("alphabet is empty")]
    EmptyAlphabet,

    /// A symbol occurs more than once in the alphabet.
    #[display("symbol {:?} appears more than once in the alphabet", _0)]
    DuplicateSymbol(char),

    /// The alphabet contains a whitespace symbol.
    #[display("alphabet contains a whitespace symbol")]
    WhitespaceSymbol,

    /// The secret length is zero.
    #[display("secret length must be at least 1")]
    ZeroLength,

    /// The secret length is not smaller than the alphabet.
    #[display("secret length {} must be smaller than the alphabet size {}", length, symbols)]
    LengthTooLong {
        /// Requested secret length.
        length: usize,
        /// Number of symbols in the alphabet.
        symbols: usize,
    },
}

/// Invalid alphabet or length, with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What was wrong with the configuration.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
