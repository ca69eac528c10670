//! Game configuration

use std::path::PathBuf;

/// Default location of the word list the solution is drawn from
pub const DEFAULT_CORPUS_PATH: &str = "corpus/english.txt";

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Default number of consecutive end-of-input reads tolerated on one attempt
pub const DEFAULT_MAX_EOF_READS: u32 = 3;

/// Configuration for a game of Gordle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Word list to pick the solution from (default: `corpus/english.txt`)
    pub corpus_path: PathBuf,
    /// Guesses allowed before the game is lost (default: 6)
    pub max_attempts: u32,
    /// Consecutive end-of-input reads on the same attempt before the game is
    /// abandoned (default: 3). Other read errors are always retried.
    pub max_eof_reads: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_eof_reads: DEFAULT_MAX_EOF_READS,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom attempt budget and default everything else
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }
}
