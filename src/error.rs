//! Error types.
//!
//! Engine operations never fail. Errors only come from the settings seam:
//! reading configuration values and talking to the high-score store.

use thiserror::Error;

/// Failure reported by a `HighScoreStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing storage could not be reached.
    #[error("high score store unavailable: {0}")]
    Unavailable(String),

    /// Stored value is not a valid score.
    #[error("stored high score '{value}' is not a valid score")]
    Corrupt { value: String },
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown difficulty level '{0}'")]
    UnknownDifficulty(String),
}
