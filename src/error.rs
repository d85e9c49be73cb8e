//! Configuration error types
//!
//! Only the configuration layer fails. Gameplay operations are total and
//! return plain values.

use thiserror::Error;

/// Failure while turning a level layout into bricks
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Unknown brick color: {0}")]
    UnknownColor(String),

    #[error("Level layout has zero columns")]
    InvalidGrid,

    #[error("Level layout parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while reading game tuning
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Starting lives must be at least 1")]
    InvalidStartingLives,
}
