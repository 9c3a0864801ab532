//! Game-specific error types.
//!
//! Gameplay itself has no failure modes; everything here concerns loading and
//! validating [`crate::config::GameConfig`].  Callers log the error and keep the
//! compiled defaults instead of aborting.

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// The configuration file exists but could not be read.
    ConfigRead {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        path: String,
        /// Parser message, including line/column.
        message: String,
    },

    /// A configuration value parsed fine but is outside its usable range.
    InvalidConfig {
        /// Name of the offending field.
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read config '{}': {}", path, source)
            }
            GameError::ConfigParse { path, message } => {
                write!(f, "failed to parse config '{}': {}", path, message)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is invalid (expected {})",
                name, value, expected
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive.
pub fn require_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `min <= max` (both as integer range bounds).
pub fn require_ordered(name: &'static str, min: i32, max: i32) -> GameResult<()> {
    if min <= max {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: min as f32,
            expected: "a minimum no larger than the maximum",
        })
    }
}

/// Returns an error unless `0 <= value <= max`.
pub fn require_within(name: &'static str, value: f32, max: f32) -> GameResult<()> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "a coordinate inside the playfield",
        })
    }
}
