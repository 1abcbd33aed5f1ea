//! Error types for riskmap operations.
//!
//! The scoring core itself never fails: degenerate normalization input
//! yields the 50.0 midpoint, missing indicators contribute zero, empty
//! tables produce empty output. Errors arise only at the boundary
//! (reading tables, loading configuration) and in the opt-in strict
//! scoring mode.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskmapError {
    /// File system I/O failures, with the offending path for context.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Input district table could not be parsed.
    #[error("failed to parse district table {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A weight table failed validation.
    #[error("invalid weights: {message}")]
    InvalidWeights { message: String },

    /// Strict mode rejected an out-of-domain component score.
    #[error("{name} score {value} is outside the 0-100 range")]
    ScoreOutOfRange { name: &'static str, value: f64 },
}

impl RiskmapError {
    /// Wrap an I/O error with path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_weights(message: impl Into<String>) -> Self {
        Self::InvalidWeights {
            message: message.into(),
        }
    }
}
