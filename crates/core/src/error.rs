//! Error types for the Pokedex catalog
//!
//! Every failure in the system is represented by the [`Error`] enum.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! # Categories
//!
//! | Category | Variants | Description |
//! |----------|----------|-------------|
//! | Not Found | `NotFound`, `NoMatch` | Record or search result doesn't exist |
//! | State | `Conflict` | Id already occupied |
//! | Validation | `InvalidInput` | Bad path/query/body input |
//! | System | `Io`, `Serialization`, `Config` | Startup infrastructure errors |

use crate::types::PokemonId;
use std::io;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ==================== Not Found ====================
    /// No record is stored under the id
    #[error("pokemon not found: {id}")]
    NotFound {
        /// Requested id
        id: PokemonId,
    },

    /// A search produced an empty result
    #[error("no pokemon matches the search criteria")]
    NoMatch,

    // ==================== State Errors ====================
    /// Create was called with an id that is already stored
    #[error("pokemon already exists: {id}")]
    Conflict {
        /// Occupied id
        id: PokemonId,
    },

    // ==================== Validation Errors ====================
    /// Path, query or body failed a type or range constraint
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable reason
        reason: String,
    },

    // ==================== System Errors ====================
    /// I/O error while reading the seed or config file
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying error message
        reason: String,
    },

    /// Malformed JSON or TOML
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying error message
        reason: String,
    },

    /// Invalid configuration
    #[error("configuration error: {reason}")]
    Config {
        /// Human-readable reason
        reason: String,
    },
}

impl Error {
    /// Build an `InvalidInput` error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Build a `Config` error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// True for `NotFound` and `NoMatch`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::NoMatch)
    }

    /// True for errors caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::NoMatch | Error::Conflict { .. } | Error::InvalidInput { .. }
        )
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}
