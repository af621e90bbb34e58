//! Core error types
//!
//! Stemming itself never fails; errors only arise while building custom
//! exception tables or a stemmer configuration.

use thiserror::Error;

/// Errors raised while assembling a stemmer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An exception entry violates the table invariants
    #[error("invalid exception entry '{word}': {reason}")]
    InvalidException {
        /// The offending table key
        word: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// The same word was mapped to two different stems
    #[error("conflicting exception entries for '{word}': '{first}' and '{second}'")]
    ConflictingException {
        /// The duplicated key
        word: String,
        /// The stem registered first
        first: String,
        /// The stem registered second
        second: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
