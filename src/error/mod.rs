//! Error module for the Lanai Trie crate.
//!
//! Component errors stay close to their component (the trie defines its own
//! [`LanaiTrieError`](crate::data_structures::LanaiTrieError)); this module
//! aggregates them for callers that drive several components, such as the
//! command line tool.

use thiserror::Error;

use crate::data_structures::LanaiTrieError;

pub mod config;

/// Result type alias used throughout the crate.
pub type LanaiResult<T> = Result<T, LanaiError>;

/// Core error enum for the Lanai Trie crate.
#[derive(Error, Debug)]
pub enum LanaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] LanaiTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
