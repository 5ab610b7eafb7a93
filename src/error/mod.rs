//! Error module for the prefix tree application.
//!
//! Errors raised by the library surface are collected into [`PrefixError`] so
//! the binary and the configuration layer can propagate them with `?`.

use thiserror::Error;

use crate::data_structures::prefix_tree::PrefixTreeError;

pub mod config;

/// Result type alias used throughout the application.
pub type PrefixResult<T> = Result<T, PrefixError>;

/// Core error enum for the prefix tree application.
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Structural errors raised by prefix tree nodes.
    #[error("Prefix tree error: {0}")]
    Tree(#[from] PrefixTreeError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors while rendering output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
