// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix tree.
//!
//! These errors describe violations of a node's structural contract. The tree
//! itself never surfaces them for well-formed input: absent words and prefixes
//! are reported as `false` or an empty result instead.

/// Errors that can occur in prefix tree node operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixTreeError {
    /// A child was requested for a symbol the node does not have.
    #[error("No child exists for symbol {0:?}")]
    NotFound(char),

    /// A child was added for a symbol the node already has.
    #[error("Child exists for symbol {0:?}")]
    AlreadyExists(char),

    /// An argument violated an operation's precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for prefix tree operations.
pub type PrefixTreeResult<T> = Result<T, PrefixTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrefixTreeError::NotFound('x');
        assert_eq!(err.to_string(), "No child exists for symbol 'x'");

        let err = PrefixTreeError::AlreadyExists('a');
        assert_eq!(err.to_string(), "Child exists for symbol 'a'");

        let err = PrefixTreeError::InvalidArgument("symbol mismatch".to_string());
        assert_eq!(err.to_string(), "Invalid argument: symbol mismatch");
    }
}
