//! Prefix Tree Library
//!
//! This library provides a multi-way prefix tree (trie) for storing strings,
//! checking exact membership, and retrieving every stored string that starts
//! with a given prefix, the building block behind autocomplete and
//! spell-check features. The configuration and error modules support the
//! command-line front end shipped with the crate.
//!
//! # Example
//!
//! ```
//! use prefix_tree_lib::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("card");
//!
//! assert!(tree.contains("card"));
//! assert!(!tree.contains("car"));
//! assert_eq!(tree.complete("car"), vec!["card"]);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{PrefixTree, PrefixTreeError, PrefixTreeNode};

/// Version information for the prefix tree crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
