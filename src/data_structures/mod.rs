//! Data structures for the prefix tree application.
//!
//! Currently this is the prefix tree itself together with its node type.

pub mod prefix_tree;

// Re-export common data structures
pub use prefix_tree::{PrefixTree, PrefixTreeError, PrefixTreeNode, PrefixTreeResult};
