// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Tree Implementation
//!
//! A multi-way prefix tree (trie) that stores strings and supports insertion,
//! exact membership lookup, and retrieval of every stored string starting
//! with a given prefix. The cost of each operation depends only on the length
//! of the strings involved and the size of the subtree searched, never on the
//! total number of strings stored, which makes the tree a good fit for
//! autocompletion and spell-checking.
//!
//! Each string is stored as a path of symbols from the root to a terminal
//! node. Symbols are `char`s compared as opaque values.
//!
//! # Example
//!
//! ```
//! use prefix_tree_lib::data_structures::prefix_tree::PrefixTree;
//!
//! let tree: PrefixTree = ["sells", "seashells", "she", "shore"].into_iter().collect();
//!
//! assert_eq!(tree.size(), 4);
//! assert!(!tree.contains("sea"));
//! assert_eq!(tree.complete("se"), vec!["seashells", "sells"]);
//! assert_eq!(tree.complete("sh"), vec!["she", "shore"]);
//! ```
//!
//! # Ordering
//!
//! [`PrefixTree::complete`] and [`PrefixTree::strings`] return strings in
//! pre-order depth-first order with children visited in ascending `char`
//! order. A string therefore always precedes its extensions, and the overall
//! result is sorted by `char` sequence.

mod error;
mod node;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::ControlFlow;

pub use error::{PrefixTreeError, PrefixTreeResult};
pub use node::PrefixTreeNode;

/// A multi-way prefix tree storing a set of strings.
#[derive(Debug)]
pub struct PrefixTree {
    /// Root node holding the empty start symbol
    root: PrefixTreeNode,

    /// Number of distinct strings stored
    size: usize,
}

impl PrefixTree {
    /// Creates a new empty `PrefixTree`.
    pub fn new() -> Self {
        Self {
            root: PrefixTreeNode::root(),
            size: 0,
        }
    }

    /// Creates a `PrefixTree` holding each of the given strings.
    ///
    /// Duplicates collapse and the insertion order does not affect the result.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        tree.extend(strings);
        tree
    }

    /// Returns the number of distinct strings stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree stores no strings.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &PrefixTreeNode {
        &self.root
    }

    /// Inserts `word` into the tree.
    ///
    /// Missing nodes along the path are created, and the node reached by the
    /// last symbol is marked terminal. Inserting the empty string marks the
    /// root terminal.
    ///
    /// # Returns
    ///
    /// `true` if `word` was not stored before, `false` if it already was. The
    /// size only grows in the first case.
    pub fn insert<S: AsRef<str>>(&mut self, word: S) -> bool {
        let word = word.as_ref();

        let mut node = &mut self.root;
        for symbol in word.chars() {
            node = node.child_or_insert(symbol);
        }

        let is_new = node.mark_terminal();
        if is_new {
            self.size += 1;
            tracing::trace!(word, size = self.size, "inserted string");
        }

        is_new
    }

    /// Returns `true` if `word` was inserted into the tree.
    ///
    /// A word that only exists as a strict prefix of stored strings is not
    /// contained.
    pub fn contains<S: AsRef<str>>(&self, word: S) -> bool {
        self.find_node(word.as_ref())
            .is_some_and(PrefixTreeNode::is_terminal)
    }

    /// Returns every stored string that starts with `prefix`, including
    /// `prefix` itself if it was inserted.
    ///
    /// An unknown prefix yields an empty vector.
    pub fn complete<S: AsRef<str>>(&self, prefix: S) -> Vec<String> {
        let mut completions = Vec::new();
        let _ = self.visit_completions(prefix.as_ref(), |word| {
            completions.push(word.to_owned());
            ControlFlow::<()>::Continue(())
        });
        completions
    }

    /// Returns at most `limit` completions of `prefix`.
    ///
    /// The traversal stops as soon as `limit` strings were found, and the
    /// result is always the first `limit` elements of [`complete`].
    ///
    /// [`complete`]: PrefixTree::complete
    pub fn complete_with_limit<S: AsRef<str>>(&self, prefix: S, limit: usize) -> Vec<String> {
        let mut completions = Vec::with_capacity(limit.min(self.size));
        if limit == 0 {
            return completions;
        }

        let _ = self.visit_completions(prefix.as_ref(), |word| {
            completions.push(word.to_owned());
            if completions.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        completions
    }

    /// Returns every string stored in the tree exactly once.
    pub fn strings(&self) -> Vec<String> {
        self.complete("")
    }

    /// Returns the number of nodes in the tree, not counting the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            count += node.num_children();
            pending.extend(node.children());
        }
        count
    }

    /// Removes every string from the tree.
    pub fn clear(&mut self) {
        self.root.reset();
        self.size = 0;
    }

    /// Returns the node reached by following `word` from the root, or `None`
    /// if some symbol has no matching child. The empty string reaches the
    /// root.
    pub(crate) fn find_node(&self, word: &str) -> Option<&PrefixTreeNode> {
        let mut node = &self.root;
        for symbol in word.chars() {
            node = node.get_child(symbol).ok()?;
        }
        Some(node)
    }

    /// Calls `visit` with `prefix` and each of its stored completions until
    /// `visit` breaks.
    fn visit_completions<B, F>(&self, prefix: &str, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&str) -> ControlFlow<B>,
    {
        match self.find_node(prefix) {
            Some(node) => {
                let mut path = prefix.to_owned();
                Self::traverse(node, &mut path, &mut visit)
            }
            None => ControlFlow::Continue(()),
        }
    }

    /// Depth-first traversal of the subtree below `start`.
    ///
    /// `path` spells the string reaching `start`; it is extended by each
    /// symbol on the way down and restored on the way back up. The walk keeps
    /// its own stack, so its depth is not limited by the thread's stack, and
    /// every node of the subtree is visited at most once.
    fn traverse<B, F>(start: &PrefixTreeNode, path: &mut String, visit: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&str) -> ControlFlow<B>,
    {
        enum Step<'a> {
            Enter(char, &'a PrefixTreeNode),
            Leave,
        }

        fn push_children<'a>(stack: &mut Vec<Step<'a>>, node: &'a PrefixTreeNode) {
            // Reversed so the smallest symbol is popped first
            stack.extend(node.entries().rev().map(|(symbol, child)| Step::Enter(symbol, child)));
        }

        if start.is_terminal() {
            if let ControlFlow::Break(value) = visit(path.as_str()) {
                return ControlFlow::Break(value);
            }
        }

        let mut stack = Vec::new();
        push_children(&mut stack, start);

        while let Some(step) = stack.pop() {
            match step {
                Step::Leave => {
                    path.pop();
                }
                Step::Enter(symbol, node) => {
                    path.push(symbol);
                    if node.is_terminal() {
                        if let ControlFlow::Break(value) = visit(path.as_str()) {
                            return ControlFlow::Break(value);
                        }
                    }
                    stack.push(Step::Leave);
                    push_children(&mut stack, node);
                }
            }
        }

        ControlFlow::Continue(())
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_strings(iter)
    }
}

impl fmt::Display for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrefixTree({:?})", self.strings())
    }
}

// Cloning and comparison go through the stored strings rather than a
// recursive walk of the nodes; the tree for a given set of strings is unique.
impl Clone for PrefixTree {
    fn clone(&self) -> Self {
        Self::from_strings(self.strings())
    }
}

impl PartialEq for PrefixTree {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.strings() == other.strings()
    }
}

impl Eq for PrefixTree {}
