// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix tree.
//!
//! A node stores one symbol of a string, the children that continue paths
//! through it, and a flag marking whether a stored string ends here. Nodes
//! expose structural queries and mutations only; walking the tree is the
//! job of [`PrefixTree`](super::PrefixTree).

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use super::error::{PrefixTreeError, PrefixTreeResult};

/// A node in the prefix tree.
///
/// Children are kept in a `BTreeMap`, so they are always visited in
/// ascending symbol order. Dropping a node releases its subtree without
/// recursion, so arbitrarily long stored strings are safe to drop.
#[derive(Debug)]
pub struct PrefixTreeNode {
    /// Symbol this node represents, `None` for the root
    symbol: Option<char>,

    /// Map of symbols to owned child nodes
    children: BTreeMap<char, PrefixTreeNode>,

    /// Whether the path from the root to this node spells a stored string
    terminal: bool,
}

impl PrefixTreeNode {
    /// Creates a non-terminal node with no children for the given symbol.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol: Some(symbol),
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// Creates a root node, which holds the empty start symbol.
    pub fn root() -> Self {
        Self {
            symbol: None,
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// Returns the symbol this node represents, or `None` for the root.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Returns `true` if a stored string ends at this node.
    ///
    /// The flag is stored, not derived from the children: a node may be
    /// terminal and still have children when a stored string is a prefix of
    /// another stored string.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Marks this node terminal, returning `true` if it was not already.
    pub fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }

    /// Returns the number of children this node has.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node has a child for `symbol`.
    pub fn has_child(&self, symbol: char) -> bool {
        self.children.contains_key(&symbol)
    }

    /// Returns the child for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixTreeError::NotFound`] if there is no such child.
    pub fn get_child(&self, symbol: char) -> PrefixTreeResult<&PrefixTreeNode> {
        self.children
            .get(&symbol)
            .ok_or(PrefixTreeError::NotFound(symbol))
    }

    /// Adds `node` as the child for `symbol` and returns a reference to it.
    ///
    /// # Errors
    ///
    /// * [`PrefixTreeError::AlreadyExists`] if a child for `symbol` exists;
    ///   the existing subtree is left untouched.
    /// * [`PrefixTreeError::InvalidArgument`] if `node` does not represent
    ///   `symbol`.
    pub fn add_child(
        &mut self,
        symbol: char,
        node: PrefixTreeNode,
    ) -> PrefixTreeResult<&mut PrefixTreeNode> {
        if node.symbol != Some(symbol) {
            return Err(PrefixTreeError::InvalidArgument(format!(
                "child for symbol {symbol:?} represents {:?}",
                node.symbol
            )));
        }

        match self.children.entry(symbol) {
            btree_map::Entry::Occupied(_) => Err(PrefixTreeError::AlreadyExists(symbol)),
            btree_map::Entry::Vacant(slot) => Ok(slot.insert(node)),
        }
    }

    /// Returns the child for `symbol`, creating an empty one if absent.
    pub(crate) fn child_or_insert(&mut self, symbol: char) -> &mut PrefixTreeNode {
        self.children
            .entry(symbol)
            .or_insert_with(|| PrefixTreeNode::new(symbol))
    }

    /// Iterates over the children in ascending symbol order.
    pub fn children(&self) -> impl Iterator<Item = &PrefixTreeNode> + '_ {
        self.children.values()
    }

    /// Iterates over `(symbol, child)` pairs in ascending symbol order.
    pub(crate) fn entries(&self) -> impl DoubleEndedIterator<Item = (char, &PrefixTreeNode)> + '_ {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }

    /// Removes every child and clears the terminal flag.
    pub(crate) fn reset(&mut self) {
        self.children.clear();
        self.terminal = false;
    }
}

impl Drop for PrefixTreeNode {
    fn drop(&mut self) {
        // Detach descendants onto a heap stack so each node drops childless
        let mut pending: Vec<PrefixTreeNode> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Display for PrefixTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(symbol) => write!(f, "({symbol})"),
            None => write!(f, "()"),
        }
    }
}
