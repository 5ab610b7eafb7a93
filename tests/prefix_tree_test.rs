// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the prefix tree public API.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::thread;

use prefix_tree_lib::data_structures::prefix_tree::{PrefixTree, PrefixTreeError, PrefixTreeNode};

#[test]
fn test_autocomplete_session() {
    let mut tree = PrefixTree::new();
    assert!(tree.is_empty());
    assert!(tree.strings().is_empty());

    for word in "how much wood would a wood chuck chuck if a wood chuck could chuck wood"
        .split_whitespace()
    {
        tree.insert(word);
    }

    assert_eq!(tree.size(), 8);
    assert_eq!(tree.complete("w"), vec!["wood", "would"]);
    assert_eq!(tree.complete("c"), vec!["chuck", "could"]);
    assert_eq!(tree.complete("wo"), vec!["wood", "would"]);
    assert!(tree.complete("x").is_empty());
    assert!(tree.contains("a"));
    assert!(!tree.contains("woo"));
}

#[test]
fn test_spell_check() {
    let dictionary = PrefixTree::from_strings(["peter", "piper", "picked", "peck", "pickled", "peppers"]);
    let text = "peter piper pickd a peck of pickled pepers";

    let misspelled: Vec<&str> = text
        .split_whitespace()
        .filter(|word| !dictionary.contains(word))
        .collect();
    assert_eq!(misspelled, vec!["pickd", "a", "of", "pepers"]);

    let suggestions: BTreeSet<String> = dictionary.complete("pick").into_iter().collect();
    assert_eq!(
        suggestions,
        ["picked", "pickled"].into_iter().map(String::from).collect()
    );
}

#[test]
fn test_node_contract() {
    let mut root = PrefixTreeNode::root();
    assert!(matches!(
        root.get_child('a'),
        Err(PrefixTreeError::NotFound('a'))
    ));

    root.add_child('a', PrefixTreeNode::new('a')).unwrap();
    assert_eq!(
        root.add_child('a', PrefixTreeNode::new('a')).unwrap_err(),
        PrefixTreeError::AlreadyExists('a')
    );
    assert!(root.has_child('a'));
}

#[test]
fn test_tree_walks_node_structure() {
    let tree = PrefixTree::from_strings(["to", "tea"]);
    let t = tree.root().get_child('t').unwrap();

    assert!(!t.is_terminal());
    assert_eq!(t.num_children(), 2);
    assert!(t.get_child('o').unwrap().is_terminal());
    assert!(t.get_child('e').unwrap().get_child('a').unwrap().is_leaf());
}

#[test]
fn test_long_word_survives_listing_and_drop() {
    let word = "z".repeat(100_000);
    let tree = PrefixTree::from_strings([word.as_str(), "zebra"]);

    assert!(tree.contains(&word));
    assert_eq!(tree.complete("ze"), vec!["zebra"]);
    assert_eq!(tree.strings().len(), 2);
    drop(tree);
}

#[test]
fn test_shared_tree_behind_lock() {
    let tree = Arc::new(Mutex::new(PrefixTree::new()));

    let handles: Vec<_> = (0..4)
        .map(|thread_id| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                for i in 0..25 {
                    tree.lock().unwrap().insert(format!("key_{thread_id}_{i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let tree = tree.lock().unwrap();
    assert_eq!(tree.size(), 100);
    assert_eq!(tree.complete("key_3_").len(), 25);
}
