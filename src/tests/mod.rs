//! Test modules for the prefix tree crate.
//!
//! Tests for the tree itself live next to it in
//! `data_structures::prefix_tree::tests`; this module covers configuration
//! loading and error conversion, plus shared fixtures.

pub mod error_tests;
pub mod test_utils;

pub use test_utils::{word_list_strategy, TestFixture};
