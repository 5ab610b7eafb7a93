//! Tests for the error module.

use crate::data_structures::prefix_tree::{PrefixTreeError, PrefixTreeNode};
use crate::error::config::ConfigError;
use crate::error::{PrefixError, PrefixResult};

fn add_twice() -> PrefixResult<()> {
    let mut root = PrefixTreeNode::root();
    root.add_child('a', PrefixTreeNode::new('a'))?;
    root.add_child('a', PrefixTreeNode::new('a'))?;
    Ok(())
}

/// Test that node errors convert into the application error.
#[test]
fn test_tree_error_conversion() {
    let err = add_twice().unwrap_err();
    assert!(matches!(err, PrefixError::Tree(PrefixTreeError::AlreadyExists('a'))));
    assert_eq!(
        err.to_string(),
        "Prefix tree error: Child exists for symbol 'a'"
    );
}

/// Test that nested errors keep their messages.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err = PrefixError::from(io_error);
    assert!(err.to_string().contains("file not found"));

    let err = PrefixError::from(ConfigError::ValidationError("bad level".to_string()));
    assert_eq!(
        err.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );
}

/// Test that serialization errors convert.
#[test]
fn test_serialization_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: PrefixError = json_error.into();
    assert!(matches!(err, PrefixError::Serialization(_)));
}

/// Test the custom error message.
#[test]
fn test_custom_error() {
    let err = PrefixError::Custom("something went wrong".to_string());
    assert_eq!(err.to_string(), "something went wrong");
}
