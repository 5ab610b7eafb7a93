//! Seed configuration module.
//!
//! Strings listed here are inserted into every tree the command line builds,
//! ahead of any words given as arguments.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Seed word configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeedConfig {
    /// Strings to pre-populate the tree with
    pub words: Vec<String>,
}

impl Validate for SeedConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Any string, the empty one included, is a valid tree entry
        Ok(())
    }
}
