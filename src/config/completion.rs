//! Completion configuration module.
//!
//! Controls how completion queries issued from the command line are bounded
//! and rendered.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_results`.
const MAX_RESULTS_LIMIT: usize = 1_000_000;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One string per line
    #[default]
    Text,

    /// A JSON document
    Json,
}

/// Completion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompletionConfig {
    /// Maximum number of completions returned per query (0 for unlimited)
    pub max_results: usize,

    /// Format used to print query results
    pub output: OutputFormat,
}

impl CompletionConfig {
    /// Returns the completion limit, or `None` when unlimited.
    pub fn limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "max_results must not exceed {MAX_RESULTS_LIMIT}"
            )));
        }
        Ok(())
    }
}
