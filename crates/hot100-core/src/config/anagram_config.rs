//! Anagram grouping configuration.

use serde::{Deserialize, Serialize};

use crate::types::AnagramStrategy;

/// Configuration for the anagram grouping solver.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnagramConfig {
    /// Key derivation strategy. Default: sort.
    pub strategy: Option<AnagramStrategy>,
}

impl AnagramConfig {
    /// Returns the effective strategy, defaulting to `sort`.
    pub fn effective_strategy(&self) -> AnagramStrategy {
        self.strategy.unwrap_or_default()
    }
}
