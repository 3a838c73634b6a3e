//! Two-sum configuration.

use serde::{Deserialize, Serialize};

use crate::types::TwoSumStrategy;

/// Configuration for the two-sum solver.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TwoSumConfig {
    /// Pair search strategy. Default: hash_scan.
    pub strategy: Option<TwoSumStrategy>,
}

impl TwoSumConfig {
    /// Returns the effective strategy, defaulting to `hash_scan`.
    pub fn effective_strategy(&self) -> TwoSumStrategy {
        self.strategy.unwrap_or_default()
    }
}
