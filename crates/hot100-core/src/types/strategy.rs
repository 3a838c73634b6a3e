//! Strategy selectors for the two exercises.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How anagram groups are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnagramStrategy {
    /// Key = the string's characters sorted ascending. Accepts any input.
    #[default]
    Sort,
    /// Key = 26 per-letter counts. Accepts only `'a'..='z'`.
    Count,
}

impl AnagramStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for AnagramStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnagramStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sort" => Ok(Self::Sort),
            "count" => Ok(Self::Count),
            other => Err(ConfigError::InvalidValue {
                field: "anagram.strategy".to_string(),
                message: format!("unknown strategy '{other}', expected 'sort' or 'count'"),
            }),
        }
    }
}

/// How two-sum pairs are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoSumStrategy {
    /// O(n²) double loop; first pair in outer/inner order.
    BruteForce,
    /// O(n) single pass over a value → index table.
    #[default]
    HashScan,
}

impl TwoSumStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::HashScan => "hash_scan",
        }
    }
}

impl fmt::Display for TwoSumStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TwoSumStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "brute_force" => Ok(Self::BruteForce),
            "hash_scan" => Ok(Self::HashScan),
            other => Err(ConfigError::InvalidValue {
                field: "two_sum.strategy".to_string(),
                message: format!(
                    "unknown strategy '{other}', expected 'brute_force' or 'hash_scan'"
                ),
            }),
        }
    }
}
