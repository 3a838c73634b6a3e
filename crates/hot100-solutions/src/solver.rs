//! Config-driven entry point for both exercises.

use std::path::Path;

use hot100_core::config::{CliOverrides, Hot100Config};
use hot100_core::errors::{ConfigError, GroupingError};
use hot100_core::types::{AnagramStrategy, TwoSumStrategy};

use crate::anagram::group_anagrams_with;
use crate::two_sum::two_sum_with;

/// Runs each exercise with the strategy chosen by configuration.
///
/// Holds only the strategy choices; every call builds its own working state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    anagram: AnagramStrategy,
    two_sum: TwoSumStrategy,
}

impl Solver {
    pub fn new(config: &Hot100Config) -> Self {
        Self {
            anagram: config.anagram.effective_strategy(),
            two_sum: config.two_sum.effective_strategy(),
        }
    }

    /// Resolve configuration under `root` and build a solver from it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Hot100Config::load(root, cli_overrides).map(|config| Self::new(&config))
    }

    pub fn with_strategies(anagram: AnagramStrategy, two_sum: TwoSumStrategy) -> Self {
        Self { anagram, two_sum }
    }

    pub fn anagram_strategy(&self) -> AnagramStrategy {
        self.anagram
    }

    pub fn two_sum_strategy(&self) -> TwoSumStrategy {
        self.two_sum
    }

    pub fn group_anagrams<I, S>(&self, strs: I) -> Result<Vec<Vec<String>>, GroupingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        group_anagrams_with(strs, self.anagram)
    }

    pub fn two_sum(&self, nums: &[i32], target: i32) -> Option<(usize, usize)> {
        two_sum_with(nums, target, self.two_sum)
    }
}
