//! Configuration system for hot100.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod anagram_config;
pub mod hot100_config;
pub mod two_sum_config;

pub use anagram_config::AnagramConfig;
pub use hot100_config::{CliOverrides, Hot100Config};
pub use two_sum_config::TwoSumConfig;
