//! Shared data types for hot100.
//! FxHashMap/SmallVec aliases and the strategy selectors named by config.

pub mod collections;
pub mod strategy;

pub use collections::FxHashMap;
pub use strategy::{AnagramStrategy, TwoSumStrategy};
