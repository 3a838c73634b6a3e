//! Two-sum: indices of two distinct elements whose values add up to a target.
//!
//! "No pair" is a normal outcome and comes back as `None`. Sums are taken in
//! `i64`, so no input can overflow.

pub mod brute_force;
pub mod hash_scan;

pub use brute_force::two_sum_brute_force;
pub use hash_scan::two_sum_hash_scan;

use hot100_core::types::TwoSumStrategy;

/// Two-sum with the default strategy (single hash-table pass).
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    two_sum_hash_scan(nums, target)
}

/// Two-sum with a runtime-selected strategy.
pub fn two_sum_with(nums: &[i32], target: i32, strategy: TwoSumStrategy) -> Option<(usize, usize)> {
    let pair = match strategy {
        TwoSumStrategy::BruteForce => two_sum_brute_force(nums, target),
        TwoSumStrategy::HashScan => two_sum_hash_scan(nums, target),
    };
    tracing::debug!(
        input_len = nums.len(),
        strategy = %strategy,
        found = pair.is_some(),
        "Two-sum search complete"
    );
    pair
}
