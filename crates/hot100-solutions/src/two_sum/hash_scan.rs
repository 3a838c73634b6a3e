//! O(n) single pass over a value → index table.
//!
//! Each element looks up its complement among the elements before it, then
//! records itself. Looking up before inserting keeps an element from
//! pairing with itself.

use hot100_core::types::collections::FxHashMap;

/// First pair `(i, j)`, `i < j`, completed during a left-to-right scan.
///
/// On repeated values the table keeps the most recent index, so `i` is the
/// latest earlier position holding the complement.
pub fn two_sum_hash_scan(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let target = i64::from(target);
    let mut seen: FxHashMap<i64, usize> =
        FxHashMap::with_capacity_and_hasher(nums.len(), Default::default());

    for (j, &n) in nums.iter().enumerate() {
        let n = i64::from(n);
        if let Some(&i) = seen.get(&(target - n)) {
            return Some((i, j));
        }
        seen.insert(n, j);
    }
    None
}
