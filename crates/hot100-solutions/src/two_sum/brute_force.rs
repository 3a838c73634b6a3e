//! O(n²) double loop.

/// First pair `(i, j)`, `i < j`, in outer/inner loop order.
pub fn two_sum_brute_force(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let target = i64::from(target);
    for (i, &a) in nums.iter().enumerate() {
        for (j, &b) in nums.iter().enumerate().skip(i + 1) {
            if i64::from(a) + i64::from(b) == target {
                return Some((i, j));
            }
        }
    }
    None
}
