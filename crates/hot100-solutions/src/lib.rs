//! # hot100-solutions
//!
//! Solutions to two classic exercises, each with two selectable strategies:
//!
//! - `anagram` – group strings that are permutations of one another, keyed
//!   either by sorted characters or by per-letter counts
//! - `two_sum` – find two indices whose values add up to a target, by
//!   double loop or by a single hash-table pass
//!
//! [`Solver`] binds both to the strategies chosen in a
//! [`hot100_core::config::Hot100Config`].
//!
//! ```rust
//! use hot100_solutions::anagram::group_anagrams;
//! use hot100_solutions::two_sum::two_sum;
//!
//! let rows = group_anagrams(vec!["eat", "tea", "tan", "ate", "nat", "bat"]);
//! assert_eq!(rows, vec![vec!["eat", "tea", "ate"], vec!["tan", "nat"], vec!["bat"]]);
//!
//! assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
//! ```

pub mod anagram;
pub mod solver;
pub mod two_sum;

pub use solver::Solver;
