//! Anagram grouping: key derivation, an order-preserving grouping engine,
//! and flattening into rows.
//!
//! Rows come out in first-occurrence order of their key; members within a
//! row keep input order.

pub mod engine;
pub mod flatten;
pub mod key;

pub use engine::{group, try_group, group_with, Group, Grouping};
pub use flatten::flatten;
pub use key::{count_key, sort_key, CountKey, KeyStrategy, LetterCounts, SortKey};

use hot100_core::errors::GroupingError;
use hot100_core::types::AnagramStrategy;

/// Group anagrams by sorted-character key. Accepts any string content.
pub fn group_anagrams<I, S>(strs: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
{
    flatten(group(strs, sort_key))
}

/// Group anagrams by letter-count key. Rejects anything outside `'a'..='z'`.
pub fn group_anagrams_by_count<I, S>(strs: I) -> Result<Vec<Vec<String>>, GroupingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
{
    group_with(strs, &CountKey).map(flatten)
}

/// Group anagrams with a runtime-selected strategy.
pub fn group_anagrams_with<I, S>(
    strs: I,
    strategy: AnagramStrategy,
) -> Result<Vec<Vec<String>>, GroupingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
{
    match strategy {
        AnagramStrategy::Sort => group_with(strs, &SortKey).map(flatten),
        AnagramStrategy::Count => group_anagrams_by_count(strs),
    }
}
