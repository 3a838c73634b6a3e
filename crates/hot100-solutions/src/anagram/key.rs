//! Key derivation strategies.
//!
//! Two strings are anagrams iff their derived keys are equal. The sort key
//! is exact for any character set; the count key trades that generality for
//! a fixed-size, allocation-free key over `'a'..='z'`.

use std::hash::Hash;

use hot100_core::constants::LETTER_COUNT;
use hot100_core::errors::KeyError;
use hot100_core::types::collections::SmallVec16;

/// A pure `&str -> Key` derivation used by the grouping engine.
pub trait KeyStrategy {
    type Key: Eq + Hash + Clone;

    /// Short name used in logs (`sort`, `count`).
    fn name(&self) -> &'static str;

    fn derive(&self, s: &str) -> Result<Self::Key, KeyError>;
}

/// Key = characters sorted ascending by code point.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortKey;

impl KeyStrategy for SortKey {
    type Key = String;

    fn name(&self) -> &'static str {
        "sort"
    }

    fn derive(&self, s: &str) -> Result<String, KeyError> {
        Ok(sort_key(s))
    }
}

/// Sort the characters of `s` ascending. Never fails.
pub fn sort_key(s: &str) -> String {
    let mut chars: SmallVec16<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Key = occurrence count of each lowercase ASCII letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountKey;

impl KeyStrategy for CountKey {
    type Key = LetterCounts;

    fn name(&self) -> &'static str {
        "count"
    }

    fn derive(&self, s: &str) -> Result<LetterCounts, KeyError> {
        count_key(s)
    }
}

/// Per-letter occurrence counts, indexed by `letter - b'a'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u32; LETTER_COUNT]);

impl LetterCounts {
    /// Count for `letter`, or 0 if it is not in `'a'..='z'`.
    pub fn get(&self, letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            self.0[(letter - b'a') as usize]
        } else {
            0
        }
    }

    /// Total letters counted.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn as_array(&self) -> &[u32; LETTER_COUNT] {
        &self.0
    }
}

/// Count the letters of `s`, failing on the first byte outside `'a'..='z'`.
pub fn count_key(s: &str) -> Result<LetterCounts, KeyError> {
    let mut counts = [0u32; LETTER_COUNT];
    for (offset, b) in s.bytes().enumerate() {
        if !b.is_ascii_lowercase() {
            // Every earlier byte was ASCII, so `offset` is a char boundary.
            let character = s[offset..]
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(KeyError::InvalidCharacter { offset, character });
        }
        counts[(b - b'a') as usize] += 1;
    }
    Ok(LetterCounts(counts))
}
