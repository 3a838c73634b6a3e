//! Order-preserving grouping engine.
//!
//! Buckets strings by a derived key using an FxHashMap from key to slot in
//! a Vec of groups, so groups come out in first-occurrence order and each
//! group keeps its members in input order. Every call starts from an empty
//! mapping; nothing is retained between calls.

use std::hash::Hash;

use hot100_core::errors::{GroupingError, KeyError};
use hot100_core::types::collections::FxHashMap;

use super::key::KeyStrategy;

/// One key and the input strings that produced it, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K> {
    key: K,
    members: Vec<String>,
}

impl<K> Group<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            members: Vec::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for groups produced by the engine.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn into_members(self) -> Vec<String> {
        self.members
    }
}

/// Mapping from derived key to its group, iterated in key discovery order.
#[derive(Debug, Clone)]
pub struct Grouping<K> {
    slots: FxHashMap<K, usize>,
    groups: Vec<Group<K>>,
}

impl<K> Default for Grouping<K> {
    fn default() -> Self {
        Self {
            slots: FxHashMap::default(),
            groups: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Grouping<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `member` to the group for `key`, creating the group on first sight.
    pub fn insert(&mut self, key: K, member: String) {
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.slots.insert(key.clone(), slot);
                self.groups.push(Group::new(key));
                slot
            }
        };
        self.groups[slot].members.push(member);
    }

    /// Members for `key`, if any string produced it.
    pub fn get(&self, key: &K) -> Option<&[String]> {
        self.slots
            .get(key)
            .map(|&slot| self.groups[slot].members.as_slice())
    }
}

impl<K> Grouping<K> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total strings across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Groups in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Group<K>> {
        self.groups.iter()
    }

    pub fn into_groups(self) -> Vec<Group<K>> {
        self.groups
    }
}

impl<K> IntoIterator for Grouping<K> {
    type Item = Group<K>;
    type IntoIter = std::vec::IntoIter<Group<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Grouping<K> {
    type Item = &'a Group<K>;
    type IntoIter = std::slice::Iter<'a, Group<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group `strings` by an infallible key function.
///
/// `key_fn` runs exactly once per input string.
pub fn group<I, S, K, F>(strings: I, mut key_fn: F) -> Grouping<K>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
    K: Eq + Hash + Clone,
    F: FnMut(&str) -> K,
{
    let mut grouping = Grouping::new();
    for s in strings {
        let key = key_fn(s.as_ref());
        grouping.insert(key, s.into());
    }
    grouping
}

/// Group `strings` by a fallible key function.
///
/// Stops at the first string whose key cannot be derived and reports its
/// input index. No partial grouping is returned.
pub fn try_group<I, S, K, F>(strings: I, mut key_fn: F) -> Result<Grouping<K>, GroupingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
    K: Eq + Hash + Clone,
    F: FnMut(&str) -> Result<K, KeyError>,
{
    let mut grouping = Grouping::new();
    for (index, s) in strings.into_iter().enumerate() {
        let key = key_fn(s.as_ref()).map_err(|e| GroupingError::from_key_error(index, e))?;
        grouping.insert(key, s.into());
    }
    Ok(grouping)
}

/// Group `strings` with a [`KeyStrategy`].
pub fn group_with<I, S, T>(strings: I, strategy: &T) -> Result<Grouping<T::Key>, GroupingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
    T: KeyStrategy,
{
    let result = try_group(strings, |s| strategy.derive(s));
    match &result {
        Ok(grouping) => tracing::debug!(
            input_len = grouping.member_count(),
            group_count = grouping.len(),
            strategy = strategy.name(),
            "Grouping complete"
        ),
        Err(e) => tracing::debug!(
            failed_index = e.index(),
            strategy = strategy.name(),
            error = %e,
            "Grouping rejected input"
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_grouping() {
        let grouping = group(Vec::<String>::new(), |s| s.len());
        assert!(grouping.is_empty());
        assert_eq!(grouping.member_count(), 0);
    }

    #[test]
    fn test_insert_preserves_discovery_and_member_order() {
        let mut grouping = Grouping::new();
        grouping.insert(2, "b1".to_string());
        grouping.insert(1, "a1".to_string());
        grouping.insert(2, "b2".to_string());

        let keys: Vec<i32> = grouping.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, vec![2, 1]);
        assert_eq!(grouping.get(&2), Some(&["b1".to_string(), "b2".to_string()][..]));
        assert_eq!(grouping.get(&3), None);
    }

    #[test]
    fn test_key_fn_runs_once_per_string() {
        let mut calls = 0;
        let grouping = group(vec!["x", "yy", "z"], |s| {
            calls += 1;
            s.len()
        });
        assert_eq!(calls, 3);
        assert_eq!(grouping.len(), 2);
    }

    #[test]
    fn test_try_group_reports_index() {
        let err = try_group(vec!["ok", "fine", "nope"], |s| {
            if s == "nope" {
                Err(KeyError::InvalidCharacter {
                    offset: 0,
                    character: 'n',
                })
            } else {
                Ok(s.len())
            }
        })
        .unwrap_err();
        assert_eq!(err.index(), 2);
    }
}
