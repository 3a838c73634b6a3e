//! Flatten a grouping into caller-facing rows.

use super::engine::{Group, Grouping};

/// One row per group in discovery order; members in input order.
pub fn flatten<K>(grouping: Grouping<K>) -> Vec<Vec<String>> {
    grouping.into_iter().map(Group::into_members).collect()
}
