//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;

/// SmallVec sized for the characters of a typical word (usually <16).
pub type SmallVec16<T> = SmallVec<[T; 16]>;
