//! Grouping errors.

use super::error_code::{self, Hot100ErrorCode};
use super::KeyError;

/// Errors that can occur while grouping a batch of strings.
///
/// Carries the position of the offending string within the input batch,
/// which a bare [`KeyError`] cannot know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    #[error("Input #{index}: invalid character {character:?} at byte {offset}: expected 'a'..='z'")]
    InvalidCharacter {
        index: usize,
        offset: usize,
        character: char,
    },
}

impl GroupingError {
    /// Attach the input index to a key derivation failure.
    pub fn from_key_error(index: usize, err: KeyError) -> Self {
        match err {
            KeyError::InvalidCharacter { offset, character } => Self::InvalidCharacter {
                index,
                offset,
                character,
            },
        }
    }

    /// Zero-based index of the input string that failed.
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidCharacter { index, .. } => *index,
        }
    }
}

impl Hot100ErrorCode for GroupingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => error_code::INVALID_CHARACTER,
        }
    }
}
