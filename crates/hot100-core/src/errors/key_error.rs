//! Key derivation errors.

use super::error_code::{self, Hot100ErrorCode};

/// Errors raised while deriving a grouping key from a single string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid character {character:?} at byte {offset}: expected 'a'..='z'")]
    InvalidCharacter { offset: usize, character: char },
}

impl Hot100ErrorCode for KeyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => error_code::INVALID_CHARACTER,
        }
    }
}
