//! Error types for the associative array.

use std::fmt;

/// Errors from [`AssocArray`](crate::AssocArray) operations.
///
/// Both variants are precise, recoverable conditions meant for the
/// immediate caller. A failing operation never mutates the container,
/// so callers can treat either error as "nothing happened".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// `set` was given the absent-key sentinel (`None`).
    ///
    /// An absent key is never stored, so it can never match a lookup
    /// either.
    NullKey,
    /// No live entry matches the requested key.
    KeyNotFound,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullKey => write!(f, "absent key rejected"),
            Self::KeyNotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for ArrayError {}
