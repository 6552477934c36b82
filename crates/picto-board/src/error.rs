//! Error types for board navigation and persistence.

use std::fmt;
use std::io;

/// Errors from board operations and the line-format reader/writer.
#[derive(Debug)]
pub enum BoardError {
    /// An I/O error occurred while reading or writing a board file.
    Io(io::Error),
    /// A selected image is not on the current page.
    ///
    /// Absence during a select-style lookup is an expected, recoverable
    /// outcome for the caller driving the board.
    ImageNotFound {
        /// The image location that was requested.
        loc: String,
    },
    /// An item line (`>loc text`) appeared before any category header.
    ///
    /// Items belong to the most recent header, so a leading item has
    /// no category to join.
    ItemBeforeCategory {
        /// 1-based line number of the stray item.
        line: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ImageNotFound { loc } => {
                write!(f, "image '{loc}' is not on the current page")
            }
            Self::ItemBeforeCategory { line } => {
                write!(f, "item on line {line} appears before any category header")
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BoardError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
