//! Picto: an AAC picture board built on a linear-search associative
//! array.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Picto sub-crates. For most users, adding `picto` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use picto::prelude::*;
//!
//! // Build a board with one category and two items.
//! let mut board = Board::new();
//! board.add_item("img/food/plate.png", "food");
//! board.select("img/food/plate.png").unwrap();
//! board.add_item("img/food/fries.png", "french fries");
//! board.add_item("img/food/melon.png", "watermelon");
//! board.reset();
//!
//! // Round-trip it through the line format.
//! let mut buf = Vec::new();
//! board.write_to(&mut buf).unwrap();
//! let mut reread = Board::read_from(buf.as_slice()).unwrap();
//!
//! reread.select("img/food/plate.png").unwrap();
//! let spoken = reread.select("img/food/melon.png").unwrap();
//! assert_eq!(spoken, Selection::Speak("watermelon".to_string()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `picto-array` | [`array::AssocArray`], [`array::Pair`], the linear-search container |
//! | [`board`] | `picto-board` | [`board::Board`], [`board::Category`], line-format reader/writer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The linear-search associative array (`picto-array`).
///
/// [`array::AssocArray`] is the only container underneath every board
/// page; its slot-order enumeration contract is what makes board
/// serialization deterministic.
pub use picto_array as array;

/// Board, categories, and persistence (`picto-board`).
///
/// [`board::Board`] is the main entry point; it loads from and saves
/// to the line format via [`board::read_board`] and
/// [`board::write_board`].
pub use picto_board as board;

/// Common imports for typical Picto usage.
///
/// ```rust
/// use picto::prelude::*;
/// ```
pub mod prelude {
    // Container
    pub use picto_array::{ArrayError, AssocArray, Pair};

    // Board
    pub use picto_board::{Board, BoardError, Category, Selection};
}
