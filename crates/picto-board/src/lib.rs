//! Two-level AAC picture board with line-format persistence.
//!
//! An AAC (augmentative and alternative communication) board shows a
//! home page of category images; selecting one opens that category's
//! page of item images, and selecting an item yields the text to
//! speak. All pages are [`picto_array::AssocArray`]s, so enumeration
//! — and therefore the serialized file — follows the container's slot
//! order contract.
//!
//! # Quick start
//!
//! ```rust
//! use picto_board::{Board, Selection};
//!
//! let mut board = Board::new();
//! board.add_item("img/food/plate.png", "food");
//! board.select("img/food/plate.png").unwrap();
//! board.add_item("img/food/fries.png", "french fries");
//!
//! let spoken = board.select("img/food/fries.png").unwrap();
//! assert_eq!(spoken, Selection::Speak("french fries".to_string()));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod board;
mod category;
mod error;
mod reader;
mod writer;

pub use board::{Board, Selection};
pub use category::Category;
pub use error::BoardError;
pub use reader::read_board;
pub use writer::write_board;
