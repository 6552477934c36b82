//! Growable, linear-search associative array for the Picto AAC board.
//!
//! This is the leaf crate of the Picto workspace. It provides exactly
//! two types: [`Pair`], an immutable-key binding, and [`AssocArray`],
//! an owning, ordered sequence of pairs exposing map-like operations.
//! Lookup is a deliberate linear scan — the container exists to serve
//! small picture-board pages where enumeration order matters more than
//! asymptotics, and it must work without any hashing machinery.
//!
//! # Contract highlights
//!
//! - Insertion order is preserved until a removal occurs.
//! - Removal compacts by swap-with-last, which is O(1) and moves the
//!   final live pair into the vacated slot. Serialization layers above
//!   observe and depend on this deterministic reordering.
//! - Failing operations are no-ops: the container is never left
//!   partially mutated.
//! - Capacity starts at 16 and doubles from the live count on demand;
//!   it never shrinks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod array;
mod error;
mod pair;

pub use array::{AssocArray, Iter};
pub use error::ArrayError;
pub use pair::Pair;
