//! Line-format board writer.
//!
//! Emits categories in the container's slot order, each header
//! followed by its items in page slot order. Paired with the reader
//! this round-trips a board exactly, because enumeration order is part
//! of the container's contract (insertion order until a removal,
//! swap-with-last thereafter).

use std::io::Write;

use crate::board::Board;
use crate::error::BoardError;

/// Serialize a board to a line-format byte sink.
///
/// The home page is derived from the category headers, so it is not
/// written; reading the output rebuilds it.
pub fn write_board<W: Write>(board: &Board, mut writer: W) -> Result<(), BoardError> {
    for (loc, category) in board.categories() {
        writeln!(writer, "{loc} {}", category.name())?;
        for (item_loc, text) in category.iter() {
            writeln!(writer, ">{item_loc} {text}")?;
        }
    }
    Ok(())
}
