//! Line-format board reader.
//!
//! The format is line oriented. A category header is `loc name`; an
//! item is `>loc text` and belongs to the most recent header:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/melon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```
//!
//! Generic over `BufRead` so tests can parse from byte slices and
//! production code from `BufReader<File>`.

use std::io::BufRead;

use crate::board::Board;
use crate::error::BoardError;

/// Parse a board from a line-format byte source.
///
/// Lines that do not split into a location token and a remainder are
/// skipped. An item line before any category header fails with
/// [`BoardError::ItemBeforeCategory`]. A repeated category header
/// refreshes the home-page text and appends subsequent items to the
/// existing page.
pub fn read_board<R: BufRead>(reader: R) -> Result<Board, BoardError> {
    let mut board = Board::new();
    // Key of the most recent header's category; items attach here.
    let mut current: Option<String> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((head, rest)) = line.split_once(char::is_whitespace) else {
            continue;
        };
        if head.is_empty() {
            continue;
        }
        if let Some(loc) = head.strip_prefix('>') {
            let Some(key) = current.as_deref() else {
                return Err(BoardError::ItemBeforeCategory { line: index + 1 });
            };
            board.add_to_category(key, loc, rest);
        } else {
            board.insert_category(head, rest);
            current = Some(head.to_string());
        }
    }

    Ok(board)
}
