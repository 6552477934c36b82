//! The two-level board: a home page of categories, each holding items.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use smallvec::SmallVec;

use picto_array::AssocArray;

use crate::category::Category;
use crate::error::BoardError;
use crate::reader::read_board;
use crate::writer::write_board;

/// Key of the home page inside the category container.
///
/// The home page is a [`Category`] like any other; its items are the
/// images that name the real categories. The empty string can never be
/// a real category key because header lines always carry a location
/// token.
pub(crate) const HOME_KEY: &str = "";

/// Outcome of selecting an image on the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The image named a category on the home page; the board switched
    /// into it. Nothing is spoken.
    Category,
    /// The image is an item in the current category; this is the text
    /// to speak.
    Speak(String),
}

/// A two-level AAC picture board.
///
/// The home page maps category images to category names; selecting one
/// enters that category. Inside a category, selecting an image yields
/// its spoken text. All state lives in one [`AssocArray`] of
/// [`Category`] pages, with the home page under a reserved key.
#[derive(Clone, Debug)]
pub struct Board {
    /// All pages, home included. Keys are category image locations.
    categories: AssocArray<String, Category>,
    /// Key of the page currently shown; [`HOME_KEY`] at home.
    current: String,
}

impl Board {
    /// Create a board with an empty home page.
    pub fn new() -> Self {
        let mut categories = AssocArray::new();
        // The home page exists for the board's whole lifetime.
        let _ = categories.set(HOME_KEY.to_string(), Category::new(""));
        Self {
            categories,
            current: HOME_KEY.to_string(),
        }
    }

    /// Read a board from a file in the line format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read a board from any byte source in the line format.
    pub fn read_from(reader: impl Read) -> Result<Self, BoardError> {
        read_board(BufReader::new(reader))
    }

    /// Write the board to a file in the line format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BoardError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_board(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the board to any byte sink in the line format.
    pub fn write_to(&self, writer: impl Write) -> Result<(), BoardError> {
        write_board(self, writer)
    }

    /// Act on the image selected on the current page.
    ///
    /// At home, a known category image switches the board into that
    /// category and returns [`Selection::Category`]. Inside a category,
    /// a known item returns [`Selection::Speak`] with its text. Any
    /// other image fails with [`BoardError::ImageNotFound`] and leaves
    /// the board unchanged.
    pub fn select(&mut self, image_loc: &str) -> Result<Selection, BoardError> {
        if self.at_home() {
            if image_loc != HOME_KEY && self.categories.has_key(image_loc) {
                self.current = image_loc.to_string();
                return Ok(Selection::Category);
            }
            return Err(BoardError::ImageNotFound {
                loc: image_loc.to_string(),
            });
        }
        let text = self.current_category().speak_text(image_loc)?;
        Ok(Selection::Speak(text.to_string()))
    }

    /// Add an image/text item to the current page.
    ///
    /// Inside a category this binds `image_loc` to `text` on that page.
    /// At home it additionally registers `image_loc` as a new, empty
    /// category named `text` — unless that category already exists, in
    /// which case only the home-page binding is refreshed (re-adding a
    /// category must not wipe its items).
    pub fn add_item(&mut self, image_loc: &str, text: &str) {
        if self.at_home() {
            self.insert_category(image_loc, text);
        } else if let Ok(page) = self.categories.get_mut(self.current.as_str()) {
            page.add_item(image_loc, text);
        }
    }

    /// Remove an image from the current page; a no-op if absent.
    ///
    /// Inside a category this deletes one item. At home it deletes the
    /// category binding and its whole page. Either removal fills the
    /// vacated slot with the final entry, so enumeration order shifts
    /// for that one entry.
    pub fn remove_item(&mut self, image_loc: &str) {
        if self.at_home() {
            if image_loc == HOME_KEY {
                return;
            }
            self.home_mut().remove_item(image_loc);
            self.categories.remove(image_loc);
        } else if let Ok(page) = self.categories.get_mut(self.current.as_str()) {
            page.remove_item(image_loc);
        }
    }

    /// Image locations of the current page in slot order.
    ///
    /// At home these are the category images; inside a category, its
    /// item images.
    pub fn image_locs(&self) -> SmallVec<[&str; 8]> {
        self.current_category().image_locs()
    }

    /// Name of the current category; empty at home.
    pub fn category_name(&self) -> &str {
        self.current_category().name()
    }

    /// Whether an image appears on the current page.
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.current_category().has_image(image_loc)
    }

    /// Whether the board is showing the home page.
    pub fn at_home(&self) -> bool {
        self.current == HOME_KEY
    }

    /// Return to the home page.
    pub fn reset(&mut self) {
        self.current = HOME_KEY.to_string();
    }

    /// Number of real (non-home) categories.
    pub fn category_count(&self) -> usize {
        self.categories.len() - 1
    }

    /// Look up a category page by its image location.
    pub fn category(&self, image_loc: &str) -> Option<&Category> {
        if image_loc == HOME_KEY {
            return None;
        }
        self.categories.get(image_loc).ok()
    }

    /// Iterate over `(image_loc, page)` for the real categories in
    /// slot order. The home page is derived state and is skipped.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories
            .iter()
            .filter(|(loc, _)| loc.as_str() != HOME_KEY)
            .map(|(loc, cat)| (loc.as_str(), cat))
    }

    /// Register a category and its home-page binding.
    pub(crate) fn insert_category(&mut self, image_loc: &str, name: &str) {
        if !self.categories.has_key(image_loc) {
            let _ = self
                .categories
                .set(image_loc.to_string(), Category::new(name));
        }
        self.home_mut().add_item(image_loc, name);
    }

    /// Add an item to the category stored under `key`, if it exists.
    pub(crate) fn add_to_category(&mut self, key: &str, image_loc: &str, text: &str) {
        if let Ok(page) = self.categories.get_mut(key) {
            page.add_item(image_loc, text);
        }
    }

    fn current_category(&self) -> &Category {
        self.categories
            .get(self.current.as_str())
            .expect("the current key always names a live page")
    }

    fn home_mut(&mut self) -> &mut Category {
        self.categories
            .get_mut(HOME_KEY)
            .expect("the home page is created at construction and never removed")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.add_item("img/food/plate.png", "food");
        board.select("img/food/plate.png").unwrap();
        board.add_item("img/food/fries.png", "french fries");
        board.add_item("img/food/melon.png", "watermelon");
        board.reset();
        board.add_item("img/clothing/hanger.png", "clothing");
        board.select("img/clothing/hanger.png").unwrap();
        board.add_item("img/clothing/shirt.png", "collared shirt");
        board.reset();
        board
    }

    #[test]
    fn new_board_starts_at_empty_home() {
        let board = Board::new();
        assert!(board.at_home());
        assert_eq!(board.category_name(), "");
        assert_eq!(board.category_count(), 0);
        assert!(board.image_locs().is_empty());
    }

    #[test]
    fn adding_at_home_registers_a_category() {
        let mut board = Board::new();
        board.add_item("img/food/plate.png", "food");
        assert_eq!(board.category_count(), 1);
        assert_eq!(&board.image_locs()[..], ["img/food/plate.png"]);
        assert!(board.has_image("img/food/plate.png"));
    }

    #[test]
    fn selecting_a_category_switches_into_it() {
        let mut board = sample_board();
        let sel = board.select("img/food/plate.png").unwrap();
        assert_eq!(sel, Selection::Category);
        assert!(!board.at_home());
        assert_eq!(board.category_name(), "food");
        assert_eq!(
            &board.image_locs()[..],
            ["img/food/fries.png", "img/food/melon.png"]
        );
    }

    #[test]
    fn selecting_an_item_speaks_its_text() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        let sel = board.select("img/food/fries.png").unwrap();
        assert_eq!(sel, Selection::Speak("french fries".to_string()));
        // Speaking does not leave the category.
        assert_eq!(board.category_name(), "food");
    }

    #[test]
    fn unknown_image_at_home_is_not_found() {
        let mut board = sample_board();
        let err = board.select("img/unknown.png").unwrap_err();
        assert!(matches!(err, BoardError::ImageNotFound { .. }));
        assert!(board.at_home());
    }

    #[test]
    fn unknown_image_in_category_is_not_found() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        let err = board.select("img/food/unknown.png").unwrap_err();
        assert!(matches!(err, BoardError::ImageNotFound { .. }));
        // The failed select leaves the board where it was.
        assert_eq!(board.category_name(), "food");
    }

    #[test]
    fn home_key_is_never_selectable() {
        let mut board = sample_board();
        assert!(board.select("").is_err());
    }

    #[test]
    fn reset_returns_home() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        board.reset();
        assert!(board.at_home());
        assert_eq!(
            &board.image_locs()[..],
            ["img/food/plate.png", "img/clothing/hanger.png"]
        );
    }

    #[test]
    fn re_adding_a_category_keeps_its_items() {
        let mut board = sample_board();
        board.add_item("img/food/plate.png", "meals");
        board.select("img/food/plate.png").unwrap();
        assert_eq!(board.image_locs().len(), 2);
        // The home-page text was refreshed even though the page survived.
        board.reset();
        assert!(board.has_image("img/food/plate.png"));
    }

    #[test]
    fn removing_a_category_drops_its_page() {
        let mut board = sample_board();
        board.remove_item("img/food/plate.png");
        assert_eq!(board.category_count(), 1);
        assert!(!board.has_image("img/food/plate.png"));
        assert!(board.category("img/food/plate.png").is_none());
        assert!(board.select("img/food/plate.png").is_err());
    }

    #[test]
    fn removing_an_item_shifts_the_last_into_its_slot() {
        let mut board = sample_board();
        board.select("img/food/plate.png").unwrap();
        board.add_item("img/food/cake.png", "cake");
        board.remove_item("img/food/fries.png");
        assert_eq!(
            &board.image_locs()[..],
            ["img/food/cake.png", "img/food/melon.png"]
        );
    }

    #[test]
    fn remove_is_noop_for_absent_image() {
        let mut board = sample_board();
        board.remove_item("img/unknown.png");
        assert_eq!(board.category_count(), 2);
    }

    #[test]
    fn category_lookup_by_image() {
        let board = sample_board();
        let cat = board.category("img/clothing/hanger.png").unwrap();
        assert_eq!(cat.name(), "clothing");
        assert!(board.category("img/unknown.png").is_none());
        assert!(board.category("").is_none());
    }

    #[test]
    fn categories_iterates_real_pages_in_slot_order() {
        let board = sample_board();
        let locs: Vec<_> = board.categories().map(|(loc, _)| loc).collect();
        assert_eq!(locs, ["img/food/plate.png", "img/clothing/hanger.png"]);
    }
}
