//! A single page of images mapping image locations to spoken text.

use smallvec::SmallVec;

use picto_array::AssocArray;

use crate::error::BoardError;

/// One category page: a named collection of image → text bindings.
///
/// Backed by an [`AssocArray`], so items enumerate in slot order:
/// insertion order until an item is removed, swap-with-last thereafter.
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    items: AssocArray<String, String>,
}

impl Category {
    /// Create an empty category with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: AssocArray::new(),
        }
    }

    /// The category's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add (or overwrite) the text spoken for an image.
    pub fn add_item(&mut self, image_loc: &str, text: &str) {
        // A key handed over by value can never be the absent sentinel,
        // so this cannot fail; the discard is deliberate.
        let _ = self.items.set(image_loc.to_string(), text.to_string());
    }

    /// Remove an image from the page; a no-op if absent.
    ///
    /// Removal fills the vacated slot with the final item, so the
    /// page's enumeration order shifts for that one entry.
    pub fn remove_item(&mut self, image_loc: &str) {
        self.items.remove(image_loc);
    }

    /// The text spoken for an image on this page.
    pub fn speak_text(&self, image_loc: &str) -> Result<&str, BoardError> {
        self.items
            .get(image_loc)
            .map(String::as_str)
            .map_err(|_| BoardError::ImageNotFound {
                loc: image_loc.to_string(),
            })
    }

    /// Whether an image is on this page.
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    /// Number of images on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no images.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All image locations in current slot order.
    ///
    /// Inline storage covers typical page sizes without allocating.
    pub fn image_locs(&self) -> SmallVec<[&str; 8]> {
        self.items.iter().map(|(loc, _)| loc.as_str()).collect()
    }

    /// Iterate over `(image_loc, text)` items in current slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(loc, text)| (loc.as_str(), text.as_str()))
    }
}
