//! Screenshot gallery model: decoding a project's screenshot list and
//! building what the modal renders for it.
//!
//! DESIGN
//! ======
//! The modal keeps one [`ModalSession`] at a time. Opening a gallery replaces
//! the session wholesale; closing only hides the modal, so a tile click that
//! races a close still resolves against the last rendered set.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::error::UiError;

/// Ordered image locators for one project, decoded from its
/// `data-screenshots` JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenshotSet(Vec<String>);

impl ScreenshotSet {
    #[must_use]
    pub fn new(screenshots: Vec<String>) -> Self {
        Self(screenshots)
    }

    /// Decode a JSON array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ScreenshotDecode`] if `raw` is not a JSON array of strings.
    pub fn decode(raw: &str) -> Result<Self, UiError> {
        serde_json::from_str(raw).map(Self).map_err(UiError::ScreenshotDecode)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// State of the currently (or most recently) opened gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSession {
    pub title: String,
    pub screenshots: ScreenshotSet,
}

impl ModalSession {
    #[must_use]
    pub fn new(title: impl Into<String>, screenshots: ScreenshotSet) -> Self {
        Self { title: title.into(), screenshots }
    }

    /// Build the render model for this session.
    #[must_use]
    pub fn view(&self) -> GalleryView {
        let total = self.screenshots.len();
        GalleryView {
            heading: format!("{} - Snapshots", self.title),
            current: total,
            total,
            tiles: self
                .screenshots
                .iter()
                .enumerate()
                .map(|(i, src)| Tile {
                    index: i,
                    src: src.to_owned(),
                    alt: format!("{} screenshot {}", self.title, i + 1),
                    label: (i + 1).to_string(),
                })
                .collect(),
        }
    }
}

/// Everything the modal displays for one gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub heading: String,
    /// Value for the "current" counter. Both counters show the set length.
    pub current: usize,
    pub total: usize,
    pub tiles: Vec<Tile>,
}

/// One thumbnail in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Zero-based position, used to route clicks back to the session.
    pub index: usize,
    pub src: String,
    pub alt: String,
    /// One-based ordinal shown on the tile.
    pub label: String,
}
