//! In-page navigation math: anchor fragments, scroll targets, and the
//! current-section computation behind nav link highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigable `<section id>` and its document-relative top, in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Element id referenced by an in-page `href`, e.g. `"#contact"` -> `"contact"`.
///
/// Returns `None` for hrefs that are not fragments or have an empty fragment.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that places `element_top` just below the fixed header.
#[must_use]
pub fn scroll_target(element_top: f64, header_offset: f64) -> f64 {
    element_top - header_offset
}

/// Id of the last section (in document order) whose top, less `lookahead`,
/// has been scrolled past.
#[must_use]
pub fn current_section(scroll_y: f64, sections: &[SectionBounds], lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - lookahead)
        .map(|s| s.id.as_str())
}

/// Highlight flag per nav link: `true` only for links targeting `current`.
#[must_use]
pub fn link_highlights(hrefs: &[String], current: Option<&str>) -> Vec<bool> {
    hrefs
        .iter()
        .map(|href| current.is_some_and(|id| fragment_id(href) == Some(id)))
        .collect()
}
