//! Page controller core: every interactive behavior of the portfolio page as
//! plain state transitions.
//!
//! Each handler takes the event's inputs, updates [`PageCore`], and returns
//! the [`Effect`]s the host must apply to the document. Nothing here touches
//! the browser, so the whole page can be driven from tests.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::error::UiError;
use crate::gallery::{GalleryView, ModalSession, ScreenshotSet};
use crate::nav::{self, SectionBounds};
use crate::reveal::RevealTracker;
use crate::theme::Theme;
use crate::viewer::ViewerState;

/// Document mutations returned from handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set the `data-theme` attribute on `<html>`.
    ApplyTheme(Theme),
    /// Write the theme name to `localStorage` under `key`.
    PersistTheme { key: String, theme: Theme },
    /// Smooth-scroll the window to a vertical offset.
    ScrollTo { top: f64 },
    /// Per registered nav link: `true` to highlight, `false` to clear.
    HighlightNavLinks(Vec<bool>),
    /// Give a reveal target its hidden starting style.
    HideForReveal { index: usize },
    /// Give a reveal target its visible style and stop observing it.
    Reveal { index: usize },
    /// Replace the gallery contents, heading, and counters.
    RenderGallery(GalleryView),
    ShowModal,
    HideModal,
    /// `true` disables page scrolling behind the modal.
    LockBodyScroll(bool),
    /// Construct the fullscreen overlay. Emitted once per page.
    BuildViewer,
    SetViewerImage(String),
    ShowViewer,
    HideViewer,
    /// Open `url` in a new browsing context named by `target`.
    OpenWindow { url: String, target: String },
}

/// How the gallery modal was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Overlay,
    Escape,
}

#[derive(Debug, Default)]
pub struct PageCore {
    config: PageConfig,
    theme: Theme,
    nav_hrefs: Vec<String>,
    reveal: RevealTracker,
    session: Option<ModalSession>,
    modal_open: bool,
    viewer: ViewerState,
}

impl PageCore {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Theme ---

    /// Apply the persisted theme on load. Storage is not written.
    pub fn load_theme(&mut self, stored: Option<&str>) -> Vec<Effect> {
        self.theme = Theme::from_stored(stored);
        vec![Effect::ApplyTheme(self.theme)]
    }

    /// Flip the theme relative to the attribute currently on `<html>`.
    pub fn toggle_theme(&mut self, applied: Option<&str>) -> Vec<Effect> {
        self.theme = Theme::toggled_from(applied);
        vec![
            Effect::ApplyTheme(self.theme),
            Effect::PersistTheme { key: self.config.storage_key.clone(), theme: self.theme },
        ]
    }

    // --- Navigation ---

    /// Handle a click on an in-page anchor. `resolve` maps an element id to
    /// its document-relative top; an unresolved target scrolls nowhere.
    #[must_use]
    pub fn anchor_clicked(&self, href: &str, resolve: impl FnOnce(&str) -> Option<f64>) -> Vec<Effect> {
        let Some(top) = nav::fragment_id(href).and_then(resolve) else {
            log::debug!("anchor {href} has no target; ignoring");
            return Vec::new();
        };
        vec![Effect::ScrollTo { top: nav::scroll_target(top, self.config.header_offset_px) }]
    }

    /// Register the nav links (by `href`) whose highlight follows scrolling.
    pub fn register_nav_links(&mut self, hrefs: Vec<String>) {
        self.nav_hrefs = hrefs;
    }

    /// Recompute the current section and restyle every nav link.
    #[must_use]
    pub fn scrolled(&self, scroll_y: f64, sections: &[SectionBounds]) -> Vec<Effect> {
        let current = nav::current_section(scroll_y, sections, self.config.section_lookahead_px);
        vec![Effect::HighlightNavLinks(nav::link_highlights(&self.nav_hrefs, current))]
    }

    // --- Reveal ---

    /// Start tracking `count` reveal targets, hiding each one.
    pub fn register_reveal_targets(&mut self, count: usize) -> Vec<Effect> {
        self.reveal = RevealTracker::new(count);
        (0..count).map(|index| Effect::HideForReveal { index }).collect()
    }

    pub fn visibility_changed(&mut self, index: usize, intersecting: bool) -> Vec<Effect> {
        if self.reveal.observe(index, intersecting) {
            vec![Effect::Reveal { index }]
        } else {
            Vec::new()
        }
    }

    // --- Gallery modal ---

    /// Open the gallery for a project card from its raw `data-screenshots`
    /// value and displayed title.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ScreenshotDecode`] for malformed data; the previous
    /// session and modal visibility are left unchanged.
    pub fn snapshot_requested(&mut self, raw_screenshots: &str, title: &str) -> Result<Vec<Effect>, UiError> {
        let screenshots = ScreenshotSet::decode(raw_screenshots)?;
        Ok(self.open_gallery(screenshots, title))
    }

    pub fn open_gallery(&mut self, screenshots: ScreenshotSet, title: &str) -> Vec<Effect> {
        let session = ModalSession::new(title, screenshots);
        let view = session.view();
        self.session = Some(session);
        self.modal_open = true;
        vec![Effect::RenderGallery(view), Effect::ShowModal, Effect::LockBodyScroll(true)]
    }

    pub fn close_gallery(&mut self, trigger: CloseTrigger) -> Vec<Effect> {
        log::debug!("closing gallery via {trigger:?}");
        self.modal_open = false;
        vec![Effect::HideModal, Effect::LockBodyScroll(false)]
    }

    /// Document-level key handler. Only Escape on an open modal does anything.
    pub fn key_down(&mut self, key: &str) -> Vec<Effect> {
        if key == "Escape" && self.modal_open {
            self.close_gallery(CloseTrigger::Escape)
        } else {
            Vec::new()
        }
    }

    /// Open the fullscreen viewer on the tile at `index` of the current session.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::TileOutOfRange`] if the session has no such tile.
    pub fn tile_clicked(&mut self, index: usize) -> Result<Vec<Effect>, UiError> {
        let src = self
            .session
            .as_ref()
            .and_then(|s| s.screenshots.get(index))
            .map(str::to_owned)
            .ok_or_else(|| UiError::TileOutOfRange {
                index,
                len: self.session.as_ref().map_or(0, |s| s.screenshots.len()),
            })?;
        Ok(self.open_viewer(&src))
    }

    // --- Fullscreen viewer ---

    pub fn open_viewer(&mut self, src: &str) -> Vec<Effect> {
        let open = self.viewer.open(src);
        let mut effects = Vec::with_capacity(3);
        if open.build {
            effects.push(Effect::BuildViewer);
        }
        effects.push(Effect::SetViewerImage(open.src));
        effects.push(Effect::ShowViewer);
        effects
    }

    pub fn close_viewer(&mut self) -> Vec<Effect> {
        if self.viewer.close() {
            vec![Effect::HideViewer]
        } else {
            Vec::new()
        }
    }

    // --- Resume ---

    #[must_use]
    pub fn resume_clicked(&self) -> Vec<Effect> {
        vec![Effect::OpenWindow {
            url: self.config.resume_url.clone(),
            target: self.config.resume_target.clone(),
        }]
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn session(&self) -> Option<&ModalSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }
}
