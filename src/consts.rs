//! Shared constants: DOM contract identifiers and default tunables.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` the stylesheet keys its palette off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Scrolling ───────────────────────────────────────────────────

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// How far ahead of a section's top the nav highlight switches to it.
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0;

/// Inline color applied to the nav link of the current section.
pub const ACTIVE_LINK_COLOR: &str = "var(--accent-blue)";

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; shrinks the bottom edge by 100px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Elements that fade in on first scroll into view.
pub const REVEAL_SELECTOR: &str =
    ".skill-card, .experience-card, .volunteer-card, .award-card, .project-card";

pub const REVEAL_HIDDEN_OPACITY: &str = "0";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEAL_SHOWN_OPACITY: &str = "1";
pub const REVEAL_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// ── Resume ──────────────────────────────────────────────────────

pub const RESUME_URL: &str = "assets/Dzakwan Dawsie - Software Engineer - Resume.pdf";
pub const RESUME_TARGET: &str = "_blank";

// ── DOM contract ────────────────────────────────────────────────

pub const ID_THEME_TOGGLE: &str = "themeToggle";
pub const ID_MODAL: &str = "screenshotModal";
pub const ID_MODAL_TITLE: &str = "modalTitle";
pub const ID_GALLERY: &str = "screenshotGallery";
pub const ID_CLOSE_MODAL: &str = "closeModal";
pub const ID_CURRENT_IMAGE: &str = "currentImage";
pub const ID_TOTAL_IMAGES: &str = "totalImages";
pub const ID_RESUME_BUTTON: &str = "download-cv-btn";
pub const ID_CONFIG: &str = "folio-config";
pub const ID_VIEWER_CLOSE: &str = "fullscreenClose";
pub const ID_VIEWER_IMAGE: &str = "fullscreenImage";

pub const SEL_ANCHORS: &str = r##"a[href^="#"]"##;
pub const SEL_SECTIONS: &str = "section[id]";
pub const SEL_NAV_LINKS: &str = ".nav a";
pub const SEL_MODAL_OVERLAY: &str = ".modal-overlay";
pub const SEL_SNAPSHOT_BUTTONS: &str = ".snapshot-btn";
pub const SEL_PROJECT_CARD: &str = ".project-card";
pub const SEL_PROJECT_TITLE: &str = "h3";

/// Attribute on a project card carrying its JSON screenshot list.
pub const ATTR_SCREENSHOTS: &str = "data-screenshots";

/// Attribute stamped on reveal targets so observer entries map back to an index.
pub const ATTR_REVEAL_INDEX: &str = "data-reveal-index";

/// Class toggled on the modal and the viewer while visible.
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_TILE: &str = "screenshot-item";
pub const CLASS_TILE_NUMBER: &str = "screenshot-number";
pub const CLASS_VIEWER: &str = "fullscreen-viewer";
pub const CLASS_VIEWER_CLOSE: &str = "fullscreen-close";

/// Inline close icon for the fullscreen viewer button.
pub const VIEWER_CLOSE_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;
