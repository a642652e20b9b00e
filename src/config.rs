//! Page tunables with defaults from [`crate::consts`].
//!
//! A page can override any subset through an inline JSON block
//! (`<script type="application/json" id="folio-config">`); absent keys keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACTIVE_LINK_COLOR, HEADER_OFFSET_PX, RESUME_TARGET, RESUME_URL, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_THRESHOLD, SECTION_LOOKAHEAD_PX, THEME_STORAGE_KEY,
};
use crate::error::UiError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub header_offset_px: f64,
    pub section_lookahead_px: f64,
    pub active_link_color: String,
    pub reveal_selector: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub resume_url: String,
    pub resume_target: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            header_offset_px: HEADER_OFFSET_PX,
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
            active_link_color: ACTIVE_LINK_COLOR.to_owned(),
            reveal_selector: REVEAL_SELECTOR.to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            resume_url: RESUME_URL.to_owned(),
            resume_target: RESUME_TARGET.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate an override block.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if `raw` is not a JSON object of known
    /// fields, or [`UiError::ConfigValue`] if a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw).map_err(UiError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the browser would otherwise reject at mount.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), UiError> {
        let invalid = |field, reason| Err(UiError::ConfigValue { field, reason });
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return invalid("reveal_threshold", "must be within 0..=1");
        }
        if self.header_offset_px < 0.0 {
            return invalid("header_offset_px", "must not be negative");
        }
        if self.section_lookahead_px < 0.0 {
            return invalid("section_lookahead_px", "must not be negative");
        }
        if self.reveal_selector.trim().is_empty() {
            return invalid("reveal_selector", "must not be empty");
        }
        if !is_root_margin(&self.reveal_root_margin) {
            return invalid("reveal_root_margin", "must be 1 to 4 px or % lengths");
        }
        if self.storage_key.is_empty() {
            return invalid("storage_key", "must not be empty");
        }
        Ok(())
    }

    /// Resolve the effective config from an optional override block.
    ///
    /// A malformed block is logged and ignored.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

/// Whether `margin` is an `IntersectionObserver` root margin: one to four
/// lengths, each a number followed by `px` or `%`.
fn is_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            let number = part
                .strip_suffix("px")
                .or_else(|| part.strip_suffix('%'));
            number.is_some_and(|n| n.parse::<f64>().is_ok_and(f64::is_finite))
        })
}
