//! Light/dark theme value.
//!
//! The page applies the theme as a `data-theme` attribute on `<html>` and
//! persists its name in `localStorage`. Anything other than `"light"` or
//! `"dark"` in storage is treated as absent.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme applied document-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute and storage value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or applied value; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme to apply on load given the persisted value, if any.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(Self::parse).unwrap_or_default()
    }

    /// Theme that a toggle switches to from the currently applied attribute.
    ///
    /// Only an applied `"light"` flips to dark; any other value flips to light.
    #[must_use]
    pub fn toggled_from(applied: Option<&str>) -> Self {
        match applied {
            Some("light") => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
