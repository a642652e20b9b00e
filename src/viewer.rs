//! Fullscreen image viewer lifecycle.
//!
//! The overlay is built on the first open and reused for every later one:
//! `Uninitialized -> Hidden <-> Visible`. It never returns to `Uninitialized`.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerPhase {
    #[default]
    Uninitialized,
    Hidden,
    Visible,
}

/// What the browser layer must do to open the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOpen {
    /// The overlay does not exist yet and must be constructed first.
    pub build: bool,
    pub src: String,
}

#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    phase: ViewerPhase,
    src: Option<String>,
}

impl ViewerState {
    #[must_use]
    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    /// Locator of the most recently opened image.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.phase != ViewerPhase::Uninitialized
    }

    pub fn open(&mut self, src: &str) -> ViewerOpen {
        let build = !self.is_built();
        self.phase = ViewerPhase::Visible;
        self.src = Some(src.to_owned());
        ViewerOpen { build, src: src.to_owned() }
    }

    /// Hide the overlay. Returns `false` when there is nothing to hide
    /// because the overlay was never built.
    pub fn close(&mut self) -> bool {
        if !self.is_built() {
            return false;
        }
        self.phase = ViewerPhase::Hidden;
        true
    }
}
