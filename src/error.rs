//! Error type shared by the page core and the browser layer.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is local to one interaction (or to mounting). Callers log
//! the error and leave the page as it was; nothing is surfaced to the visitor.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("required element missing: {0}")]
    MissingElement(String),
    #[error("invalid screenshot list: {0}")]
    ScreenshotDecode(#[source] serde_json::Error),
    #[error("invalid page config: {0}")]
    Config(#[source] serde_json::Error),
    #[error("invalid page config: {field} {reason}")]
    ConfigValue { field: &'static str, reason: &'static str },
    #[error("no screenshot at index {index} (gallery has {len})")]
    TileOutOfRange { index: usize, len: usize },
    #[error("dom error: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
