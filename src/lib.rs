//! Client-side behavior layer for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser against
//! pre-rendered markup. It owns every interactive behavior of the page: the
//! light/dark theme toggle, smooth in-page scrolling, scroll-triggered card
//! reveals, nav link highlighting, the screenshot gallery modal, the
//! fullscreen image viewer, and the resume download button.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | [`page::PageCore`] state and the [`page::Effect`]s its handlers return |
//! | [`theme`] | Light/dark theme value and its storage encoding |
//! | [`nav`] | Anchor fragments, scroll targets, and current-section math |
//! | [`reveal`] | One-shot reveal tracking for observed cards |
//! | [`gallery`] | Screenshot list decoding and the modal render model |
//! | [`viewer`] | Fullscreen viewer lifecycle |
//! | [`config`] | Page tunables with JSON overrides |
//! | [`consts`] | DOM contract identifiers and default values |
//! | [`error`] | [`error::UiError`] |
//! | `dom` | Browser binding (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod error;
pub mod gallery;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod theme;
pub mod viewer;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: installs logging and mounts the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    greet();
    dom::start();
}

#[cfg(feature = "hydrate")]
fn greet() {
    const LINES: [(&str, &str); 3] = [
        ("%c👋 Hello! ", "color: #2563eb; font-size: 20px; font-weight: bold;"),
        ("%cThanks for checking out my portfolio!", "color: #06b6d4; font-size: 14px;"),
        ("%cBuilt with HTML, CSS, and Rust compiled to WebAssembly", "color: #6b7280; font-size: 12px;"),
    ];
    for (text, style) in LINES {
        web_sys::console::log_2(&text.into(), &style.into());
    }
}
