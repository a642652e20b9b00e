//! Browser binding: mounts [`PageCore`] onto the live document.
//!
//! This module is the only place that touches `web_sys`. It resolves the
//! page's DOM contract once, registers every listener during [`mount`], and
//! interprets the [`Effect`]s the core returns. Listeners live as long as the
//! page, so their closures are leaked with `forget`, except gallery tile
//! listeners, which are released whenever a new gallery renders.
//!
//! ERROR HANDLING
//! ==============
//! Missing required elements abort [`mount`] before anything is styled or
//! wired. An observer the browser refuses to build disables reveal only; the
//! cards are never hidden. After mount, every handler reports its own failure
//! through the logger and leaves the rest of the page running.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::PageConfig;
use crate::consts::*;
use crate::error::UiError;
use crate::gallery::GalleryView;
use crate::nav::SectionBounds;
use crate::page::{CloseTrigger, Effect, PageCore};
use crate::theme::Theme;

type Listener = Closure<dyn FnMut(Event)>;

/// Elements the page cannot run without.
struct Required {
    root: Element,
    body: HtmlElement,
    theme_toggle: Element,
    modal: Element,
    modal_title: Element,
    gallery: Element,
    close_modal: Element,
    overlay: Element,
    current_image: Element,
    total_images: Element,
    resume_button: Element,
}

struct ViewerElements {
    overlay: Element,
    image: Element,
}

/// The mounted page: core state plus the elements it drives.
pub struct Page {
    window: Window,
    document: Document,
    config: PageConfig,
    els: Required,
    nav_links: Vec<HtmlElement>,
    sections: Vec<HtmlElement>,
    anchors: Vec<Element>,
    snapshot_buttons: Vec<Element>,
    reveal_targets: Vec<HtmlElement>,
    observer: RefCell<Option<IntersectionObserver>>,
    viewer: RefCell<Option<ViewerElements>>,
    tile_listeners: RefCell<Vec<Listener>>,
    core: RefCell<PageCore>,
}

/// Mount now, or once the document finishes parsing if it is still loading.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; page behavior disabled");
        return;
    };
    if document.ready_state() != "loading" {
        mount_and_report();
        return;
    }
    let deferred = listen(&document, "DOMContentLoaded", |_| mount_and_report());
    report(deferred);
}

fn mount_and_report() {
    match mount() {
        Ok(_) => log::info!("portfolio page mounted"),
        Err(e) => log::error!("page mount failed: {e}"),
    }
}

/// Resolve the DOM contract and wire every behavior.
///
/// Every lookup that can fail runs before the first style change or listener,
/// so a failed mount leaves the page untouched.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] when a required element is absent, or
/// [`UiError::Dom`] when a query or listener registration throws.
pub fn mount() -> Result<Rc<Page>, UiError> {
    let window = web_sys::window().ok_or_else(|| missing("window"))?;
    let document = window.document().ok_or_else(|| missing("document"))?;

    let config_block = document.get_element_by_id(ID_CONFIG).and_then(|el| el.text_content());
    let config = PageConfig::resolve(config_block.as_deref());

    let modal = by_id(&document, ID_MODAL)?;
    let overlay = modal
        .query_selector(SEL_MODAL_OVERLAY)?
        .ok_or_else(|| missing(SEL_MODAL_OVERLAY))?;
    let els = Required {
        root: document.document_element().ok_or_else(|| missing("html"))?,
        body: document.body().ok_or_else(|| missing("body"))?,
        theme_toggle: by_id(&document, ID_THEME_TOGGLE)?,
        modal_title: by_id(&document, ID_MODAL_TITLE)?,
        gallery: by_id(&document, ID_GALLERY)?,
        close_modal: by_id(&document, ID_CLOSE_MODAL)?,
        current_image: by_id(&document, ID_CURRENT_IMAGE)?,
        total_images: by_id(&document, ID_TOTAL_IMAGES)?,
        resume_button: by_id(&document, ID_RESUME_BUTTON)?,
        modal,
        overlay,
    };

    let nav_links: Vec<HtmlElement> = query_all(&document, SEL_NAV_LINKS)?;
    let sections: Vec<HtmlElement> = query_all(&document, SEL_SECTIONS)?;
    let anchors: Vec<Element> = query_all(&document, SEL_ANCHORS)?;
    let snapshot_buttons: Vec<Element> = query_all(&document, SEL_SNAPSHOT_BUTTONS)?;
    let reveal_targets: Vec<HtmlElement> = match query_all(&document, &config.reveal_selector) {
        Ok(targets) => targets,
        Err(e) => {
            log::warn!("reveal selector {:?} rejected: {e}; using default", config.reveal_selector);
            query_all(&document, REVEAL_SELECTOR)?
        }
    };

    let mut core = PageCore::new(config.clone());
    core.register_nav_links(
        nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect(),
    );

    let page = Rc::new(Page {
        window,
        document,
        config,
        els,
        nav_links,
        sections,
        anchors,
        snapshot_buttons,
        reveal_targets,
        observer: RefCell::new(None),
        viewer: RefCell::new(None),
        tile_listeners: RefCell::new(Vec::new()),
        core: RefCell::new(core),
    });
    match page.build_observer() {
        Ok(observer) => *page.observer.borrow_mut() = Some(observer),
        Err(e) => log::warn!("{e}; cards stay visible without reveal"),
    }
    page.wire()?;
    Ok(page)
}

impl Page {
    fn wire(self: &Rc<Self>) -> Result<(), UiError> {
        self.wire_theme()?;
        self.wire_anchors()?;
        self.wire_reveal()?;
        self.wire_scroll()?;
        self.wire_modal()?;
        self.wire_snapshot_buttons()?;
        self.wire_resume()
    }

    // --- Wiring ---

    fn build_observer(self: &Rc<Self>) -> Result<IntersectionObserver, UiError> {
        let page = Rc::clone(self);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let Some(raw) = entry.target().get_attribute(ATTR_REVEAL_INDEX) else {
                        continue;
                    };
                    let Ok(index) = raw.parse::<usize>() else {
                        continue;
                    };
                    let effects = page.core.borrow_mut().visibility_changed(index, entry.is_intersecting());
                    page.run(effects);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.config.reveal_threshold));
        init.set_root_margin(&self.config.reveal_root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();
        Ok(observer)
    }

    fn wire_theme(self: &Rc<Self>) -> Result<(), UiError> {
        let stored = match self.stored_theme() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("{e}; theme falls back to default");
                None
            }
        };
        let effects = self.core.borrow_mut().load_theme(stored.as_deref());
        self.apply_all(effects)?;

        let page = Rc::clone(self);
        listen(&self.els.theme_toggle, "click", move |_| {
            let applied = page.els.root.get_attribute(THEME_ATTRIBUTE);
            let effects = page.core.borrow_mut().toggle_theme(applied.as_deref());
            page.run(effects);
        })
    }

    fn wire_anchors(self: &Rc<Self>) -> Result<(), UiError> {
        for anchor in &self.anchors {
            let page = Rc::clone(self);
            let href = anchor.get_attribute("href").unwrap_or_default();
            listen(anchor, "click", move |event: Event| {
                event.prevent_default();
                let effects = page.core.borrow().anchor_clicked(&href, |id| {
                    page.document
                        .get_element_by_id(id)
                        .and_then(|el| el.dyn_ref::<HtmlElement>().map(|el| f64::from(el.offset_top())))
                });
                page.run(effects);
            })?;
        }
        Ok(())
    }

    /// Hide every reveal target and start observing it. Without an observer
    /// the targets are left untouched so they stay visible.
    fn wire_reveal(self: &Rc<Self>) -> Result<(), UiError> {
        let observer = self.observer.borrow();
        let Some(observer) = observer.as_ref() else {
            return Ok(());
        };
        let effects = self.core.borrow_mut().register_reveal_targets(self.reveal_targets.len());
        self.apply_all(effects)?;
        for target in &self.reveal_targets {
            observer.observe(target);
        }
        Ok(())
    }

    fn wire_scroll(self: &Rc<Self>) -> Result<(), UiError> {
        let page = Rc::clone(self);
        listen(&self.window, "scroll", move |_| report(page.on_scroll()))
    }

    fn wire_modal(self: &Rc<Self>) -> Result<(), UiError> {
        for (target, trigger) in [
            (&self.els.close_modal, CloseTrigger::Button),
            (&self.els.overlay, CloseTrigger::Overlay),
        ] {
            let page = Rc::clone(self);
            listen(target, "click", move |_| {
                let effects = page.core.borrow_mut().close_gallery(trigger);
                page.run(effects);
            })?;
        }

        let page = Rc::clone(self);
        listen(&self.document, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let effects = page.core.borrow_mut().key_down(&key);
            page.run(effects);
        })
    }

    fn wire_snapshot_buttons(self: &Rc<Self>) -> Result<(), UiError> {
        for button in &self.snapshot_buttons {
            let page = Rc::clone(self);
            let target = button.clone();
            listen(button, "click", move |event: Event| {
                event.prevent_default();
                report(page.on_snapshot(&target));
            })?;
        }
        Ok(())
    }

    fn wire_resume(self: &Rc<Self>) -> Result<(), UiError> {
        let page = Rc::clone(self);
        listen(&self.els.resume_button, "click", move |_| {
            let effects = page.core.borrow().resume_clicked();
            page.run(effects);
        })
    }

    // --- Handlers ---

    fn on_scroll(self: &Rc<Self>) -> Result<(), UiError> {
        let scroll_y = self.window.scroll_y()?;
        let sections: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|s| SectionBounds::new(s.id(), f64::from(s.offset_top())))
            .collect();
        let effects = self.core.borrow().scrolled(scroll_y, &sections);
        self.apply_all(effects)
    }

    fn on_snapshot(self: &Rc<Self>, button: &Element) -> Result<(), UiError> {
        let card = button
            .closest(SEL_PROJECT_CARD)?
            .ok_or_else(|| missing(SEL_PROJECT_CARD))?;
        let raw = card
            .get_attribute(ATTR_SCREENSHOTS)
            .ok_or_else(|| missing(ATTR_SCREENSHOTS))?;
        let title = card
            .query_selector(SEL_PROJECT_TITLE)?
            .and_then(|heading| heading.text_content())
            .ok_or_else(|| missing(SEL_PROJECT_TITLE))?;
        let effects = self.core.borrow_mut().snapshot_requested(&raw, &title)?;
        self.apply_all(effects)
    }

    fn on_tile(self: &Rc<Self>, index: usize) -> Result<(), UiError> {
        let effects = self.core.borrow_mut().tile_clicked(index)?;
        self.apply_all(effects)
    }

    // --- Effects ---

    fn run(self: &Rc<Self>, effects: Vec<Effect>) {
        report(self.apply_all(effects));
    }

    fn apply_all(self: &Rc<Self>, effects: Vec<Effect>) -> Result<(), UiError> {
        for effect in effects {
            self.apply(effect)?;
        }
        Ok(())
    }

    fn apply(self: &Rc<Self>, effect: Effect) -> Result<(), UiError> {
        match effect {
            Effect::ApplyTheme(theme) => self.els.root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?,
            Effect::PersistTheme { key, theme } => self.persist_theme(&key, theme)?,
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::HighlightNavLinks(flags) => {
                for (link, active) in self.nav_links.iter().zip(flags) {
                    let color = if active { self.config.active_link_color.as_str() } else { "" };
                    link.style().set_property("color", color)?;
                }
            }
            Effect::HideForReveal { index } => {
                if let Some(target) = self.reveal_targets.get(index) {
                    target.set_attribute(ATTR_REVEAL_INDEX, &index.to_string())?;
                    let style = target.style();
                    style.set_property("opacity", REVEAL_HIDDEN_OPACITY)?;
                    style.set_property("transform", REVEAL_HIDDEN_TRANSFORM)?;
                    style.set_property("transition", REVEAL_TRANSITION)?;
                }
            }
            Effect::Reveal { index } => {
                if let Some(target) = self.reveal_targets.get(index) {
                    let style = target.style();
                    style.set_property("opacity", REVEAL_SHOWN_OPACITY)?;
                    style.set_property("transform", REVEAL_SHOWN_TRANSFORM)?;
                    if let Some(observer) = self.observer.borrow().as_ref() {
                        observer.unobserve(target);
                    }
                }
            }
            Effect::RenderGallery(view) => self.render_gallery(&view)?,
            Effect::ShowModal => self.els.modal.class_list().add_1(CLASS_ACTIVE)?,
            Effect::HideModal => self.els.modal.class_list().remove_1(CLASS_ACTIVE)?,
            Effect::LockBodyScroll(locked) => {
                let overflow = if locked { "hidden" } else { "" };
                self.els.body.style().set_property("overflow", overflow)?;
            }
            Effect::BuildViewer => self.build_viewer()?,
            Effect::SetViewerImage(src) => {
                if let Some(viewer) = self.viewer.borrow().as_ref() {
                    viewer.image.set_attribute("src", &src)?;
                }
            }
            Effect::ShowViewer => {
                if let Some(viewer) = self.viewer.borrow().as_ref() {
                    viewer.overlay.class_list().add_1(CLASS_ACTIVE)?;
                }
            }
            Effect::HideViewer => {
                if let Some(viewer) = self.viewer.borrow().as_ref() {
                    viewer.overlay.class_list().remove_1(CLASS_ACTIVE)?;
                }
            }
            Effect::OpenWindow { url, target } => {
                self.window.open_with_url_and_target(&url, &target)?;
            }
        }
        Ok(())
    }

    fn stored_theme(&self) -> Result<Option<String>, UiError> {
        match self.window.local_storage()? {
            Some(storage) => Ok(storage.get_item(&self.config.storage_key)?),
            None => Ok(None),
        }
    }

    fn persist_theme(&self, key: &str, theme: Theme) -> Result<(), UiError> {
        match self.window.local_storage()? {
            Some(storage) => storage.set_item(key, theme.as_str())?,
            None => log::debug!("localStorage unavailable; {theme} not persisted"),
        }
        Ok(())
    }

    fn render_gallery(self: &Rc<Self>, view: &GalleryView) -> Result<(), UiError> {
        self.els.modal_title.set_text_content(Some(&view.heading));
        self.els.gallery.set_inner_html("");
        self.tile_listeners.borrow_mut().clear();
        self.els.current_image.set_text_content(Some(&view.current.to_string()));
        self.els.total_images.set_text_content(Some(&view.total.to_string()));

        for tile in &view.tiles {
            let item = self.document.create_element("div")?;
            item.set_class_name(CLASS_TILE);

            let img = self.document.create_element("img")?;
            img.set_attribute("src", &tile.src)?;
            img.set_attribute("alt", &tile.alt)?;
            img.set_attribute("loading", "lazy")?;

            let number = self.document.create_element("div")?;
            number.set_class_name(CLASS_TILE_NUMBER);
            number.set_text_content(Some(&tile.label));

            item.append_child(&img)?;
            item.append_child(&number)?;

            let page = Rc::clone(self);
            let index = tile.index;
            let listener = Listener::new(move |_: Event| report(page.on_tile(index)));
            item.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            self.tile_listeners.borrow_mut().push(listener);

            self.els.gallery.append_child(&item)?;
        }
        Ok(())
    }

    fn build_viewer(self: &Rc<Self>) -> Result<(), UiError> {
        let overlay = self.document.create_element("div")?;
        overlay.set_class_name(CLASS_VIEWER);

        let close = self.document.create_element("button")?;
        close.set_class_name(CLASS_VIEWER_CLOSE);
        close.set_id(ID_VIEWER_CLOSE);
        close.set_attribute("aria-label", "Close fullscreen")?;
        close.set_inner_html(VIEWER_CLOSE_ICON);

        let image = self.document.create_element("img")?;
        image.set_id(ID_VIEWER_IMAGE);
        image.set_attribute("src", "")?;
        image.set_attribute("alt", "Fullscreen view")?;

        overlay.append_child(&close)?;
        overlay.append_child(&image)?;
        self.els.body.append_child(&overlay)?;

        let page = Rc::clone(self);
        listen(&close, "click", move |_| {
            let effects = page.core.borrow_mut().close_viewer();
            page.run(effects);
        })?;

        let page = Rc::clone(self);
        let backdrop: JsValue = overlay.clone().into();
        listen(&overlay, "click", move |event: Event| {
            if event.target().map(JsValue::from).as_ref() != Some(&backdrop) {
                return;
            }
            let effects = page.core.borrow_mut().close_viewer();
            page.run(effects);
        })?;

        *self.viewer.borrow_mut() = Some(ViewerElements { overlay, image });
        Ok(())
    }
}

// --- Helpers ---

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let listener = Listener::new(handler);
    target.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

fn report(result: Result<(), UiError>) {
    if let Err(e) = result {
        log::warn!("{e}");
    }
}

fn missing(what: &str) -> UiError {
    UiError::MissingElement(what.to_owned())
}

fn by_id(document: &Document, id: &str) -> Result<Element, UiError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| missing(&format!("#{id}")))
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, UiError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<T>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}
