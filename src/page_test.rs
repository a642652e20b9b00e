#![allow(clippy::float_cmp)]

use super::*;
use crate::viewer::ViewerPhase;

// =============================================================
// Helpers
// =============================================================

fn core() -> PageCore {
    PageCore::new(PageConfig::default())
}

/// Apply theme effects to a fake `<html>` attribute and storage slot.
fn apply_theme(effects: &[Effect], attr: &mut Option<String>, stored: &mut Option<String>) {
    for effect in effects {
        match effect {
            Effect::ApplyTheme(t) => *attr = Some(t.as_str().to_owned()),
            Effect::PersistTheme { theme, .. } => *stored = Some(theme.as_str().to_owned()),
            _ => {}
        }
    }
}

fn rendered_view(effects: &[Effect]) -> &GalleryView {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::RenderGallery(view) => Some(view),
            _ => None,
        })
        .expect("gallery rendered")
}

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("about", 500.0),
        SectionBounds::new("projects", 1500.0),
        SectionBounds::new("contact", 3000.0),
    ]
}

// =============================================================
// Theme
// =============================================================

#[test]
fn load_without_stored_value_applies_light() {
    let mut page = core();
    let effects = page.load_theme(None);
    assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Light)]);
    assert_eq!(page.theme(), Theme::Light);
}

#[test]
fn load_stored_dark_applies_dark_without_writing_storage() {
    let mut page = core();
    let effects = page.load_theme(Some("dark"));
    assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark)]);
    assert!(!effects.iter().any(|e| matches!(e, Effect::PersistTheme { .. })));
}

#[test]
fn load_invalid_stored_value_applies_light() {
    let mut page = core();
    assert_eq!(page.load_theme(Some("neon")), vec![Effect::ApplyTheme(Theme::Light)]);
}

#[test]
fn toggle_applies_and_persists_under_configured_key() {
    let mut page = core();
    let effects = page.toggle_theme(Some("light"));
    assert_eq!(
        effects,
        vec![
            Effect::ApplyTheme(Theme::Dark),
            Effect::PersistTheme { key: "theme".into(), theme: Theme::Dark },
        ]
    );
    assert_eq!(page.theme(), Theme::Dark);
}

#[test]
fn toggling_twice_restores_attribute_and_storage() {
    for start in [Theme::Light, Theme::Dark] {
        let mut page = core();
        let mut attr = None;
        let mut stored = Some(start.as_str().to_owned());
        let loaded = page.load_theme(stored.as_deref());
        apply_theme(&loaded, &mut attr, &mut stored);

        for _ in 0..2 {
            let effects = page.toggle_theme(attr.as_deref());
            apply_theme(&effects, &mut attr, &mut stored);
            assert_eq!(attr, stored);
        }

        assert_eq!(attr.as_deref(), Some(start.as_str()));
        assert_eq!(stored.as_deref(), Some(start.as_str()));
    }
}

// =============================================================
// Smooth scroll
// =============================================================

#[test]
fn anchor_scrolls_below_header() {
    let page = core();
    let effects = page.anchor_clicked("#projects", |id| (id == "projects").then_some(1500.0));
    assert_eq!(effects, vec![Effect::ScrollTo { top: 1420.0 }]);
}

#[test]
fn anchor_without_target_is_silent_noop() {
    let page = core();
    let effects = page.anchor_clicked("#contact", |_| None);
    assert!(effects.is_empty());
}

#[test]
fn bare_hash_never_resolves() {
    let page = core();
    let effects = page.anchor_clicked("#", |_| panic!("bare hash must not be resolved"));
    assert!(effects.is_empty());
}

// =============================================================
// Active link
// =============================================================

#[test]
fn scroll_highlights_exactly_the_current_section_link() {
    let mut page = core();
    page.register_nav_links(vec!["#about".into(), "#projects".into(), "#contact".into()]);
    // projects threshold = 1300, contact threshold = 2800
    let effects = page.scrolled(2000.0, &sections());
    assert_eq!(effects, vec![Effect::HighlightNavLinks(vec![false, true, false])]);
}

#[test]
fn scroll_above_first_section_clears_highlights() {
    let mut page = core();
    page.register_nav_links(vec!["#about".into(), "#projects".into()]);
    let effects = page.scrolled(0.0, &sections());
    assert_eq!(effects, vec![Effect::HighlightNavLinks(vec![false, false])]);
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn registering_targets_hides_each() {
    let mut page = core();
    let effects = page.register_reveal_targets(2);
    assert_eq!(effects, vec![Effect::HideForReveal { index: 0 }, Effect::HideForReveal { index: 1 }]);
}

#[test]
fn visibility_reveals_once() {
    let mut page = core();
    page.register_reveal_targets(1);
    assert!(page.visibility_changed(0, false).is_empty());
    assert_eq!(page.visibility_changed(0, true), vec![Effect::Reveal { index: 0 }]);
    assert!(page.visibility_changed(0, false).is_empty());
    assert!(page.visibility_changed(0, true).is_empty());
    assert!(page.reveal().is_revealed(0));
}

// =============================================================
// Gallery modal
// =============================================================

#[test]
fn demo_project_opens_three_tile_gallery() {
    let mut page = core();
    let effects = page.snapshot_requested(r#"["a.png","b.png","c.png"]"#, "Demo").unwrap();
    let view = rendered_view(&effects);
    assert_eq!(view.heading, "Demo - Snapshots");
    assert_eq!(view.current.to_string(), "3");
    assert_eq!(view.total.to_string(), "3");
    assert_eq!(view.tiles.len(), 3);
    assert!(effects.contains(&Effect::ShowModal));
    assert!(effects.contains(&Effect::LockBodyScroll(true)));
    assert!(page.is_modal_open());
}

#[test]
fn counters_and_tiles_track_set_size() {
    for n in [0_usize, 1, 5] {
        let mut page = core();
        let shots = ScreenshotSet::new((0..n).map(|i| format!("{i}.png")).collect());
        let effects = page.open_gallery(shots, "P");
        let view = rendered_view(&effects);
        assert_eq!((view.current, view.total, view.tiles.len()), (n, n, n));
        for (i, tile) in view.tiles.iter().enumerate() {
            assert_eq!(tile.label, (i + 1).to_string());
        }
    }
}

#[test]
fn reopening_replaces_session() {
    let mut page = core();
    page.snapshot_requested(r#"["a.png"]"#, "First").unwrap();
    page.snapshot_requested(r#"["x.png","y.png"]"#, "Second").unwrap();
    let session = page.session().unwrap();
    assert_eq!(session.title, "Second");
    assert_eq!(session.screenshots.len(), 2);
}

#[test]
fn malformed_screenshots_fail_without_touching_state() {
    let mut page = core();
    page.snapshot_requested(r#"["a.png"]"#, "Kept").unwrap();
    page.close_gallery(CloseTrigger::Button);

    let err = page.snapshot_requested("[not json", "Broken").unwrap_err();
    assert!(matches!(err, UiError::ScreenshotDecode(_)));
    assert!(!page.is_modal_open());
    assert_eq!(page.session().unwrap().title, "Kept");
}

#[test]
fn every_close_trigger_restores_scroll() {
    for trigger in [CloseTrigger::Button, CloseTrigger::Overlay, CloseTrigger::Escape] {
        let mut page = core();
        page.snapshot_requested(r#"["a.png"]"#, "Demo").unwrap();
        let effects = page.close_gallery(trigger);
        assert_eq!(effects, vec![Effect::HideModal, Effect::LockBodyScroll(false)]);
        assert!(!page.is_modal_open());
    }
}

#[test]
fn escape_closes_open_modal() {
    let mut page = core();
    page.snapshot_requested(r#"["a.png"]"#, "Demo").unwrap();
    let effects = page.key_down("Escape");
    assert!(effects.contains(&Effect::LockBodyScroll(false)));
    assert!(!page.is_modal_open());
}

#[test]
fn escape_without_open_modal_does_nothing() {
    let mut page = core();
    assert!(page.key_down("Escape").is_empty());
}

#[test]
fn other_keys_leave_modal_open() {
    let mut page = core();
    page.snapshot_requested(r#"["a.png"]"#, "Demo").unwrap();
    assert!(page.key_down("Enter").is_empty());
    assert!(page.is_modal_open());
}

// =============================================================
// Fullscreen viewer
// =============================================================

#[test]
fn tile_click_builds_viewer_once_and_shows_latest_image() {
    let mut page = core();
    page.snapshot_requested(r#"["a.png","b.png"]"#, "Demo").unwrap();

    let first = page.tile_clicked(0).unwrap();
    assert_eq!(
        first,
        vec![Effect::BuildViewer, Effect::SetViewerImage("a.png".into()), Effect::ShowViewer]
    );

    let second = page.tile_clicked(1).unwrap();
    assert_eq!(second, vec![Effect::SetViewerImage("b.png".into()), Effect::ShowViewer]);
    assert_eq!(page.viewer().src(), Some("b.png"));
}

#[test]
fn tile_click_out_of_range_is_error() {
    let mut page = core();
    page.snapshot_requested(r#"["a.png"]"#, "Demo").unwrap();
    let err = page.tile_clicked(3).unwrap_err();
    assert!(matches!(err, UiError::TileOutOfRange { index: 3, len: 1 }));
    assert_eq!(page.viewer().phase(), ViewerPhase::Uninitialized);
}

#[test]
fn tile_click_without_session_is_error() {
    let mut page = core();
    assert!(matches!(page.tile_clicked(0), Err(UiError::TileOutOfRange { index: 0, len: 0 })));
}

#[test]
fn viewer_close_hides_and_reopen_does_not_rebuild() {
    let mut page = core();
    page.open_viewer("a.png");
    assert_eq!(page.close_viewer(), vec![Effect::HideViewer]);
    assert_eq!(page.viewer().phase(), ViewerPhase::Hidden);
    assert!(!page.open_viewer("b.png").contains(&Effect::BuildViewer));
}

#[test]
fn viewer_close_before_build_emits_nothing() {
    let mut page = core();
    assert!(page.close_viewer().is_empty());
}

// =============================================================
// Resume
// =============================================================

#[test]
fn resume_opens_configured_document_in_new_context() {
    let page = core();
    assert_eq!(
        page.resume_clicked(),
        vec![Effect::OpenWindow {
            url: "assets/Dzakwan Dawsie - Software Engineer - Resume.pdf".into(),
            target: "_blank".into(),
        }]
    );
}

#[test]
fn resume_url_follows_config_override() {
    let config = PageConfig::from_json(r#"{"resume_url": "cv.pdf"}"#).unwrap();
    let page = PageCore::new(config);
    assert!(matches!(&page.resume_clicked()[0], Effect::OpenWindow { url, .. } if url == "cv.pdf"));
}
