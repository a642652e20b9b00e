use super::*;

fn demo_session() -> ModalSession {
    let set = ScreenshotSet::decode(r#"["a.png","b.png","c.png"]"#).unwrap();
    ModalSession::new("Demo", set)
}

// =============================================================
// ScreenshotSet::decode
// =============================================================

#[test]
fn decode_preserves_order() {
    let set = ScreenshotSet::decode(r#"["z.png","a.png"]"#).unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["z.png", "a.png"]);
}

#[test]
fn decode_empty_array() {
    let set = ScreenshotSet::decode("[]").unwrap();
    assert!(set.is_empty());
}

#[test]
fn decode_rejects_malformed_json() {
    let err = ScreenshotSet::decode("['a.png'").unwrap_err();
    assert!(matches!(err, UiError::ScreenshotDecode(_)));
}

#[test]
fn decode_rejects_non_string_entries() {
    let err = ScreenshotSet::decode("[1, 2]").unwrap_err();
    assert!(matches!(err, UiError::ScreenshotDecode(_)));
    assert!(ScreenshotSet::decode(r#"{"a": "b"}"#).is_err());
}

#[test]
fn get_out_of_range_is_none() {
    let set = ScreenshotSet::new(vec!["only.png".into()]);
    assert_eq!(set.get(0), Some("only.png"));
    assert_eq!(set.get(1), None);
}

// =============================================================
// ModalSession::view
// =============================================================

#[test]
fn view_heading_uses_title() {
    assert_eq!(demo_session().view().heading, "Demo - Snapshots");
}

#[test]
fn view_counters_match_set_length() {
    let view = demo_session().view();
    assert_eq!(view.current, 3);
    assert_eq!(view.total, 3);
}

#[test]
fn view_renders_one_tile_per_screenshot_with_ordinals() {
    let view = demo_session().view();
    assert_eq!(view.tiles.len(), 3);
    for (i, tile) in view.tiles.iter().enumerate() {
        assert_eq!(tile.index, i);
        assert_eq!(tile.label, (i + 1).to_string());
    }
    assert_eq!(view.tiles[1].src, "b.png");
    assert_eq!(view.tiles[2].alt, "Demo screenshot 3");
}

#[test]
fn view_of_empty_set_has_zero_counters() {
    let view = ModalSession::new("Empty", ScreenshotSet::default()).view();
    assert_eq!(view.current, 0);
    assert_eq!(view.total, 0);
    assert!(view.tiles.is_empty());
}
