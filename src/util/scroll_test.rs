use super::*;

#[test]
fn at_bottom_when_viewport_reaches_document_end() {
    assert!(is_at_bottom(800.0, 1200.0, 2000.0, 0.0));
    assert!(is_at_bottom(800.0, 1300.0, 2000.0, 0.0));
}

#[test]
fn not_at_bottom_when_content_remains() {
    assert!(!is_at_bottom(800.0, 1000.0, 2000.0, 0.0));
}

#[test]
fn offset_widens_bottom_zone() {
    assert!(!is_at_bottom(800.0, 1150.0, 2000.0, 0.0));
    assert!(is_at_bottom(800.0, 1150.0, 2000.0, 50.0));
    assert!(!is_at_bottom(800.0, 1149.0, 2000.0, 50.0));
}

#[test]
fn short_document_is_always_at_bottom() {
    assert!(is_at_bottom(800.0, 0.0, 400.0, 0.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn use_at_bottom_is_false_outside_browser() {
    leptos::prelude::Owner::new().with(|| {
        assert!(!use_at_bottom(0.0).get_untracked());
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_bottom_is_noop_but_callable() {
    scroll_to_bottom();
}
