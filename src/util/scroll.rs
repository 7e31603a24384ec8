//! Window scroll-position tracking.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

/// Whether the viewport is within `offset` pixels of the document end.
pub fn is_at_bottom(viewport_height: f64, scroll_y: f64, document_height: f64, offset: f64) -> bool {
    viewport_height + scroll_y >= document_height - offset
}

#[cfg(feature = "hydrate")]
fn window_is_at_bottom(offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.body())
        .map_or(0.0, |body| f64::from(body.offset_height()));
    is_at_bottom(viewport_height, scroll_y, document_height, offset)
}

/// Track whether the window is scrolled to the bottom.
///
/// Starts `false`, is evaluated once after mount, then on every scroll event
/// until the owning scope is cleaned up.
pub fn use_at_bottom(offset: f64) -> ReadSignal<bool> {
    let (at_bottom, set_at_bottom) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || set_at_bottom.set(window_is_at_bottom(offset)));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            set_at_bottom.set(window_is_at_bottom(offset));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (offset, set_at_bottom);
    }

    at_bottom
}

/// Scroll the window to the end of the document.
pub fn scroll_to_bottom() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(el) = window.document().and_then(|d| d.document_element()) {
            window.scroll_to_with_x_and_y(0.0, f64::from(el.scroll_height()));
        }
    }
}
