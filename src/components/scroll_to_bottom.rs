//! Floating button that jumps to the latest message.

use leptos::prelude::*;

use crate::util::scroll::{scroll_to_bottom, use_at_bottom};

/// Shown while the window is scrolled away from the bottom.
#[component]
pub fn ButtonScrollToBottom(#[prop(optional)] offset: f64) -> impl IntoView {
    let at_bottom = use_at_bottom(offset);
    let on_click = move |_| scroll_to_bottom();

    view! {
        <button
            class="scroll-to-bottom"
            class:scroll-to-bottom--hidden=move || at_bottom.get()
            title="Scroll to bottom"
            on:click=on_click
        >
            "\u{2193}"
        </button>
    }
}
