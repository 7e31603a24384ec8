//! Button copying a fixed text to the clipboard.

use leptos::prelude::*;

use crate::util::clipboard::{DEFAULT_COPY_TIMEOUT_MS, use_copy_to_clipboard};

/// Copies `value` and shows "Copied" for a moment afterwards.
#[component]
pub fn CopyButton(#[prop(into)] value: String) -> impl IntoView {
    let clipboard = use_copy_to_clipboard(DEFAULT_COPY_TIMEOUT_MS);

    let on_click = move |_| {
        if !clipboard.is_copied() {
            clipboard.copy(&value);
        }
    };

    view! {
        <button class="copy-button" on:click=on_click>
            {move || if clipboard.is_copied() { "Copied" } else { "Copy" }}
        </button>
    }
}
