//! Sidebar chrome driven by the shared sidebar preference.

use leptos::prelude::*;

use crate::state::sidebar_context::use_sidebar;

/// Button that opens or closes the sidebar.
#[component]
pub fn SidebarToggle() -> impl IntoView {
    let sidebar = use_sidebar();

    let label = move || if sidebar.is_open() { "Hide sidebar" } else { "Show sidebar" };
    let on_click = move |_| sidebar.toggle();

    view! {
        <button class="sidebar-toggle" title=label aria-label=label on:click=on_click>
            {move || if sidebar.is_open() { "\u{25C0}" } else { "\u{25B6}" }}
        </button>
    }
}

/// Collapsible sidebar panel.
#[component]
pub fn ChatSidebar(children: Children) -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !sidebar.is_open()>
            {children()}
        </aside>
    }
}
