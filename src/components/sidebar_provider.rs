//! Root provider for the persisted sidebar preference.

#[cfg(test)]
#[path = "sidebar_provider_test.rs"]
mod sidebar_provider_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::sidebar_context::{SidebarContext, provide_sidebar_context};
use crate::util::storage::{BrowserStorage, PreferenceStore};

/// Render guard that stays closed until the sidebar preference is loaded.
///
/// The open flag is memoized, so toggling the sidebar afterwards does not
/// re-render the guarded subtree.
#[derive(Clone, Copy)]
pub(crate) struct LoadingGate {
    ready: Memo<bool>,
}

impl LoadingGate {
    pub(crate) fn new(sidebar: SidebarContext) -> Self {
        Self {
            ready: Memo::new(move |_| !sidebar.is_loading()),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.ready.get()
    }

    /// Run `view` only when the gate is open.
    pub(crate) fn render<V>(&self, view: impl FnOnce() -> V) -> Option<V> {
        self.is_open().then(view)
    }
}

/// Provide a sidebar context over `store` together with its loading gate.
pub(crate) fn mount_sidebar(store: Arc<dyn PreferenceStore>) -> (SidebarContext, LoadingGate) {
    let sidebar = provide_sidebar_context(store);
    (sidebar, LoadingGate::new(sidebar))
}

/// Provides the sidebar context to `children` and withholds them until the
/// stored preference has been loaded.
///
/// Nothing is rendered while loading, so no descendant ever sees the default
/// value before it is replaced. Effects do not run during server rendering,
/// which leaves the gate closed there and lets the browser hydrate it.
#[component]
pub fn SidebarProvider(children: ChildrenFn) -> impl IntoView {
    let (sidebar, gate) = mount_sidebar(Arc::new(BrowserStorage));

    // Hydrate once after mount.
    Effect::new(move || sidebar.hydrate());

    view! { {move || gate.render(|| children())} }
}
