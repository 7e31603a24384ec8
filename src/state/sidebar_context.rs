//! Reactive sidebar context shared with every descendant component.
//!
//! DESIGN
//! ======
//! `provide_sidebar_context` places a [`SidebarContext`] in the current
//! owner; descendants fetch it with [`use_sidebar`]. The handle is `Copy`
//! so event handlers can capture it freely. The backing store is injected,
//! which lets tests hydrate from `MemoryStorage`.

#[cfg(test)]
#[path = "sidebar_context_test.rs"]
mod sidebar_context_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::sidebar::{SidebarError, SidebarState};
use crate::util::storage::PreferenceStore;

/// Handle to the sidebar preference owned by the nearest `SidebarProvider`.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    state: RwSignal<SidebarState>,
    store: StoredValue<Arc<dyn PreferenceStore>>,
}

impl SidebarContext {
    /// Create a context in its initial, unhydrated state.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            state: RwSignal::new(SidebarState::new()),
            store: StoredValue::new(store),
        }
    }

    /// Current preference, tracked by the calling reactive scope.
    ///
    /// # Panics
    ///
    /// Panics if read before the preference has been hydrated. Consumers
    /// rendered under `SidebarProvider` never see that state.
    pub fn is_open(&self) -> bool {
        match self.try_is_open() {
            Ok(open) => open,
            Err(err) => panic!("{err}"),
        }
    }

    /// Current preference, or [`SidebarError::NotReady`] before hydration.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotReady`] when hydration has not completed.
    pub fn try_is_open(&self) -> Result<bool, SidebarError> {
        self.state.with(SidebarState::is_open)
    }

    /// True until the stored preference has been loaded.
    pub fn is_loading(&self) -> bool {
        self.state.with(SidebarState::is_loading)
    }

    /// Load the stored preference. Runs once per context; later calls leave
    /// subscribers unnotified.
    pub fn hydrate(&self) {
        if !self.state.with_untracked(SidebarState::is_loading) {
            return;
        }
        let store = self.store.get_value();
        self.state.update(|state| state.hydrate(store.as_ref()));
    }

    /// Flip the sidebar, persist it, and notify every subscriber.
    pub fn toggle(&self) {
        let store = self.store.get_value();
        match self.state.try_update(|state| state.toggle(store.as_ref())) {
            Some(Ok(open)) => log::debug!("sidebar toggled: open={open}"),
            Some(Err(err)) => log::warn!("sidebar toggle ignored: {err}"),
            None => log::warn!("sidebar toggle ignored: context disposed"),
        }
    }
}

/// Create a sidebar context over `store` and provide it to descendants.
pub fn provide_sidebar_context(store: Arc<dyn PreferenceStore>) -> SidebarContext {
    let context = SidebarContext::new(store);
    provide_context(context);
    context
}

/// Sidebar context of the enclosing provider.
///
/// # Errors
///
/// Returns [`SidebarError::MissingProvider`] outside a `SidebarProvider`.
pub fn try_use_sidebar() -> Result<SidebarContext, SidebarError> {
    use_context::<SidebarContext>().ok_or(SidebarError::MissingProvider)
}

/// Sidebar context of the enclosing provider.
///
/// # Panics
///
/// Panics when called outside a `SidebarProvider`.
pub fn use_sidebar() -> SidebarContext {
    match try_use_sidebar() {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}
