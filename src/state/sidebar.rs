//! Sidebar open/closed preference and its hydration lifecycle.
//!
//! DESIGN
//! ======
//! `SidebarState` is a plain value so the lifecycle can be tested without a
//! reactive runtime. The reactive wrapper in `sidebar_context` owns one of
//! these inside an `RwSignal` and forwards every mutation through it.
//!
//! The value is `Uninitialized` until the provider mounts, briefly `Loading`
//! while the store is read, then `Ready` for the rest of its life. Reading
//! the value before `Ready` is a programming error and reported as such.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::util::storage::{PreferenceStore, load_json, save_json};

/// Storage key holding the sidebar preference as a JSON boolean.
pub const SIDEBAR_STORAGE_KEY: &str = "sidebar";

/// Sidebar state used when nothing has been stored yet.
pub const DEFAULT_SIDEBAR_OPEN: bool = true;

/// Misuse of the sidebar preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SidebarError {
    /// The sidebar was consumed outside a `SidebarProvider`.
    #[error("use_sidebar must be used within a SidebarProvider")]
    MissingProvider,
    /// The value was read before the stored preference was loaded.
    #[error("sidebar preference read before it was loaded from storage")]
    NotReady,
}

/// Hydration phase of a sidebar preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarPhase {
    /// Constructed; storage not consulted yet.
    #[default]
    Uninitialized,
    /// Storage read in progress.
    Loading,
    /// Value hydrated; consumers may read and toggle.
    Ready,
}

/// In-memory sidebar preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
    phase: SidebarPhase,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            open: DEFAULT_SIDEBAR_OPEN,
            phase: SidebarPhase::Uninitialized,
        }
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SidebarPhase {
        self.phase
    }

    /// True until hydration has completed.
    pub fn is_loading(&self) -> bool {
        self.phase != SidebarPhase::Ready
    }

    /// Current preference.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotReady`] before [`hydrate`](Self::hydrate)
    /// has run.
    pub fn is_open(&self) -> Result<bool, SidebarError> {
        match self.phase {
            SidebarPhase::Ready => Ok(self.open),
            SidebarPhase::Uninitialized | SidebarPhase::Loading => Err(SidebarError::NotReady),
        }
    }

    /// Load the stored preference and mark the state ready.
    ///
    /// A stored value replaces the default. Only the first call reads the
    /// store; later calls leave a ready state untouched.
    pub fn hydrate(&mut self, store: &dyn PreferenceStore) {
        if self.phase == SidebarPhase::Ready {
            log::debug!("sidebar preference already hydrated");
            return;
        }
        self.phase = SidebarPhase::Loading;
        if let Some(open) = load_json::<bool>(store, SIDEBAR_STORAGE_KEY) {
            self.open = open;
        }
        self.phase = SidebarPhase::Ready;
        log::debug!("sidebar preference hydrated: open={}", self.open);
    }

    /// Flip the preference and persist the new value.
    ///
    /// The store is written before the in-memory value changes, so both agree
    /// once this returns.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::NotReady`] before hydration; nothing is written.
    pub fn toggle(&mut self, store: &dyn PreferenceStore) -> Result<bool, SidebarError> {
        let next = !self.is_open()?;
        save_json(store, SIDEBAR_STORAGE_KEY, &next);
        self.open = next;
        Ok(next)
    }
}
