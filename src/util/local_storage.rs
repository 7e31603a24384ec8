//! Reactive value mirrored into browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Generic counterpart of the sidebar preference for drafts and other small
//! UI values: starts from an initial value, hydrates from storage on mount,
//! and writes every change back as JSON.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::storage::{BrowserStorage, PreferenceStore, load_json, save_json};

/// Signal whose value is persisted under a fixed storage key.
pub struct LocalStorageValue<T: Send + Sync + 'static> {
    value: RwSignal<T>,
    key: StoredValue<String>,
    store: StoredValue<Arc<dyn PreferenceStore>>,
}

impl<T: Send + Sync + 'static> Clone for LocalStorageValue<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for LocalStorageValue<T> {}

impl<T> LocalStorageValue<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Value holding `initial` until [`hydrate`](Self::hydrate) runs.
    pub fn new(store: Arc<dyn PreferenceStore>, key: impl Into<String>, initial: T) -> Self {
        Self {
            value: RwSignal::new(initial),
            key: StoredValue::new(key.into()),
            store: StoredValue::new(store),
        }
    }

    /// Replace the value with the stored one, if any.
    pub fn hydrate(&self) {
        let store = self.store.get_value();
        let key = self.key.get_value();
        if let Some(stored) = load_json::<T>(store.as_ref(), &key) {
            self.value.set(stored);
        }
    }

    /// Current value, tracked by the calling reactive scope.
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Read-only view for passing to child components.
    pub fn read_only(&self) -> ReadSignal<T> {
        self.value.read_only()
    }

    /// Persist `value` and make it current.
    pub fn set(&self, value: T) {
        let store = self.store.get_value();
        let key = self.key.get_value();
        save_json(store.as_ref(), &key, &value);
        self.value.set(value);
    }
}

/// Value stored in `localStorage` under `key`, hydrated after mount.
pub fn use_local_storage<T>(key: impl Into<String>, initial: T) -> LocalStorageValue<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let value = LocalStorageValue::new(Arc::new(BrowserStorage), key, initial);
    Effect::new(move || value.hydrate());
    value
}
