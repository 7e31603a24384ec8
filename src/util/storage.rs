//! Durable key/value storage for UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted preference goes through the narrow [`PreferenceStore`]
//! trait so state containers never touch `web-sys` directly. The browser
//! implementation wraps `window.localStorage`; [`MemoryStorage`] stands in
//! for it in tests and during server rendering.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort. Reads degrade to `None` and writes are dropped
//! (with a warning) when the backend is missing or rejects them, so callers
//! keep their in-memory value as the source of truth for the session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Synchronous key/value store holding raw preference strings.
///
/// Values are serialized by the caller; implementations store them verbatim.
pub trait PreferenceStore: Send + Sync {
    /// Raw value stored under `key`, or `None` when absent or unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage` for the current origin.
///
/// The handle is looked up on every call, so the value itself carries no
/// browser state and works in non-browser builds (where it stores nothing).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; dropping write for {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-process store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(key.to_owned(), value.to_owned());
            }
            Err(_) => log::warn!("memory storage poisoned; dropping write for {key}"),
        }
    }
}

/// Load and decode the JSON value stored under `key`.
///
/// Absent and empty values are `None`. A value that fails to decode is
/// treated as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn PreferenceStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring unreadable stored value for {key}: {err}");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(store: &dyn PreferenceStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => log::warn!("failed to encode value for {key}: {err}"),
    }
}
