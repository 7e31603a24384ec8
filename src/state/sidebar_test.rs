use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::util::storage::MemoryStorage;

/// Store wrapper counting reads of the sidebar key.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStorage,
    reads: AtomicUsize,
}

impl PreferenceStore for CountingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.set(key, value);
    }
}

fn hydrated(store: &dyn PreferenceStore) -> SidebarState {
    let mut state = SidebarState::new();
    state.hydrate(store);
    state
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_state_is_uninitialized_and_loading() {
    let state = SidebarState::new();
    assert_eq!(state.phase(), SidebarPhase::Uninitialized);
    assert!(state.is_loading());
}

#[test]
fn reading_before_hydration_is_an_error() {
    let state = SidebarState::new();
    assert_eq!(state.is_open(), Err(SidebarError::NotReady));
}

#[test]
fn toggle_before_hydration_is_rejected_without_writing() {
    let store = MemoryStorage::new();
    let mut state = SidebarState::new();
    assert_eq!(state.toggle(&store), Err(SidebarError::NotReady));
    assert_eq!(store.get(SIDEBAR_STORAGE_KEY), None);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydrate_without_stored_value_defaults_to_open() {
    let state = hydrated(&MemoryStorage::new());
    assert_eq!(state.is_open(), Ok(true));
    assert!(!state.is_loading());
    assert_eq!(state.phase(), SidebarPhase::Ready);
}

#[test]
fn hydrate_with_stored_false_starts_closed() {
    let store = MemoryStorage::with_entry(SIDEBAR_STORAGE_KEY, "false");
    let mut state = SidebarState::new();
    assert!(state.is_loading());
    state.hydrate(&store);
    assert!(!state.is_loading());
    assert_eq!(state.is_open(), Ok(false));
}

#[test]
fn hydrate_ignores_unreadable_stored_value() {
    let store = MemoryStorage::with_entry(SIDEBAR_STORAGE_KEY, "{oops");
    assert_eq!(hydrated(&store).is_open(), Ok(true));
}

#[test]
fn hydrate_does_not_write_to_store() {
    let store = MemoryStorage::new();
    let _ = hydrated(&store);
    assert_eq!(store.get(SIDEBAR_STORAGE_KEY), None);
}

#[test]
fn hydrate_reads_store_exactly_once() {
    let store = CountingStore::default();
    let mut state = SidebarState::new();
    state.hydrate(&store);
    state.hydrate(&store);
    assert_eq!(store.reads.load(Ordering::SeqCst), 1);
}

#[test]
fn second_hydrate_keeps_toggled_value() {
    let store = MemoryStorage::new();
    let mut state = hydrated(&store);
    state.toggle(&store).expect("ready");
    store.set(SIDEBAR_STORAGE_KEY, "true");
    state.hydrate(&store);
    assert_eq!(state.is_open(), Ok(false));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_from_default_closes_and_persists() {
    let store = MemoryStorage::new();
    let mut state = hydrated(&store);
    assert_eq!(state.toggle(&store), Ok(false));
    assert_eq!(state.is_open(), Ok(false));
    assert_eq!(store.get(SIDEBAR_STORAGE_KEY).as_deref(), Some("false"));
}

#[test]
fn double_toggle_restores_value_and_store() {
    let store = MemoryStorage::with_entry(SIDEBAR_STORAGE_KEY, "false");
    let mut state = hydrated(&store);
    state.toggle(&store).expect("ready");
    state.toggle(&store).expect("ready");
    assert_eq!(state.is_open(), Ok(false));
    assert_eq!(store.get(SIDEBAR_STORAGE_KEY).as_deref(), Some("false"));
}

#[test]
fn store_tracks_memory_across_toggles_and_reload() {
    let store = MemoryStorage::new();
    let mut state = hydrated(&store);
    for _ in 0..5 {
        let open = state.toggle(&store).expect("ready");
        let stored = load_json::<bool>(&store, SIDEBAR_STORAGE_KEY);
        assert_eq!(stored, Some(open));
        assert_eq!(state.is_open(), Ok(open));
    }

    let reloaded = hydrated(&store);
    assert_eq!(reloaded.is_open(), state.is_open());
    assert_eq!(reloaded.is_open(), Ok(false));
}

// =============================================================
// SidebarError
// =============================================================

#[test]
fn error_messages_name_the_misuse() {
    assert_eq!(
        SidebarError::MissingProvider.to_string(),
        "use_sidebar must be used within a SidebarProvider"
    );
    assert!(SidebarError::NotReady.to_string().contains("before"));
}
