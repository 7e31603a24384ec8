use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("sidebar"), None);
}

#[test]
fn memory_storage_set_overwrites_previous_value() {
    let store = MemoryStorage::with_entry("sidebar", "true");
    store.set("sidebar", "false");
    assert_eq!(store.get("sidebar").as_deref(), Some("false"));
}

#[test]
fn memory_storage_keys_are_independent() {
    let store = MemoryStorage::with_entry("a", "1");
    store.set("b", "2");
    assert_eq!(store.get("a").as_deref(), Some("1"));
    assert_eq!(store.get("b").as_deref(), Some("2"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_reads_nothing_without_a_browser() {
    let store = BrowserStorage;
    store.set("sidebar", "false");
    assert_eq!(store.get("sidebar"), None);
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn load_json_decodes_stored_boolean() {
    let store = MemoryStorage::with_entry("sidebar", "false");
    assert_eq!(load_json::<bool>(&store, "sidebar"), Some(false));
}

#[test]
fn load_json_treats_missing_and_empty_as_absent() {
    let store = MemoryStorage::with_entry("empty", "");
    assert_eq!(load_json::<bool>(&store, "missing"), None);
    assert_eq!(load_json::<bool>(&store, "empty"), None);
}

#[test]
fn load_json_treats_garbage_as_absent() {
    let store = MemoryStorage::with_entry("sidebar", "not json");
    assert_eq!(load_json::<bool>(&store, "sidebar"), None);

    let store = MemoryStorage::with_entry("sidebar", "\"yes\"");
    assert_eq!(load_json::<bool>(&store, "sidebar"), None);
}

#[test]
fn save_json_writes_json_text() {
    let store = MemoryStorage::new();
    save_json(&store, "sidebar", &true);
    assert_eq!(store.get("sidebar").as_deref(), Some("true"));

    save_json(&store, "draft", &vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(store.get("draft").as_deref(), Some(r#"["a","b"]"#));
}
