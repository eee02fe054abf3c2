use super::*;

#[test]
fn memory_store_get_set_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v1");
    store.set("k", "v2");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn load_json_round_trips_saved_value() {
    let store = MemoryStore::new();
    save_json(&store, "nums", &vec![1, 2, 3]);
    assert_eq!(store.get("nums").as_deref(), Some("[1,2,3]"));
    assert_eq!(load_json::<Vec<i32>>(&store, "nums"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_swallows_malformed_values() {
    let store = MemoryStore::new();
    store.set("nums", "[1, 2,");
    assert_eq!(load_json::<Vec<i32>>(&store, "nums"), None);
}

#[test]
fn browser_storage_areas() {
    assert_eq!(BrowserStorage::local().area(), StorageArea::Local);
    assert_eq!(BrowserStorage::session().area(), StorageArea::Session);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage::session();
    store.set("launchShown", "true");
    assert_eq!(store.get("launchShown"), None);
    store.remove("launchShown");
}
