use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc123");
    assert_eq!(storage.get("token").as_deref(), Some("abc123"));
}

#[test]
fn memory_storage_missing_key_is_none() {
    assert_eq!(MemoryStorage::new().get("token"), None);
}

#[test]
fn memory_storage_remove_clears_only_that_key() {
    let storage = MemoryStorage::with_entry("token", "abc123");
    storage.set("theme", "dark");
    storage.remove("token");
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("token");
    assert_eq!(storage.get("token"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    let storage = LocalStorage;
    storage.set("token", "abc123");
    assert_eq!(storage.get("token"), None);
    storage.remove("token");
}
