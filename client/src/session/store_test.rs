use super::*;

#[test]
fn storage_key_is_token() {
    assert_eq!(TOKEN_STORAGE_KEY, "token");
}

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().load(), None);
}

#[test]
fn memory_store_save_overwrites() {
    let store = MemoryTokenStore::with_token("old");
    store.save("new");
    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::with_token("t");
    store.clear();
    store.clear();
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_the_browser() {
    let store = BrowserTokenStore;
    store.save("ignored");
    assert_eq!(store.load(), None);
    store.clear();
}
