use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::default();
    assert!(storage.load("cart").is_none());
    assert_eq!(storage.writes(), 0);
}

#[test]
fn memory_storage_save_then_load() {
    let mut storage = MemoryStorage::default();
    storage.save("cart", "{}");
    assert_eq!(storage.load("cart").as_deref(), Some("{}"));
    assert_eq!(storage.writes(), 1);
}

#[test]
fn memory_storage_clones_share_slots() {
    let handle = MemoryStorage::default();
    let mut owned = handle.clone();
    owned.save("cart", "x");
    assert_eq!(handle.load("cart").as_deref(), Some("x"));
    assert_eq!(handle.writes(), 1);
}

#[test]
fn memory_storage_with_slot_and_clear() {
    let storage = MemoryStorage::with_slot("cart", "seeded");
    assert_eq!(storage.load("cart").as_deref(), Some("seeded"));
    storage.clear("cart");
    assert!(storage.load("cart").is_none());
}

// =============================================================
// BrowserStorage (non-browser builds)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_outside_browser() {
    let mut storage = BrowserStorage;
    storage.save("cart", "{}");
    assert!(storage.load("cart").is_none());
}
