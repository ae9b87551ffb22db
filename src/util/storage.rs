//! Durable key-value slots for the cart.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store only needs "read a string under a key" and "write a string under
//! a key". `BrowserStorage` maps that onto `localStorage` in the hydrated
//! client; `MemoryStorage` backs tests and non-browser hosts.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// A durable string slot keyed by name.
pub trait CartStorage {
    /// Read the raw value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`. Failures are swallowed; persistence is
    /// best-effort.
    fn save(&mut self, key: &str, value: &str);
}

/// Window `localStorage`. Requires a browser environment; elsewhere every
/// read misses and every write is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl CartStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                leptos::logging::warn!("localStorage unavailable; cart not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage rejected write for key {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-process storage. Clones share the same slots, so a caller can keep a
/// handle and inspect what the store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with a single slot.
    #[must_use]
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Number of `save` calls observed so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Drop the slot, as if the browser data were cleared externally.
    pub fn clear(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}
