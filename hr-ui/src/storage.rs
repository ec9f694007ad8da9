//! `window.localStorage` as a [`KeyValueStore`].
//!
//! Storage may be unavailable (private mode, disabled cookies); reads then
//! return nothing and writes are dropped with a warning.

use hr_core::storage::KeyValueStore;
use web_sys::Storage;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("[HR] storage: localStorage unavailable, dropping {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("[HR] storage: failed to write {key}: {:?}", e);
        }
    }

    fn remove(&mut self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("[HR] storage: failed to remove {key}: {:?}", e);
        }
    }
}
