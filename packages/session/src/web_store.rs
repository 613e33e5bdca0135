//! Browser `sessionStorage` backend for the web platform.
//!
//! Storage scope is deliberately tab-local and wiped on tab close: the portal
//! forces re-authentication per browsing session rather than persisting
//! credentials indefinitely. Storage errors are swallowed (degrading to "no
//! session") and logged, in the same spirit as the rest of the store layer.

use crate::store::SessionStore;

/// Storage key for the persisted session record.
pub const STORAGE_KEY: &str = "auth";

/// sessionStorage-backed SessionStore. Zero-size; looks up the window's
/// storage on every operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionStore for WebStore {
    fn read_raw(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write_raw(&self, raw: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("sessionStorage unavailable, session not persisted");
            return;
        };
        if let Err(err) = storage.set_item(STORAGE_KEY, raw) {
            tracing::warn!("failed to persist session record: {err:?}");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
