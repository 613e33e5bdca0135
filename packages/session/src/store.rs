//! Credential persistence across page reloads.
//!
//! [`SessionStore`] backends provide raw string storage for a single record;
//! the trait's provided methods layer JSON (de)serialization and
//! expiry/corruption validation on top, so every backend behaves identically.
//!
//! All failures degrade to "no session" rather than surfacing — a corrupted
//! or unavailable store must never crash the portal or resurrect a stale
//! session. The authoritative session always lives on the backend.

use std::sync::{Arc, Mutex};

use crate::state::{now_ms, AuthSession};

/// Tab-scoped storage for the current session snapshot.
pub trait SessionStore {
    /// Read the raw persisted record, if any.
    fn read_raw(&self) -> Option<String>;
    /// Overwrite the persisted record.
    fn write_raw(&self, raw: &str);
    /// Remove the persisted record.
    fn clear(&self);

    /// Durably write the full session snapshot.
    fn save(&self, session: &AuthSession) {
        match serde_json::to_string(session) {
            Ok(raw) => self.write_raw(&raw),
            Err(err) => tracing::warn!("failed to serialize session record: {err}"),
        }
    }

    /// Return the last snapshot, or `None` when absent, unparseable, or
    /// already expired. Unparseable and expired records are purged — a stale
    /// session must never be resurrected.
    fn load(&self) -> Option<AuthSession> {
        let raw = self.read_raw()?;
        let session: AuthSession = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("discarding unreadable session record: {err}");
                self.clear();
                return None;
            }
        };
        if session.is_expired_at(now_ms()) {
            self.clear();
            return None;
        }
        Some(session)
    }
}

/// In-memory SessionStore for testing and native fallback. Holds the raw
/// JSON string to mirror sessionStorage semantics.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn read_raw(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn write_raw(&self, raw: &str) {
        *self.slot.lock().unwrap() = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
