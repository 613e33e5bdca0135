//! Write-through session manager.
//!
//! [`SessionManager`] wraps the [`Session`] state machine so that every
//! transition also updates the credential store and the expiry clock. The
//! persisted and in-memory representations are therefore identical after
//! every mutation — there is no separate flush step.

use crate::clock::{ExpireCallback, SessionClock};
use crate::state::Session;
use crate::store::SessionStore;
use crate::{UserInfo, UserPatch};

pub struct SessionManager<S: SessionStore> {
    session: Session,
    store: S,
    clock: SessionClock,
}

impl<S: SessionStore> SessionManager<S> {
    /// Start unauthenticated, ignoring any persisted record.
    pub fn new(store: S) -> Self {
        Self {
            session: Session::Unauthenticated,
            store,
            clock: SessionClock::new(),
        }
    }

    /// Rehydrate from the store at startup. An absent, corrupt, or expired
    /// record leaves the manager unauthenticated; the caller is expected to
    /// arm the expiry via [`Self::arm_expiry`] after rehydration succeeds.
    pub fn hydrate(store: S) -> Self {
        let session = match store.load() {
            Some(auth) => Session::Authenticated(auth),
            None => Session::Unauthenticated,
        };
        Self {
            session,
            store,
            clock: SessionClock::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    /// Install fresh credentials: replace the session, persist it, and arm
    /// the expiry clock. Re-login fully replaces the prior session and
    /// resets the expiry window.
    pub fn set_credentials<F: ExpireCallback>(
        &mut self,
        user: UserInfo,
        access_token: String,
        refresh_token: String,
        on_expire: F,
    ) {
        self.session
            .set_credentials(user, access_token, refresh_token);
        self.persist();
        self.arm_expiry(on_expire);
    }

    /// Arm the clock for the current session's deadline, replacing any
    /// previously armed task. No-op when unauthenticated.
    pub fn arm_expiry<F: ExpireCallback>(&mut self, on_expire: F) {
        if let Some(expiry) = self.session.session_expiry() {
            self.clock.arm(expiry, on_expire);
        }
    }

    /// Shallow-merge profile fields and re-persist. The clock is untouched.
    pub fn update_user(&mut self, patch: &UserPatch) {
        if self.session.update_user(patch) {
            self.persist();
        }
    }

    /// Tear down the session: disarm the clock, clear the store, clear all
    /// fields. Idempotent — explicit logout and clock-fired logout converge
    /// here, and a second teardown is a no-op.
    pub fn logout(&mut self) {
        self.clock.disarm();
        self.store.clear();
        self.session.clear();
    }

    fn persist(&self) {
        if let Some(auth) = self.session.auth() {
            self.store.save(auth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::state::{now_ms, SESSION_DURATION_MS};
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "ada@lab.org".into(),
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            role,
            institution: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn login_persists_and_reload_reproduces_snapshot() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let store = MemoryStore::new();
                let mut manager = SessionManager::new(store.clone());
                manager.set_credentials(user(Role::Pi), "at".into(), "rt".into(), || {});

                assert!(manager.session().is_authenticated());
                let expiry = manager.session().session_expiry().unwrap();
                assert!((expiry - now_ms() - SESSION_DURATION_MS).abs() < 1_000);

                // a fresh manager hydrating from the same store sees an
                // identical authenticated snapshot
                let rehydrated = SessionManager::hydrate(store);
                assert_eq!(rehydrated.snapshot(), manager.snapshot());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn update_user_writes_through() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let store = MemoryStore::new();
                let mut manager = SessionManager::new(store.clone());
                manager.set_credentials(user(Role::Pi), "at".into(), "rt".into(), || {});

                manager.update_user(&UserPatch {
                    institution: Some("Polytechnic".into()),
                    ..Default::default()
                });

                let persisted = store.load().unwrap();
                assert_eq!(persisted.user.institution.as_deref(), Some("Polytechnic"));
                assert_eq!(Session::Authenticated(persisted), manager.snapshot());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn empty_patch_skips_the_write_through() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let store = MemoryStore::new();
                let mut manager = SessionManager::new(store.clone());
                manager.set_credentials(user(Role::Pi), "at".into(), "rt".into(), || {});

                // drop the record underneath the manager; a patch with no
                // fields must not put it back
                store.clear();
                manager.update_user(&UserPatch::default());

                assert_eq!(store.read_raw(), None);
                assert!(manager.session().is_authenticated());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn logout_twice_is_idempotent() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let store = MemoryStore::new();
                let mut manager = SessionManager::new(store.clone());
                manager.set_credentials(user(Role::Admin), "at".into(), "rt".into(), || {});

                manager.logout();
                manager.logout();

                assert_eq!(manager.snapshot(), Session::Unauthenticated);
                assert_eq!(store.load(), None);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_fires_teardown_exactly_once() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let fired = Arc::new(AtomicUsize::new(0));
                let store = MemoryStore::new();
                let mut manager = SessionManager::new(store);

                let counter = fired.clone();
                manager.set_credentials(user(Role::Pi), "at".into(), "rt".into(), move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                });

                tokio::time::advance(Duration::from_millis(SESSION_DURATION_MS as u64)).await;
                tokio::task::yield_now().await;
                assert_eq!(fired.load(Ordering::SeqCst), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn relogin_rearms_without_duplicate_timers() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let fired = Arc::new(AtomicUsize::new(0));
                let store = MemoryStore::new();
                let mut manager = SessionManager::new(store);

                for _ in 0..2 {
                    let counter = fired.clone();
                    manager.set_credentials(user(Role::Pi), "at".into(), "rt".into(), move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    });
                }

                tokio::time::advance(Duration::from_millis(
                    SESSION_DURATION_MS as u64 + 60_000,
                ))
                .await;
                tokio::task::yield_now().await;
                assert_eq!(fired.load(Ordering::SeqCst), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn hydrate_discards_expired_record() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let store = MemoryStore::new();
                {
                    let mut manager = SessionManager::new(store.clone());
                    manager.set_credentials(user(Role::Pi), "at".into(), "rt".into(), || {});
                }

                // fake the passage of wall-clock time by rewriting the record
                // with a deadline in the past
                let mut record = store.load().unwrap();
                record.session_expiry = now_ms() - 1;
                store.save(&record);

                let manager = SessionManager::hydrate(store.clone());
                assert_eq!(manager.snapshot(), Session::Unauthenticated);
                assert_eq!(store.read_raw(), None);
            })
            .await;
    }
}
