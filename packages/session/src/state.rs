//! Session state machine: `Unauthenticated` / `Authenticated`.
//!
//! The enum shape makes the core invariant structural — an authenticated
//! session always carries a user and an access token. All mutation goes
//! through the transition methods here; the write-through persistence and
//! clock side effects live in [`crate::manager::SessionManager`].

use serde::{Deserialize, Serialize};

use crate::models::{Role, UserInfo, UserPatch};

/// Fixed client-side session lifetime: one hour.
///
/// The client enforces its own ceiling regardless of the server-side token
/// lifetime; a server-extended token is still discarded after this window.
pub const SESSION_DURATION_MS: i64 = 60 * 60 * 1000;

/// Current time as epoch milliseconds.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Current time as epoch milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// The fields of an authenticated session. This is also the persisted
/// representation (camelCase JSON under the `"auth"` storage key).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: UserInfo,
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute deadline in epoch milliseconds. Never slid by activity.
    pub session_expiry: i64,
}

impl AuthSession {
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.session_expiry <= now
    }
}

/// The authoritative in-memory auth state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(AuthSession),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn auth(&self) -> Option<&AuthSession> {
        match self {
            Session::Authenticated(auth) => Some(auth),
            Session::Unauthenticated => None,
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.auth().map(|a| &a.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn session_expiry(&self) -> Option<i64> {
        self.auth().map(|a| a.session_expiry)
    }

    /// Replace the session wholesale with fresh credentials and start a new
    /// expiry window. Permitted while already authenticated (re-login).
    /// Returns the computed expiry timestamp.
    pub fn set_credentials(
        &mut self,
        user: UserInfo,
        access_token: String,
        refresh_token: String,
    ) -> i64 {
        let session_expiry = now_ms() + SESSION_DURATION_MS;
        *self = Session::Authenticated(AuthSession {
            user,
            access_token,
            refresh_token,
            session_expiry,
        });
        session_expiry
    }

    /// Shallow-merge profile fields. No-op when unauthenticated; never
    /// touches tokens or the expiry window. Returns whether any field was
    /// written, so callers can skip persisting an all-`None` patch.
    pub fn update_user(&mut self, patch: &UserPatch) -> bool {
        let Session::Authenticated(auth) = self else {
            return false;
        };
        let user = &mut auth.user;
        let mut changed = false;
        if let Some(email) = &patch.email {
            user.email = email.clone();
            changed = true;
        }
        if let Some(first_name) = &patch.first_name {
            user.first_name = first_name.clone();
            changed = true;
        }
        if let Some(last_name) = &patch.last_name {
            user.last_name = last_name.clone();
            changed = true;
        }
        if let Some(institution) = &patch.institution {
            user.institution = Some(institution.clone());
            changed = true;
        }
        changed
    }

    /// Drop all session fields. Idempotent.
    pub fn clear(&mut self) {
        *self = Session::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "ada@lab.org".into(),
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            role,
            institution: Some("Analytical Engines".into()),
        }
    }

    #[test]
    fn set_credentials_computes_one_hour_expiry() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        let before = now_ms();
        let expiry = session.set_credentials(user(Role::Pi), "at".into(), "rt".into());
        let after = now_ms();

        assert!(session.is_authenticated());
        assert!(expiry >= before + SESSION_DURATION_MS);
        assert!(expiry <= after + SESSION_DURATION_MS);
        assert_eq!(session.session_expiry(), Some(expiry));
        assert_eq!(session.role(), Some(Role::Pi));
    }

    #[test]
    fn relogin_replaces_prior_session() {
        let mut session = Session::default();
        session.set_credentials(user(Role::Public), "old-at".into(), "old-rt".into());
        session.set_credentials(user(Role::Admin), "new-at".into(), "new-rt".into());

        let auth = session.auth().unwrap();
        assert_eq!(auth.access_token, "new-at");
        assert_eq!(auth.user.role, Role::Admin);
    }

    #[test]
    fn update_user_merges_without_touching_tokens_or_expiry() {
        let mut session = Session::default();
        session.set_credentials(user(Role::Researcher), "at".into(), "rt".into());
        let expiry = session.session_expiry().unwrap();

        let changed = session.update_user(&UserPatch {
            last_name: Some("Lovelace".into()),
            ..Default::default()
        });
        assert!(changed);

        let auth = session.auth().unwrap();
        assert_eq!(auth.user.last_name, "Lovelace");
        assert_eq!(auth.user.first_name, "Ada");
        assert_eq!(auth.access_token, "at");
        assert_eq!(auth.session_expiry, expiry);
    }

    #[test]
    fn empty_patch_reports_no_change() {
        let mut session = Session::default();
        session.set_credentials(user(Role::Researcher), "at".into(), "rt".into());
        let before = session.clone();

        assert!(!session.update_user(&UserPatch::default()));
        assert_eq!(session, before);
    }

    #[test]
    fn expiry_check_is_inclusive_at_the_deadline() {
        let mut session = Session::default();
        session.set_credentials(user(Role::Pi), "at".into(), "rt".into());
        let auth = session.auth().unwrap();

        assert!(!auth.is_expired_at(auth.session_expiry - 1));
        assert!(auth.is_expired_at(auth.session_expiry));
    }

    #[test]
    fn update_user_is_noop_when_unauthenticated() {
        let mut session = Session::default();
        assert!(!session.update_user(&UserPatch::default()));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut session = Session::default();
        session.set_credentials(user(Role::Pi), "at".into(), "rt".into());
        session.clear();
        session.clear();
        assert_eq!(session, Session::Unauthenticated);
    }

    #[test]
    fn persisted_record_round_trips_camel_case() {
        let mut session = Session::default();
        session.set_credentials(user(Role::Pi), "at".into(), "rt".into());
        let auth = session.auth().unwrap();

        let json = serde_json::to_string(auth).unwrap();
        assert!(json.contains("\"accessToken\""));
        assert!(json.contains("\"sessionExpiry\""));
        assert!(json.contains("\"role\":\"PI\""));

        let parsed: AuthSession = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, auth);
    }
}
