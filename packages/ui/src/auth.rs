//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`SessionManager`] for the application and
//! exposes it through [`AuthHandle`], a `Copy` context value. All session
//! mutation from the component tree goes through the handle's methods, which
//! map one-to-one onto the state machine's transitions.

use dioxus::prelude::*;

use session::{now_ms, Session, SessionManager, UserInfo, UserPatch};

/// The store backing the session on this platform.
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = session::WebStore;
/// The store backing the session on this platform.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = session::MemoryStore;

fn platform_store() -> PlatformStore {
    #[cfg(target_arch = "wasm32")]
    {
        session::WebStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // one shared slot per process, mirroring the tab scope of
        // sessionStorage
        use once_cell::sync::Lazy;
        static STORE: Lazy<session::MemoryStore> = Lazy::new(session::MemoryStore::new);
        STORE.clone()
    }
}

/// Hard navigation to an app path.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Get the current authentication handle.
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
}

/// Handle to the application session. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct AuthHandle {
    manager: Signal<SessionManager<PlatformStore>>,
}

impl AuthHandle {
    /// Current session snapshot.
    pub fn snapshot(&self) -> Session {
        self.manager.read().snapshot()
    }

    /// Install credentials from a successful login, persist them, and arm
    /// the expiry clock.
    pub fn sign_in(&mut self, user: UserInfo, access_token: String, refresh_token: String) {
        let handle = *self;
        self.manager
            .write()
            .set_credentials(user, access_token, refresh_token, move || handle.expire());
    }

    /// Shallow-merge profile fields after a profile save.
    pub fn update_user(&mut self, patch: &UserPatch) {
        self.manager.write().update_user(patch);
    }

    /// Explicit logout: unconditional local teardown, then best-effort
    /// server notification. The notification is awaited so a caller that
    /// hard-navigates afterwards does not unload the page mid-request; a
    /// network failure never blocks the teardown.
    pub async fn logout(&mut self) {
        self.manager.write().logout();
        api::AuthGateway::new().logout_best_effort().await;
    }

    /// Clock-fired forced logout. Converges on the same idempotent teardown
    /// as [`Self::logout`].
    fn expire(mut self) {
        tracing::info!("session expired, forcing logout");
        self.manager.write().logout();
        redirect_to("/login");
    }

    fn rearm(mut self) {
        let handle = self;
        self.manager.write().arm_expiry(move || handle.expire());
    }

    /// Arm the clock for a rehydrated session. Reads the signal untracked so
    /// the mount effect does not re-run on its own write.
    fn bootstrap(mut self) {
        let Some(expiry) = self.manager.peek().session().session_expiry() else {
            return;
        };
        // the deadline can pass between hydration and this mount effect;
        // arming would then fire synchronously inside the write borrow
        // rearm() holds, so tear down directly instead
        if expiry <= now_ms() {
            self.manager.write().logout();
            redirect_to("/login");
        } else {
            self.rearm();
        }
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let manager = use_signal(|| SessionManager::hydrate(platform_store()));
    let handle = AuthHandle { manager };

    // A rehydrated session needs its expiry clock re-armed once on mount.
    use_effect(move || handle.bootstrap());

    use_context_provider(|| handle);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    // redirect only after the server call settles; a hard navigation would
    // abort an in-flight fetch
    let onclick = move |_| async move {
        auth.logout().await;
        redirect_to("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
