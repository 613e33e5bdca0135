//! # Session core for LabPortal
//!
//! Framework-free client-side session lifecycle: the session state machine,
//! tab-scoped credential persistence, the expiry clock, and the route
//! admission guards. The `ui` crate wires these into the Dioxus component
//! tree; everything here is testable without a browser.

pub mod clock;
pub mod guard;
pub mod manager;
pub mod models;
pub mod state;
pub mod store;

#[cfg(target_arch = "wasm32")]
mod web_store;
#[cfg(target_arch = "wasm32")]
pub use web_store::WebStore;

pub use clock::{ExpireCallback, SessionClock};
pub use guard::{admit, admit_admin, GuardDecision, RedirectTarget, RoutePolicy};
pub use manager::SessionManager;
pub use models::{Role, UserInfo, UserPatch};
pub use state::{now_ms, AuthSession, Session, SESSION_DURATION_MS};
pub use store::{MemoryStore, SessionStore};
