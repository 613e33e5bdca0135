//! This crate contains the shared UI for the workspace: the auth context
//! that wires the session core into the Dioxus component tree, and the
//! navbar built on top of it.

mod auth;
pub use auth::{redirect_to, use_auth, AuthHandle, AuthProvider, LogoutButton, PlatformStore};

mod navbar;
pub use navbar::Navbar;
