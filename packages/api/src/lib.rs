//! # API crate — the auth gateway for LabPortal
//!
//! The portal's backend is an external collaborator reached over a small JSON
//! wire contract. This crate owns that contract: the typed request/response
//! shapes and the [`AuthGateway`] HTTP client the views call.
//!
//! The gateway never mutates session state itself — a view invokes an
//! operation, and only a fully successful response is handed to the session
//! state machine. Partial failures therefore never leave partial state.

mod gateway;

pub use gateway::{
    AuthGateway, GatewayError, LoginRequest, LoginResponse, RegisterRequest, TokenPair,
};
pub use session::{Role, UserInfo};
