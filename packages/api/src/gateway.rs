//! HTTP client for the backend auth contract.
//!
//! Four operations, all `POST`, all JSON with camelCase fields:
//!
//! | Operation | Endpoint | Success payload |
//! |-----------|----------|-----------------|
//! | login | `/auth/login` | `{user, accessToken, refreshToken}` |
//! | register | `/auth/register` | empty (registration does not authenticate) |
//! | logout | `/auth/logout` | empty (best-effort, see below) |
//! | refresh | `/auth/refresh-token` | `{accessToken, refreshToken}` |
//!
//! A 4xx response carries `{message}`; it surfaces as
//! [`GatewayError::Rejected`] with that message, indistinguishable to the
//! caller from a transport failure in its effect: no state is written.
//! Logout failure is special-cased in [`AuthGateway::logout_best_effort`]:
//! logged and swallowed, since the caller tears the local session down
//! regardless.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use session::UserInfo;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend rejected the request (bad credentials, duplicate
    /// registration, invalid refresh token). Carries the user-visible
    /// message from the response body.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed (network down, DNS, timeout).
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserInfo,
    pub access_token: String,
    pub refresh_token: String,
}

/// Profile fields submitted at registration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the backend auth endpoints.
#[derive(Debug, Clone, Default)]
pub struct AuthGateway {
    base_url: String,
    client: reqwest::Client,
}

impl AuthGateway {
    /// Gateway against the same origin the app was served from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway against an explicit backend origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, GatewayError> {
        self.post_json(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Create an account. Does not authenticate — the caller routes the user
    /// to the login page afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Tell the backend to invalidate the session. Best-effort: the caller
    /// must tear down local state whether or not this succeeds.
    pub async fn logout(&self) -> Result<(), GatewayError> {
        let response = self.client.post(self.url("/auth/logout")).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// [`Self::logout`] with the failure policy applied: a server that is
    /// down or rejects the call is logged and otherwise ignored. The local
    /// session is torn down by the caller regardless, so there is nothing
    /// useful to surface.
    pub async fn logout_best_effort(&self) {
        if let Err(err) = self.logout().await {
            tracing::warn!("server logout failed, local session cleared anyway: {err}");
        }
    }

    /// Exchange a refresh token for a fresh token pair. Not invoked
    /// automatically anywhere; kept for silent renewal.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, GatewayError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RefreshRequest<'a> {
            refresh_token: &'a str,
        }
        self.post_json("/auth/refresh-token", &RefreshRequest { refresh_token })
            .await
    }

    fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            // reqwest refuses a bare "/auth/login"; it needs an absolute URL
            format!("{}{path}", default_origin())
        } else {
            format!("{}{path}", self.base_url)
        }
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, GatewayError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Map a non-success status to [`GatewayError::Rejected`] using the
    /// `{message}` body when one is present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Err(GatewayError::Rejected(message))
    }
}

/// Origin the app was served from (the tab's `window.location.origin`);
/// off the browser there is no ambient origin, so fall back to the dev
/// server address.
fn default_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "http://localhost:8080".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::Role;

    #[test]
    fn default_gateway_builds_absolute_urls() {
        let gateway = AuthGateway::new();
        let url = gateway.url("/auth/login");
        assert!(url.starts_with("http"), "got relative url {url:?}");
        assert!(url.ends_with("/auth/login"));
    }

    #[test]
    fn explicit_base_url_wins_over_the_origin() {
        let gateway = AuthGateway::with_base_url("https://api.lab.example");
        assert_eq!(
            gateway.url("/auth/login"),
            "https://api.lab.example/auth/login"
        );
    }

    #[tokio::test]
    async fn best_effort_logout_swallows_transport_failures() {
        // nothing listens on the discard port; the call must come back
        // instead of surfacing the error
        let gateway = AuthGateway::with_base_url("http://127.0.0.1:9");
        gateway.logout_best_effort().await;
    }

    #[test]
    fn login_response_parses_wire_payload() {
        let payload = r#"{
            "user": {
                "id": "u1",
                "email": "ada@lab.org",
                "firstName": "Ada",
                "lastName": "Byron",
                "role": "PI",
                "institution": "Analytical Engines"
            },
            "accessToken": "at",
            "refreshToken": "rt"
        }"#;
        let parsed: LoginResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.user.role, Role::Pi);
        assert_eq!(parsed.access_token, "at");
        assert_eq!(parsed.refresh_token, "rt");
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            email: "ada@lab.org".into(),
            password: "engine-no-9".into(),
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            institution: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"lastName\":\"Byron\""));
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid email or password"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid email or password"));
    }
}
