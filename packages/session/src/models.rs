//! # Identity models
//!
//! Defines the user identity carried by the session. These types are
//! `Serialize + Deserialize` so they can cross the backend wire contract and
//! be persisted in the browser's session storage.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Closed role enumeration used by the route guards. Unrecognized wire values deserialize to [`Role::Unknown`], which every guard treats as unprivileged. |
//! | [`UserInfo`] | The client-safe identity record: id, email, names, role, institution. Replaced wholesale on login, merged on profile update, cleared on logout. |
//! | [`UserPatch`] | All-`Option` shallow-merge patch applied by the `update_user` transition. |

use serde::{Deserialize, Serialize};

/// Portal roles, as issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    SuperAdmin,
    Admin,
    /// Principal investigator — has its own dashboard at `/pi`.
    #[serde(rename = "PI")]
    Pi,
    Researcher,
    Public,
    /// Catch-all for roles this client build does not know about.
    /// Treated as unprivileged everywhere, never as an error.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles allowed into the admin area.
    pub fn is_admin_tier(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }
}

/// User identity record owned by the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Missing role in a backend payload falls back to [`Role::Unknown`].
    #[serde(default)]
    pub role: Role,
    pub institution: Option<String>,
}

impl UserInfo {
    /// Full display name, falling back to the email address.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        if name.trim().is_empty() {
            self.email.clone()
        } else {
            name.trim().to_string()
        }
    }
}

/// Shallow-merge patch for profile updates. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub institution: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Pi).unwrap(), "\"PI\"");
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"SuperAdmin\"");
        let role: Role = serde_json::from_str("\"PI\"").unwrap();
        assert_eq!(role, Role::Pi);
    }

    #[test]
    fn unrecognized_role_is_unknown() {
        let role: Role = serde_json::from_str("\"Janitor\"").unwrap();
        assert_eq!(role, Role::Unknown);
        assert!(!role.is_admin_tier());
    }

    #[test]
    fn missing_role_defaults_to_unknown() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.org","firstName":"Ada","lastName":"Byron","institution":null}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Unknown);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "u1".into(),
            email: "a@b.org".into(),
            first_name: "".into(),
            last_name: "".into(),
            role: Role::Public,
            institution: None,
        };
        assert_eq!(user.display_name(), "a@b.org");
    }
}
