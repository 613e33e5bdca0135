//! Route admission guards.
//!
//! Both guards are pure functions over a [`Session`] snapshot — no network,
//! no storage, no framework. They return a closed [`GuardDecision`]; the web
//! shell maps [`RedirectTarget`] variants onto concrete routes.

use crate::models::Role;
use crate::state::Session;

/// Where a denied navigation should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Public login page (the generic guard captures the attempted location).
    Login,
    /// Admin login page.
    AdminLogin,
    /// The "you are not allowed here" page.
    Unauthorized,
    /// The PI operator dashboard.
    PiDashboard,
    /// Public home.
    Home,
}

/// Outcome of evaluating a guard against the current session snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect {
        target: RedirectTarget,
        /// Attempted path to return to after a successful login.
        return_to: Option<String>,
    },
}

fn redirect(target: RedirectTarget) -> GuardDecision {
    GuardDecision::Redirect {
        target,
        return_to: None,
    }
}

/// Role policy attached to a protected route. An empty list imposes no
/// restriction: any authenticated role is accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePolicy {
    pub required_roles: Vec<Role>,
    pub allowed_roles: Vec<Role>,
}

impl RoutePolicy {
    /// Authentication required, any role accepted.
    pub fn any_authenticated() -> Self {
        Self::default()
    }

    pub fn allowing(roles: &[Role]) -> Self {
        Self {
            allowed_roles: roles.to_vec(),
            ..Self::default()
        }
    }

    pub fn requiring(roles: &[Role]) -> Self {
        Self {
            required_roles: roles.to_vec(),
            ..Self::default()
        }
    }
}

/// Generic role-check guard for protected routes.
///
/// Unauthenticated navigation is sent to the login page with the attempted
/// location captured for post-login return. An authenticated user is denied
/// (sent to the unauthorized page) when either non-empty role list does not
/// contain their role.
pub fn admit(session: &Session, policy: &RoutePolicy, attempted: &str) -> GuardDecision {
    let Some(role) = session.role() else {
        return GuardDecision::Redirect {
            target: RedirectTarget::Login,
            return_to: Some(attempted.to_string()),
        };
    };
    if !policy.required_roles.is_empty() && !policy.required_roles.contains(&role) {
        return redirect(RedirectTarget::Unauthorized);
    }
    if !policy.allowed_roles.is_empty() && !policy.allowed_roles.contains(&role) {
        return redirect(RedirectTarget::Unauthorized);
    }
    GuardDecision::Allow
}

/// Admin-tier guard.
///
/// Never yields `Unauthorized` — the admin area must present as absent to
/// non-privileged users, so every denial is a role-appropriate redirect: the
/// PI operator role goes to its own dashboard, everything else to the public
/// home.
pub fn admit_admin(session: &Session) -> GuardDecision {
    let Some(role) = session.role() else {
        return redirect(RedirectTarget::AdminLogin);
    };
    if role.is_admin_tier() {
        return GuardDecision::Allow;
    }
    match role {
        Role::Pi => redirect(RedirectTarget::PiDashboard),
        _ => redirect(RedirectTarget::Home),
    }
}
