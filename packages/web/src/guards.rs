//! Guard wrapper components: evaluate the pure admission guards against the
//! current session snapshot on every render of a protected route, and map
//! denial targets onto concrete routes.

use dioxus::prelude::*;

use session::{admit, admit_admin, GuardDecision, RedirectTarget, Role, RoutePolicy};
use ui::use_auth;

use crate::Route;

fn redirect_route(target: RedirectTarget, return_to: Option<String>) -> Route {
    match target {
        RedirectTarget::Login => Route::Login {
            from: return_to.unwrap_or_default(),
        },
        RedirectTarget::AdminLogin => Route::AdminLogin {},
        RedirectTarget::Unauthorized => Route::Unauthorized {},
        RedirectTarget::PiDashboard => Route::PiDashboard {},
        RedirectTarget::Home => Route::Home {},
    }
}

/// Generic role-check gate. Empty role lists mean any authenticated user.
#[component]
pub fn Protected(
    #[props(default)] required: Vec<Role>,
    #[props(default)] allowed: Vec<Role>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let attempted = use_route::<Route>().to_string();

    let policy = RoutePolicy {
        required_roles: required,
        allowed_roles: allowed,
    };
    match admit(&auth.snapshot(), &policy, &attempted) {
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Redirect { target, return_to } => {
            nav.replace(redirect_route(target, return_to));
            rsx! {}
        }
    }
}

/// Admin-tier gate. Non-privileged users are redirected by role, never shown
/// an unauthorized page.
#[component]
pub fn AdminArea(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match admit_admin(&auth.snapshot()) {
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Redirect { target, return_to } => {
            nav.replace(redirect_route(target, return_to));
            rsx! {}
        }
    }
}
