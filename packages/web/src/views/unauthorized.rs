use dioxus::prelude::*;

/// Shown when an authenticated user's role is not admitted to a route.
#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div {
            class: "unauthorized",
            h1 { "Not authorized" }
            p { "Your account does not have access to this page." }
            a { href: "/", "Back to home" }
        }
    }
}
