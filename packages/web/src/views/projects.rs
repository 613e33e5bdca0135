use dioxus::prelude::*;

use crate::guards::Protected;
use ui::Navbar;

/// Project listing. Requires authentication; any role is accepted.
/// The listing itself is backend CRUD and lives behind the gate.
#[component]
pub fn Projects() -> Element {
    rsx! {
        Protected {
            Navbar {
                a { href: "/", "Home" }
            }
            div {
                class: "projects",
                h1 { "Projects" }
            }
        }
    }
}
