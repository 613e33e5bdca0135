use dioxus::prelude::*;

use crate::guards::AdminArea;
use ui::Navbar;

/// Admin dashboard, visible only to the privileged roles. Everyone else is
/// silently re-routed by the gate.
#[component]
pub fn Admin() -> Element {
    rsx! {
        AdminArea {
            Navbar {
                a { href: "/admin", "Administration" }
            }
            div {
                class: "admin-dashboard",
                h1 { "Administration" }
                ul {
                    li { "Users" }
                    li { "Equipment" }
                    li { "Publications" }
                }
            }
        }
    }
}
