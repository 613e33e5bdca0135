use dioxus::prelude::*;

use crate::guards::Protected;
use session::Role;
use ui::Navbar;

/// Dashboard for principal investigators. Admin-tier roles may also look in.
#[component]
pub fn PiDashboard() -> Element {
    rsx! {
        Protected {
            allowed: vec![Role::Pi, Role::Admin, Role::SuperAdmin],
            Navbar {
                a { href: "/", "Home" }
            }
            div {
                class: "pi-dashboard",
                h1 { "My Lab" }
                ul {
                    li { "Projects" }
                    li { "Equipment bookings" }
                }
            }
        }
    }
}
