use dioxus::prelude::*;

use ui::Navbar;

/// Public home page.
#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {
            a { href: "/projects", "Projects" }
        }
        div {
            class: "home",
            h1 { "LabPortal" }
            p { "Research projects, equipment, and publications." }
        }
    }
}
