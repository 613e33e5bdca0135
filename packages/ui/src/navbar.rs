use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let name = auth.snapshot().user().map(|u| u.display_name());

    rsx! {
        div {
            class: "navbar",
            {children}
            if let Some(name) = name {
                span { class: "navbar-user", "{name}" }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
