use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Admin, AdminLogin, Home, Login, PiDashboard, Projects, Register, Unauthorized};

mod guards;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:from")]
    Login { from: String },
    #[route("/register")]
    Register {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/projects")]
    Projects {},
    #[route("/pi")]
    PiDashboard {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin")]
    Admin {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        AuthProvider {
            Router::<Route> {}
        }
    }
}
