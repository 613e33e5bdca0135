//! Administrative login page. Same wire contract as the public login, but a
//! success lands on the admin dashboard and the page presents as its own
//! surface, separate from the public portal.

use dioxus::prelude::*;

use ui::use_auth;

#[component]
pub fn AdminLogin() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api::AuthGateway::new().login(&e, &p).await {
                Ok(response) => {
                    auth.sign_in(response.user, response.access_token, response.refresh_token);
                    // the admin gate re-routes non-privileged roles from here
                    ui::redirect_to("/admin");
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "admin-login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #1e1e2e;",

            h1 {
                style: "margin-bottom: 0.5rem; color: #cdd6f4; font-weight: 700; font-size: 1.75rem;",
                "LabPortal Administration"
            }

            form {
                onsubmit: handle_login,
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px; margin-top: 2rem;",

                if let Some(err) = error() {
                    div {
                        style: "padding: 0.625rem; border-radius: 4px; background: #45253a; color: #f38ba8; font-size: 0.8125rem;",
                        "{err}"
                    }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
