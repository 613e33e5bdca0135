//! Login page view with email/password form.

use dioxus::prelude::*;

use ui::use_auth;

/// Login page component. `from` carries the path a guard bounced the user
/// off of; a successful login returns there.
#[component]
pub fn Login(from: String) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already signed in, there is nothing to do here
    if auth.snapshot().is_authenticated() {
        ui::redirect_to("/");
    }

    let return_path = from.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let from = return_path.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match api::AuthGateway::new().login(&e, &p).await {
                Ok(response) => {
                    auth.sign_in(response.user, response.access_token, response.refresh_token);
                    if from.is_empty() {
                        ui::redirect_to("/");
                    } else {
                        ui::redirect_to(&from);
                    }
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
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "LabPortal"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign in to your account"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "No account yet? "
                a {
                    class: "text-primary-500 no-underline",
                    href: "/register",
                    "Sign up"
                }
            }
        }
    }
}
