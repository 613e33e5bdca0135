//! Registration page view with profile form.

use dioxus::prelude::*;

use api::RegisterRequest;
use ui::use_auth;

/// Register page component. Registration does not authenticate: a new
/// account lands on the login page.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut institution = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.snapshot().is_authenticated() {
        ui::redirect_to("/");
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let fname = first_name().trim().to_string();
            let lname = last_name().trim().to_string();
            let inst = institution().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if fname.is_empty() || lname.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                email: e,
                password: p,
                first_name: fname,
                last_name: lname,
                institution: if inst.is_empty() { None } else { Some(inst) },
            };
            match api::AuthGateway::new().register(&request).await {
                Ok(()) => {
                    ui::redirect_to("/login");
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
                "Create Account"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Join LabPortal"
            }

            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: "w-full",
                    r#type: "text",
                    placeholder: "First name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }

                input {
                    class: "w-full",
                    r#type: "text",
                    placeholder: "Last name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }

                input {
                    class: "w-full",
                    r#type: "text",
                    placeholder: "Institution (optional)",
                    value: institution(),
                    oninput: move |evt: FormEvent| institution.set(evt.value()),
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
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "w-full text-[0.9375rem] font-medium",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                a {
                    class: "text-primary-500 no-underline",
                    href: "/login",
                    "Sign in"
                }
            }
        }
    }
}
