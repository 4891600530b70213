use dioxus::prelude::*;
use fitsoc::{LoginForm, submit_login};

use crate::api::ApiClient;
use crate::components::{button::Button, input::Input};
use crate::state::SessionStore;

#[component]
pub fn Login() -> Element {
    let mut email: Signal<String> = use_signal(|| "".to_string());
    let mut password: Signal<String> = use_signal(|| "".to_string());
    let mut local_error: Signal<Option<String>> = use_signal(|| None);
    let session = use_context::<SessionStore>();
    let api = use_context::<ApiClient>();

    let is_loading = session.is_loading();
    let error = local_error().or_else(|| session.error());

    rsx! {
        div { id: "login",
            div { class: "login-card",
                h1 { "Welcome to FitSoc Admin" }
                p { class: "login-subtitle", "Sign in to manage your societies" }

                form {
                    class: "login-form",
                    "novalidate": "true",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        let form = LoginForm::new(email(), password());
                        let api = api.clone();
                        match submit_login(&form, |credentials| session.login(api, credentials)) {
                            Ok(()) => local_error.set(None),
                            Err(err) => local_error.set(Some(err.to_string())),
                        }
                    },

                    div { class: "form-group",
                        label { r#for: "email",
                            "Email"
                            span { class: "required", "*" }
                        }
                        Input {
                            id: "email",
                            kind: "email",
                            name: "email",
                            placeholder: "you@society.com",
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password",
                            "Password"
                            span { class: "required", "*" }
                        }
                        Input {
                            id: "password",
                            kind: "password",
                            name: "password",
                            placeholder: "Enter password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }

                    if let Some(message) = error {
                        p { class: "form-error", role: "alert", "{message}" }
                    }

                    div { align_content: "center",
                        Button {
                            kind: "submit",
                            disabled: is_loading,
                            if is_loading { "Signing in..." } else { "Login" }
                        }
                    }
                }
            }
        }
    }
}
