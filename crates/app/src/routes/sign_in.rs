use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, LoginRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Form, Input,
};

use crate::routes::Route;
use crate::session::{use_api, use_session};

/// Email/password sign-in. On success the session is stored and the route
/// guard moves the user on to the dashboard.
#[component]
pub fn SignIn() -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |_: FormEvent| {
        if loading() {
            return;
        }
        let client = client.clone();
        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match client.login(&request).await {
                Ok(response) => {
                    if let Err(e) = session.sign_in(response) {
                        error_msg.set(Some(e.friendly_message()));
                    }
                }
                Err(e) if e.kind == AppErrorKind::ValidationError && !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => error_msg.set(Some(e.friendly_message())),
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in" }
                    CardDescription { "Use the email and password you registered with." }
                }
                Form { onsubmit: handle_login,
                    CardContent {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", role: "alert", "{err}" }
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            placeholder: "you@university.edu",
                            required: true,
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            loading_label: "Signing in...",
                            class: "auth-submit",
                            "Sign in"
                        }
                    }
                }
                p { class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::SignUp {}, "Sign up" }
                }
            }
        }
    }
}
