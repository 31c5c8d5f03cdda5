use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, RegisterRequest, RoleCode, Upload, ALL_ROLES};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FileInput, Form, FormSelect, Input,
};

use crate::feedback::use_feedback;
use crate::format_helpers::non_empty;
use crate::routes::Route;
use crate::session::use_api;
use crate::uploads::first_upload;

/// Roles offered on the public form, in wire-code order.
fn sign_up_roles() -> impl Iterator<Item = RoleCode> {
    ALL_ROLES.into_iter().filter(RoleCode::self_registrable)
}

/// Public registration for authors, reviewers and subscribers.
#[component]
pub fn SignUp() -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut role = use_signal(|| RoleCode::Author);
    let mut phone = use_signal(String::new);
    let mut affiliation = use_signal(String::new);
    let mut resume = use_signal(|| Option::<Upload>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |_: FormEvent| {
        if loading() {
            return;
        }
        let client = client.clone();
        let request = RegisterRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            password_confirmation: confirmation(),
            user_type: role(),
            phone: non_empty(&phone()),
            affiliation: non_empty(&affiliation()),
            resume: resume(),
        };
        spawn(async move {
            loading.set(true);
            field_errors.set(HashMap::new());

            match client.register(&request).await {
                Ok(reply) => {
                    feedback.success(reply.message_or("Account created. You can sign in now."));
                    navigator().push(Route::SignIn {});
                }
                Err(e) if e.kind == AppErrorKind::ValidationError && !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => feedback.error(&e),
            }
            loading.set(false);
        });
    };

    let on_resume = move |evt: FormEvent| async move {
        match first_upload(&evt).await {
            Ok(file) => {
                field_errors.write().remove("resume");
                resume.set(file);
            }
            Err(message) => {
                field_errors.write().insert("resume".to_string(), message);
            }
        }
    };

    let needs_resume = role().requires_resume();
    let resume_name = resume.read().as_ref().map(|f| f.file_name.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card auth-card-wide",
                CardHeader {
                    CardTitle { "Create an account" }
                    CardDescription { "Editors and administrators are added by the journal staff." }
                }
                Form { onsubmit: handle_register,
                    CardContent {
                        div { class: "auth-grid",
                            Input {
                                label: "Full name",
                                value: name(),
                                required: true,
                                error: field_errors.read().get("name").cloned(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: email(),
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
                            Input {
                                label: "Confirm password",
                                input_type: "password",
                                value: confirmation(),
                                required: true,
                                error: field_errors.read().get("password_confirmation").cloned(),
                                on_input: move |e: FormEvent| confirmation.set(e.value()),
                            }
                            FormSelect {
                                label: "I am joining as",
                                value: role().code().to_string(),
                                error: field_errors.read().get("user_type").cloned(),
                                onchange: move |e: FormEvent| {
                                    if let Some(picked) = RoleCode::parse(&e.value()) {
                                        role.set(picked);
                                    }
                                },
                                for r in sign_up_roles() {
                                    option { value: r.code(), selected: r == role(), "{r.label()}" }
                                }
                            }
                            Input {
                                label: "Phone",
                                input_type: "tel",
                                value: phone(),
                                error: field_errors.read().get("phone").cloned(),
                                on_input: move |e: FormEvent| phone.set(e.value()),
                            }
                            Input {
                                label: "Affiliation",
                                value: affiliation(),
                                placeholder: "University or organisation",
                                error: field_errors.read().get("affiliation").cloned(),
                                on_input: move |e: FormEvent| affiliation.set(e.value()),
                            }
                        }
                        if needs_resume {
                            FileInput {
                                label: "Resume",
                                accept: ".pdf,.doc,.docx",
                                file_name: resume_name,
                                hint: "Required for reviewers. PDF or Word, up to 10 MB.",
                                error: field_errors.read().get("resume").cloned(),
                                on_change: on_resume,
                            }
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            loading_label: "Creating account...",
                            class: "auth-submit",
                            "Sign up"
                        }
                    }
                }
                p { class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::SignIn {}, "Sign in" }
                }
            }
        }
    }
}
