use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, ProfileUpdate, Upload, User};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    DetailItem, DetailList, FileInput, Form, Input, PageHeader, PageTitle, UserAvatar,
};

use crate::components::RoleBadge;
use crate::feedback::use_feedback;
use crate::format_helpers::{format_date_opt, non_empty};
use crate::session::{use_api, use_session};
use crate::uploads::first_upload;

/// The signed-in user's own account details.
#[component]
pub fn Profile() -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let mut session = use_session();

    // Pull the server's copy once so edits made elsewhere show up here.
    use_future(move || {
        let client = client.clone();
        async move {
            match client.fetch_profile().await {
                Ok(user) => {
                    if let Err(e) = session.replace_user(user) {
                        tracing::warn!(error = %e, "refreshed profile rejected");
                        feedback.error(&e);
                    }
                }
                Err(e) => feedback.error(&e),
            }
        }
    });

    let Some(user) = session.user() else {
        return rsx! {};
    };

    rsx! {
        PageHeader {
            PageTitle { "Profile" }
        }
        div { class: "profile-layout",
            AccountSummary { user: user.clone() }
            ProfileForm { user }
        }
    }
}

#[component]
fn AccountSummary(user: User) -> Element {
    let client = use_api();
    let avatar = user.image.as_deref().map(|path| client.config().asset_url(path));
    let resume = user.resume.as_deref().map(|path| client.config().asset_url(path));

    rsx! {
        Card {
            CardHeader {
                div { class: "profile-identity",
                    UserAvatar { image: avatar, initials: user.initials() }
                    div {
                        CardTitle { "{user.name}" }
                        CardDescription { "{user.email}" }
                    }
                }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Role",
                        RoleBadge { code: user.user_type.clone() }
                    }
                    DetailItem { label: "Member since", value: Some(format_date_opt(user.created_at.as_deref())) }
                    if let Some(url) = resume {
                        DetailItem { label: "Resume",
                            a { href: url, target: "_blank", rel: "noopener", "View resume" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileForm(user: User) -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let mut session = use_session();
    let initial = ProfileUpdate::from_user(&user);

    let mut name = use_signal(|| initial.name.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut phone = use_signal(|| initial.phone.clone().unwrap_or_default());
    let mut affiliation = use_signal(|| initial.affiliation.clone().unwrap_or_default());
    let mut image = use_signal(|| Option::<Upload>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut in_flight = use_signal(|| false);

    let on_image = move |evt: FormEvent| async move {
        match first_upload(&evt).await {
            Ok(file) => {
                field_errors.write().remove("image");
                image.set(file);
            }
            Err(message) => {
                field_errors.write().insert("image".to_string(), message);
            }
        }
    };

    let handle_save = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let update = ProfileUpdate {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            phone: non_empty(&phone()),
            affiliation: non_empty(&affiliation()),
            image: image(),
        };
        let client = client.clone();
        spawn(async move {
            in_flight.set(true);
            field_errors.set(HashMap::new());
            match client.update_profile(&update).await {
                Ok(reply) => {
                    let message = reply.message_or("Profile updated");
                    match reply.data {
                        Some(updated) => match session.replace_user(updated) {
                            Ok(()) => {
                                tracing::info!("profile updated");
                                image.set(None);
                                feedback.success(message);
                            }
                            Err(e) => feedback.error(&e),
                        },
                        None => feedback.success(message),
                    }
                }
                Err(e) if e.kind == AppErrorKind::ValidationError && !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => feedback.error(&e),
            }
            in_flight.set(false);
        });
    };

    let image_name = image.read().as_ref().map(|f| f.file_name.clone());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Edit details" }
                CardDescription { "Your role can only be changed by an administrator." }
            }
            Form { onsubmit: handle_save,
                CardContent {
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
                        label: "Phone",
                        input_type: "tel",
                        value: phone(),
                        error: field_errors.read().get("phone").cloned(),
                        on_input: move |e: FormEvent| phone.set(e.value()),
                    }
                    Input {
                        label: "Affiliation",
                        value: affiliation(),
                        error: field_errors.read().get("affiliation").cloned(),
                        on_input: move |e: FormEvent| affiliation.set(e.value()),
                    }
                    FileInput {
                        label: "Profile picture",
                        accept: "image/jpeg,image/png,image/webp",
                        file_name: image_name,
                        hint: "Up to 2 MB.",
                        error: field_errors.read().get("image").cloned(),
                        on_change: on_image,
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        loading: in_flight(),
                        loading_label: "Saving...",
                        "Save profile"
                    }
                }
            }
        }
    }
}
