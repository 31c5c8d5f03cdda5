use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, RoleCode, User, UserForm, ALL_ROLES};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, Form, FormSelect, Input, Sheet, SheetContent,
    SheetFooter, SheetHeader, SwitchField,
};

use crate::components::FormMode;
use crate::feedback::use_feedback;
use crate::format_helpers::non_empty;
use crate::session::use_api;

/// Password to send: always on create (so validation can reject a blank
/// one), only when typed on edit.
fn password_field(mode: FormMode, typed: &str) -> Option<String> {
    match mode {
        FormMode::Create => Some(typed.to_string()),
        FormMode::Edit => (!typed.trim().is_empty()).then(|| typed.to_string()),
    }
}

/// Admin create/edit sheet for any account, including staff roles.
#[component]
pub fn UserFormSheet(
    mode: FormMode,
    initial: Option<User>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let client = use_api();
    let feedback = use_feedback();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| RoleCode::Author);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut affiliation = use_signal(String::new);
    let mut active = use_signal(|| true);
    let mut baseline = use_signal(UserForm::blank);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let initial_for_hydration = initial.clone();
    use_effect(move || {
        if !open {
            return;
        }
        let form = initial_for_hydration
            .as_ref()
            .map(UserForm::from_user)
            .unwrap_or_else(UserForm::blank);
        name.set(form.name.clone());
        email.set(form.email.clone());
        role.set(form.user_type);
        password.set(String::new());
        phone.set(form.phone.clone().unwrap_or_default());
        affiliation.set(form.affiliation.clone().unwrap_or_default());
        active.set(form.active);
        field_errors.set(HashMap::new());
        baseline.set(form);
    });

    let current = move || UserForm {
        name: name().trim().to_string(),
        email: email().trim().to_string(),
        user_type: role(),
        password: password_field(mode, &password()),
        phone: non_empty(&phone()),
        affiliation: non_empty(&affiliation()),
        active: active(),
    };

    let mut show_discard = use_signal(|| false);
    let mut try_close = move |_: ()| {
        let mut untouched = baseline();
        untouched.password = password_field(mode, "");
        if current() != untouched {
            show_discard.set(true);
        } else {
            on_close.call(());
        }
    };

    let mut in_flight = use_signal(|| false);
    let id = initial.as_ref().map(|u| u.id);

    let handle_save = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let client = client.clone();
        let form = current();
        spawn(async move {
            in_flight.set(true);
            field_errors.set(HashMap::new());
            let result = match id {
                None => client.create_user(&form).await,
                Some(id) => client.update_user(id, &form).await,
            };
            match result {
                Ok(reply) => {
                    tracing::info!(?id, role = %form.user_type, "user {}", mode.verb());
                    feedback.success(reply.message_or(&format!("User {}", mode.verb())));
                    on_saved.call(());
                    on_close.call(());
                }
                Err(e) if e.kind == AppErrorKind::ValidationError && !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => feedback.error(&e),
            }
            in_flight.set(false);
        });
    };

    let (sheet_title, password_label) = match mode {
        FormMode::Create => ("New user", "Password"),
        FormMode::Edit => ("Edit user", "New password (leave empty to keep)"),
    };

    rsx! {
        Sheet { open, on_close: try_close,
            SheetContent {
                SheetHeader {
                    title: sheet_title.to_string(),
                    description: "Staff roles can only be granted here.",
                    on_close: try_close,
                }
                Form { onsubmit: handle_save,
                    div { class: "sheet-form",
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
                        FormSelect {
                            label: "Role",
                            value: role().code().to_string(),
                            error: field_errors.read().get("user_type").cloned(),
                            onchange: move |e: FormEvent| {
                                if let Some(picked) = RoleCode::parse(&e.value()) {
                                    role.set(picked);
                                }
                            },
                            for r in ALL_ROLES {
                                option { value: r.code(), selected: r == role(), "{r.label()}" }
                            }
                        }
                        Input {
                            label: password_label.to_string(),
                            input_type: "password",
                            value: password(),
                            required: mode == FormMode::Create,
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
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
                        SwitchField {
                            label: "Active",
                            checked: active(),
                            on_change: move |v: bool| active.set(v),
                        }
                    }
                    SheetFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| try_close(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: in_flight(),
                            loading_label: "Saving...",
                            "{mode.submit_label()}"
                        }
                    }
                }
            }
        }
        ConfirmDialog {
            open: show_discard,
            title: "Discard changes?",
            description: "Your edits to this account have not been saved.",
            confirm_label: "Discard",
            cancel_label: "Keep editing",
            on_confirm: move |_| on_close.call(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_password_is_kept_on_edit_only() {
        assert_eq!(password_field(FormMode::Create, ""), Some(String::new()));
        assert_eq!(password_field(FormMode::Edit, "  "), None);
        assert_eq!(
            password_field(FormMode::Edit, "s3cret-pass"),
            Some("s3cret-pass".to_string())
        );
    }
}
