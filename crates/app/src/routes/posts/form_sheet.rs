use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, PostForm, Upload};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, FileInput, Form, Input, Sheet, SheetContent,
    SheetFooter, SheetHeader, SwitchField, Textarea,
};

use super::{body_error, PostKind, PostRow};
use crate::components::FormMode;
use crate::feedback::use_feedback;
use crate::session::use_api;
use crate::uploads::first_upload;

/// Create/edit sheet for a blog post or news item.
#[component]
pub fn PostFormSheet(
    kind: PostKind,
    mode: FormMode,
    initial: Option<PostRow>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let client = use_api();
    let feedback = use_feedback();

    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut active = use_signal(|| true);
    let mut image = use_signal(|| Option::<Upload>::None);
    let mut baseline = use_signal(PostForm::blank);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let initial_for_hydration = initial.clone();
    use_effect(move || {
        if !open {
            return;
        }
        let form = initial_for_hydration
            .as_ref()
            .map(PostForm::from)
            .unwrap_or_else(PostForm::blank);
        title.set(form.title.clone());
        body.set(form.body.clone());
        active.set(form.active);
        image.set(None);
        field_errors.set(HashMap::new());
        baseline.set(form);
    });

    let current = move || PostForm {
        title: title().trim().to_string(),
        body: body(),
        active: active(),
        image: image(),
    };

    let mut show_discard = use_signal(|| false);
    let mut try_close = move |_: ()| {
        if current() != baseline() {
            show_discard.set(true);
        } else {
            on_close.call(());
        }
    };

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

    let mut in_flight = use_signal(|| false);
    let id = initial.as_ref().map(|row| row.id);

    let handle_save = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let client = client.clone();
        let form = current();
        spawn(async move {
            in_flight.set(true);
            field_errors.set(HashMap::new());
            match kind.save(&client, id, &form).await {
                Ok(message) => {
                    tracing::info!(kind = kind.singular(), ?id, "post {}", mode.verb());
                    feedback.success(message);
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

    let sheet_title = match mode {
        FormMode::Create => format!("New {}", kind.singular().to_lowercase()),
        FormMode::Edit => format!("Edit {}", kind.singular().to_lowercase()),
    };
    let image_name = image.read().as_ref().map(|f| f.file_name.clone());

    rsx! {
        Sheet { open, on_close: try_close, wide: true,
            SheetContent {
                SheetHeader {
                    title: sheet_title,
                    description: kind.description().to_string(),
                    on_close: try_close,
                }
                Form { onsubmit: handle_save,
                    div { class: "sheet-form",
                        Input {
                            label: "Title",
                            value: title(),
                            required: true,
                            error: field_errors.read().get("title").cloned(),
                            on_input: move |e: FormEvent| title.set(e.value()),
                        }
                        Textarea {
                            label: "Body",
                            value: body(),
                            rows: 12,
                            placeholder: "HTML is allowed.",
                            error: body_error(&field_errors.read()),
                            on_input: move |e: FormEvent| body.set(e.value()),
                        }
                        FileInput {
                            label: "Image",
                            accept: "image/*",
                            file_name: image_name,
                            hint: "PNG or JPEG, up to 2 MB.",
                            error: field_errors.read().get("image").cloned(),
                            on_change: on_image,
                        }
                        SwitchField {
                            label: "Published",
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
            description: "Your edits to this post have not been saved.",
            confirm_label: "Discard",
            cancel_label: "Keep editing",
            on_confirm: move |_| on_close.call(()),
        }
    }
}
