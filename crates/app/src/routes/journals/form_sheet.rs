use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, Category, Group, Journal, JournalForm, Upload};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, FileInput, Form, FormSelect, Input, Sheet, SheetContent,
    SheetFooter, SheetHeader, SwitchField, Textarea,
};

use crate::components::FormMode;
use crate::feedback::use_feedback;
use crate::format_helpers::{non_empty, parse_id};
use crate::session::use_api;
use crate::uploads::first_upload;

fn id_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Create/edit sheet for a journal, including its cover image.
#[component]
pub fn JournalFormSheet(
    mode: FormMode,
    initial: Option<Journal>,
    categories: Vec<Category>,
    groups: Vec<Group>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let client = use_api();
    let feedback = use_feedback();

    let mut title = use_signal(String::new);
    let mut issn = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category_id = use_signal(String::new);
    let mut group_id = use_signal(String::new);
    let mut active = use_signal(|| true);
    let mut cover = use_signal(|| Option::<Upload>::None);
    let mut baseline = use_signal(JournalForm::blank);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let initial_for_hydration = initial.clone();
    use_effect(move || {
        if !open {
            return;
        }
        let form = initial_for_hydration
            .as_ref()
            .map(JournalForm::from)
            .unwrap_or_else(JournalForm::blank);
        title.set(form.title.clone());
        issn.set(form.issn.clone().unwrap_or_default());
        description.set(form.description.clone().unwrap_or_default());
        category_id.set(id_value(form.category_id));
        group_id.set(id_value(form.group_id));
        active.set(form.active);
        cover.set(None);
        field_errors.set(HashMap::new());
        baseline.set(form);
    });

    let current = move || JournalForm {
        title: title().trim().to_string(),
        issn: non_empty(&issn()),
        description: non_empty(&description()),
        category_id: parse_id(&category_id()),
        group_id: parse_id(&group_id()),
        active: active(),
        image: cover(),
    };

    let mut show_discard = use_signal(|| false);
    let mut try_close = move |_: ()| {
        if current() != baseline() {
            show_discard.set(true);
        } else {
            on_close.call(());
        }
    };

    let on_cover = move |evt: FormEvent| async move {
        match first_upload(&evt).await {
            Ok(file) => {
                field_errors.write().remove("image");
                cover.set(file);
            }
            Err(message) => {
                field_errors.write().insert("image".to_string(), message);
            }
        }
    };

    let mut in_flight = use_signal(|| false);
    let id = initial.as_ref().map(|j| j.id);

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
                None => client.create_journal(&form).await,
                Some(id) => client.update_journal(id, &form).await,
            };
            match result {
                Ok(reply) => {
                    tracing::info!(?id, "journal {}", mode.verb());
                    feedback.success(reply.message_or(&format!("Journal {}", mode.verb())));
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
        FormMode::Create => "New journal",
        FormMode::Edit => "Edit journal",
    };
    let cover_name = cover.read().as_ref().map(|f| f.file_name.clone());
    let cover_hint = match (mode, initial.as_ref().and_then(|j| j.image.as_ref())) {
        (FormMode::Edit, Some(_)) => "Leave empty to keep the current cover. PNG or JPEG, up to 2 MB.",
        _ => "PNG or JPEG, up to 2 MB.",
    };

    rsx! {
        Sheet { open, on_close: try_close, wide: true,
            SheetContent {
                SheetHeader {
                    title: sheet_title.to_string(),
                    description: "Journals appear in the public catalogue while active.",
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
                        Input {
                            label: "ISSN",
                            value: issn(),
                            placeholder: "1234-5678",
                            error: field_errors.read().get("issn").cloned(),
                            on_input: move |e: FormEvent| issn.set(e.value()),
                        }
                        FormSelect {
                            label: "Category",
                            value: category_id(),
                            error: field_errors.read().get("category_id").cloned(),
                            onchange: move |e: FormEvent| category_id.set(e.value()),
                            option { value: "", "No category" }
                            for c in categories.iter() {
                                option {
                                    key: "{c.id}",
                                    value: "{c.id}",
                                    selected: category_id() == c.id.to_string(),
                                    "{c.name}"
                                }
                            }
                        }
                        FormSelect {
                            label: "Group",
                            value: group_id(),
                            error: field_errors.read().get("group_id").cloned(),
                            onchange: move |e: FormEvent| group_id.set(e.value()),
                            option { value: "", "No group" }
                            for g in groups.iter() {
                                option {
                                    key: "{g.id}",
                                    value: "{g.id}",
                                    selected: group_id() == g.id.to_string(),
                                    "{g.name}"
                                }
                            }
                        }
                        Textarea {
                            label: "Description",
                            value: description(),
                            rows: 5,
                            error: field_errors.read().get("description").cloned(),
                            on_input: move |e: FormEvent| description.set(e.value()),
                        }
                        FileInput {
                            label: "Cover image",
                            accept: "image/*",
                            file_name: cover_name,
                            hint: cover_hint.to_string(),
                            error: field_errors.read().get("image").cloned(),
                            on_change: on_cover,
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
            description: "Your edits to this journal have not been saved.",
            confirm_label: "Discard",
            cancel_label: "Keep editing",
            on_confirm: move |_| on_close.call(()),
        }
    }
}
