use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, TaxonomyForm};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, Form, Input, Sheet, SheetContent, SheetFooter,
    SheetHeader, SwitchField, Textarea,
};

use super::{TaxonomyKind, TaxonomyRow};
use crate::components::FormMode;
use crate::feedback::use_feedback;
use crate::format_helpers::non_empty;
use crate::session::use_api;

/// Create/edit sheet for a category or group.
///
/// `initial` is `None` in create mode. Closing with unsaved edits asks
/// before discarding them.
#[component]
pub fn TaxonomyFormSheet(
    kind: TaxonomyKind,
    mode: FormMode,
    initial: Option<TaxonomyRow>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let client = use_api();
    let feedback = use_feedback();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut active = use_signal(|| true);
    let mut baseline = use_signal(TaxonomyForm::blank);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let initial_for_hydration = initial.clone();
    use_effect(move || {
        if !open {
            return;
        }
        let form = initial_for_hydration
            .as_ref()
            .map(TaxonomyForm::from)
            .unwrap_or_else(TaxonomyForm::blank);
        name.set(form.name.clone());
        description.set(form.description.clone().unwrap_or_default());
        active.set(form.active);
        field_errors.set(HashMap::new());
        baseline.set(form);
    });

    let current = move || TaxonomyForm {
        name: name().trim().to_string(),
        description: non_empty(&description()),
        active: active(),
    };

    let mut show_discard = use_signal(|| false);
    let mut try_close = move |_: ()| {
        if current() != baseline() {
            show_discard.set(true);
        } else {
            on_close.call(());
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
                    tracing::info!(kind = kind.singular(), ?id, "taxonomy entry {}", mode.verb());
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

    let title = match mode {
        FormMode::Create => format!("New {}", kind.singular().to_lowercase()),
        FormMode::Edit => format!("Edit {}", kind.singular().to_lowercase()),
    };

    rsx! {
        Sheet { open, on_close: try_close,
            SheetContent {
                SheetHeader {
                    title,
                    description: kind.description().to_string(),
                    on_close: try_close,
                }
                Form { onsubmit: handle_save,
                    div { class: "sheet-form",
                        Input {
                            label: "Name",
                            value: name(),
                            required: true,
                            error: field_errors.read().get("name").cloned(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Textarea {
                            label: "Description",
                            value: description(),
                            rows: 3,
                            error: field_errors.read().get("description").cloned(),
                            on_input: move |e: FormEvent| description.set(e.value()),
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
            description: "Your edits to this form have not been saved.",
            confirm_label: "Discard",
            cancel_label: "Keep editing",
            on_confirm: move |_| on_close.call(()),
        }
    }
}
