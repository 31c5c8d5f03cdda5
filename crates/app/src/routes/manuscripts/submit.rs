use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, ManuscriptSubmission, Upload};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FileInput, Form, FormSelect, Input, PageHeader, PageTitle, Textarea,
};

use crate::feedback::use_feedback;
use crate::format_helpers::{non_empty, parse_id};
use crate::routes::Route;
use crate::session::use_api;
use crate::uploads::first_upload;

/// Fields the API cannot check because they never reach it.
fn missing_parts(journal_id: Option<i64>, file: Option<&Upload>) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if journal_id.is_none() {
        errors.insert("journal_id".to_string(), "Choose a journal".to_string());
    }
    if file.is_none() {
        errors.insert("file".to_string(), "Attach the manuscript file".to_string());
    }
    errors
}

/// Author submission form: journal, title, abstract, keywords and the file.
#[component]
pub fn SubmitManuscriptPage() -> Element {
    let client = use_api();
    let feedback = use_feedback();

    let journals_client = client.clone();
    let journals = use_resource(move || {
        let client = journals_client.clone();
        async move { client.public_journals().await }
    });

    let mut journal_id = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut summary = use_signal(String::new);
    let mut keywords = use_signal(String::new);
    let mut file = use_signal(|| Option::<Upload>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut in_flight = use_signal(|| false);

    let on_file = move |evt: FormEvent| async move {
        match first_upload(&evt).await {
            Ok(picked) => {
                field_errors.write().remove("file");
                file.set(picked);
            }
            Err(message) => {
                field_errors.write().insert("file".to_string(), message);
            }
        }
    };

    let handle_submit = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let chosen_journal = parse_id(&journal_id());
        let missing = missing_parts(chosen_journal, file.read().as_ref());
        let (Some(journal), Some(upload)) = (chosen_journal, file()) else {
            field_errors.set(missing);
            return;
        };
        let submission = ManuscriptSubmission {
            journal_id: journal,
            title: title().trim().to_string(),
            summary: summary().trim().to_string(),
            keywords: non_empty(&keywords()),
            file: upload,
        };
        let client = client.clone();
        spawn(async move {
            in_flight.set(true);
            field_errors.set(HashMap::new());
            match client.submit_manuscript(&submission).await {
                Ok(reply) => {
                    feedback.success(reply.message_or("Manuscript submitted"));
                    match reply.data {
                        Some(m) => {
                            tracing::info!(id = m.id, journal_id = journal, "manuscript submitted");
                            navigator().push(Route::ManuscriptDetail { id: m.id });
                        }
                        None => {
                            navigator().push(Route::Manuscripts {});
                        }
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

    let file_name = file.read().as_ref().map(|f| f.file_name.clone());
    let abstract_len = summary.read().trim().chars().count();
    // Local validation names the field `summary`; the API calls it `abstract`.
    let abstract_error = {
        let errors = field_errors.read();
        errors.get("summary").or_else(|| errors.get("abstract")).cloned()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manuscripts.css") }
        PageHeader {
            PageTitle { "Submit a manuscript" }
        }
        Card { class: "manuscript-form",
            CardHeader {
                CardTitle { "Manuscript details" }
                CardDescription { "The editor assigns a reviewer once your submission arrives." }
            }
            Form { onsubmit: handle_submit,
                CardContent {
                    FormSelect {
                        label: "Journal",
                        value: journal_id(),
                        error: field_errors.read().get("journal_id").cloned(),
                        onchange: move |e: FormEvent| journal_id.set(e.value()),
                        option { value: "", "Choose a journal" }
                        match &*journals.read() {
                            Some(Ok(list)) => rsx! {
                                for j in list.iter().filter(|j| j.active) {
                                    option {
                                        key: "{j.id}",
                                        value: "{j.id}",
                                        selected: journal_id() == j.id.to_string(),
                                        "{j.title}"
                                    }
                                }
                            },
                            Some(Err(_)) => rsx! { option { disabled: true, "Journals could not be loaded" } },
                            None => rsx! { option { disabled: true, "Loading journals..." } },
                        }
                    }
                    Input {
                        label: "Title",
                        value: title(),
                        required: true,
                        error: field_errors.read().get("title").cloned(),
                        on_input: move |e: FormEvent| title.set(e.value()),
                    }
                    Textarea {
                        label: "Abstract",
                        value: summary(),
                        rows: 8,
                        placeholder: "At least 50 characters.",
                        error: abstract_error,
                        on_input: move |e: FormEvent| summary.set(e.value()),
                    }
                    p { class: "muted field-counter", "{abstract_len} characters" }
                    Input {
                        label: "Keywords",
                        value: keywords(),
                        placeholder: "Comma separated",
                        error: field_errors.read().get("keywords").cloned(),
                        on_input: move |e: FormEvent| keywords.set(e.value()),
                    }
                    FileInput {
                        label: "Manuscript file",
                        accept: ".pdf,.doc,.docx",
                        file_name,
                        hint: "PDF or Word, up to 10 MB.",
                        error: field_errors.read().get("file").cloned(),
                        on_change: on_file,
                    }
                }
                CardFooter {
                    Link { to: Route::Manuscripts {},
                        Button { variant: ButtonVariant::Outline, "Cancel" }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        loading: in_flight(),
                        loading_label: "Uploading...",
                        "Submit"
                    }
                }
            }
        }
    }
}
