use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{
    AppErrorKind, EditorialDecision, Manuscript, ManuscriptStatus, Recommendation,
    ReviewSubmission, RoleCode, User,
};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    ConfirmDialog, DetailItem, DetailList, Form, FormSelect, PageHeader, PageTitle, SkeletonRows,
    Textarea,
};

use super::WorkflowActions;
use crate::components::{LoadError, ManuscriptStatusBadge};
use crate::feedback::use_feedback;
use crate::format_helpers::{format_date_opt, parse_id};
use crate::routes::Route;
use crate::session::{use_api, use_session};

/// Decisions an editor can record, with the button style for each.
const DECISIONS: [(ManuscriptStatus, &str, ButtonVariant); 3] = [
    (ManuscriptStatus::Accepted, "Accept", ButtonVariant::Primary),
    (ManuscriptStatus::RevisionRequested, "Request revision", ButtonVariant::Outline),
    (ManuscriptStatus::Rejected, "Reject", ButtonVariant::Destructive),
];

fn active_reviewers(users: Vec<User>) -> Vec<User> {
    users
        .into_iter()
        .filter(|u| u.active && u.role() == Some(RoleCode::Reviewer))
        .collect()
}

/// One manuscript with whichever workflow step the viewer may take next.
#[component]
pub fn ManuscriptDetailPage(id: i64) -> Element {
    let client = use_api();
    let session = use_session();
    let role = session.role();
    let user_id = session.user().map(|u| u.id);

    let detail_client = client.clone();
    let mut data = use_resource(move || {
        let client = detail_client.clone();
        async move { client.manuscript(id).await }
    });

    let storage = client.config().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manuscripts.css") }
        PageHeader {
            PageTitle { "Manuscript" }
            Link { to: Route::Manuscripts {},
                Button { variant: ButtonVariant::Ghost, "Back to manuscripts" }
            }
        }

        match &*data.read() {
            Some(Ok(m)) => {
                let actions = WorkflowActions::for_user(role, user_id, m);
                let file_url = m.file.as_deref().map(|path| storage.asset_url(path));
                rsx! {
                    div { class: "manuscript-layout",
                        Card { class: "manuscript-main",
                            CardHeader {
                                CardTitle { "{m.title}" }
                                CardDescription { ManuscriptStatusBadge { status: m.status } }
                            }
                            CardContent {
                                DetailList {
                                    DetailItem { label: "Journal", value: m.journal_title.clone() }
                                    DetailItem { label: "Author", value: m.author_name.clone() }
                                    DetailItem { label: "Reviewer", value: m.reviewer_name.clone() }
                                    DetailItem { label: "Submitted", value: Some(format_date_opt(m.created_at.as_deref())) }
                                    DetailItem { label: "Keywords", value: m.keywords.clone() }
                                    DetailItem { label: "File",
                                        match file_url {
                                            Some(url) => rsx! { a { href: url, target: "_blank", rel: "noopener", "Download" } },
                                            None => rsx! { span { class: "muted", "No file on record" } },
                                        }
                                    }
                                }
                                h4 { class: "manuscript-section", "Abstract" }
                                p { class: "manuscript-abstract", "{m.summary}" }
                                if let Some(comments) = m.review_comments.as_deref() {
                                    h4 { class: "manuscript-section", "Review comments" }
                                    p { class: "manuscript-abstract", "{comments}" }
                                }
                            }
                        }
                        div { class: "manuscript-side",
                            if actions.assign_reviewer {
                                AssignReviewerPanel { manuscript_id: m.id, on_done: move |_| data.restart() }
                            }
                            if actions.submit_review {
                                ReviewPanel { manuscript_id: m.id, on_done: move |_| data.restart() }
                            }
                            if actions.record_decision {
                                DecisionPanel { manuscript_id: m.id, on_done: move |_| data.restart() }
                            }
                            if !actions.any() {
                                WaitingNote { manuscript: m.clone() }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| data.restart() }
            },
            None => rsx! { SkeletonRows { count: 3 } },
        }
    }
}

#[component]
fn WaitingNote(manuscript: Manuscript) -> Element {
    let note = match manuscript.status {
        ManuscriptStatus::Submitted => "Waiting for an editor to assign a reviewer.",
        ManuscriptStatus::UnderReview => "With the reviewer.",
        ManuscriptStatus::Reviewed => "Review received. Waiting for the editor's decision.",
        ManuscriptStatus::RevisionRequested => "The editor has asked the author for a revision.",
        ManuscriptStatus::Accepted | ManuscriptStatus::Rejected => "A final decision has been recorded.",
        ManuscriptStatus::Unknown => "No action is needed from you right now.",
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Status" }
                CardDescription { "{note}" }
            }
        }
    }
}

/// Editor picks an active reviewer for a new submission.
#[component]
fn AssignReviewerPanel(manuscript_id: i64, on_done: EventHandler<()>) -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let mut reviewer = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let users_client = client.clone();
    let reviewers = use_resource(move || {
        let client = users_client.clone();
        async move { client.list_users().await.map(active_reviewers) }
    });

    let handle_assign = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let Some(reviewer_id) = parse_id(&reviewer()) else {
            error.set(Some("Choose a reviewer".to_string()));
            return;
        };
        let client = client.clone();
        spawn(async move {
            in_flight.set(true);
            error.set(None);
            match client.assign_reviewer(manuscript_id, reviewer_id).await {
                Ok(reply) => {
                    tracing::info!(manuscript_id, reviewer_id, "reviewer assigned");
                    feedback.success(reply.message_or("Reviewer assigned"));
                    on_done.call(());
                }
                Err(e) => feedback.error(&e),
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Assign a reviewer" }
                CardDescription { "The manuscript moves to review once assigned." }
            }
            Form { onsubmit: handle_assign,
                CardContent {
                    match &*reviewers.read() {
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "muted", "There are no active reviewers yet." }
                        },
                        Some(Ok(list)) => rsx! {
                            FormSelect {
                                label: "Reviewer",
                                value: reviewer(),
                                error: error(),
                                onchange: move |e: FormEvent| reviewer.set(e.value()),
                                option { value: "", "Choose a reviewer" }
                                for r in list.iter() {
                                    option {
                                        key: "{r.id}",
                                        value: "{r.id}",
                                        selected: reviewer() == r.id.to_string(),
                                        "{r.name}"
                                    }
                                }
                            }
                        },
                        Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                        None => rsx! { SkeletonRows { count: 1 } },
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        loading: in_flight(),
                        loading_label: "Assigning...",
                        "Assign"
                    }
                }
            }
        }
    }
}

/// Assigned reviewer sends a recommendation with comments.
#[component]
fn ReviewPanel(manuscript_id: i64, on_done: EventHandler<()>) -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let mut recommendation = use_signal(|| Recommendation::Revise);
    let mut comments = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut in_flight = use_signal(|| false);

    let handle_review = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let review = ReviewSubmission {
            recommendation: recommendation(),
            comments: comments().trim().to_string(),
        };
        let client = client.clone();
        spawn(async move {
            in_flight.set(true);
            field_errors.set(HashMap::new());
            match client.submit_review(manuscript_id, &review).await {
                Ok(reply) => {
                    tracing::info!(manuscript_id, recommendation = review.recommendation.as_str(), "review submitted");
                    feedback.success(reply.message_or("Review submitted"));
                    on_done.call(());
                }
                Err(e) if e.kind == AppErrorKind::ValidationError && !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => feedback.error(&e),
            }
            in_flight.set(false);
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Your review" }
                CardDescription { "The editor sees your recommendation and comments." }
            }
            Form { onsubmit: handle_review,
                CardContent {
                    FormSelect {
                        label: "Recommendation",
                        value: recommendation().as_str().to_string(),
                        error: field_errors.read().get("recommendation").cloned(),
                        onchange: move |e: FormEvent| {
                            if let Some(picked) = Recommendation::parse(&e.value()) {
                                recommendation.set(picked);
                            }
                        },
                        for r in Recommendation::ALL {
                            option { value: r.as_str(), selected: r == recommendation(), "{r.label()}" }
                        }
                    }
                    Textarea {
                        label: "Comments",
                        value: comments(),
                        rows: 8,
                        placeholder: "At least 20 characters.",
                        error: field_errors.read().get("comments").cloned(),
                        on_input: move |e: FormEvent| comments.set(e.value()),
                    }
                }
                CardFooter {
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        loading: in_flight(),
                        loading_label: "Sending...",
                        "Submit review"
                    }
                }
            }
        }
    }
}

/// Editor records the outcome of a reviewed manuscript.
#[component]
fn DecisionPanel(manuscript_id: i64, on_done: EventHandler<()>) -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let mut pending = use_signal(|| Option::<ManuscriptStatus>::None);
    let mut confirm_open = use_signal(|| false);
    let mut in_flight = use_signal(|| false);

    let record = move |_| {
        let Some(status) = pending() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            in_flight.set(true);
            let result = match EditorialDecision::new(status) {
                Ok(decision) => client.record_decision(manuscript_id, &decision).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(reply) => {
                    tracing::info!(manuscript_id, status = status.label(), "decision recorded");
                    feedback.success(reply.message_or("Decision recorded"));
                    on_done.call(());
                }
                Err(e) => feedback.error(&e),
            }
            pending.set(None);
            in_flight.set(false);
        });
    };

    let confirm_text = pending()
        .map(|s| format!("The manuscript will be marked \"{}\" and the author notified.", s.label()))
        .unwrap_or_default();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Decision" }
                CardDescription { "Read the review comments, then record the outcome." }
            }
            CardContent {
                div { class: "decision-row",
                    for (status, label, variant) in DECISIONS {
                        Button {
                            key: "{label}",
                            variant,
                            disabled: in_flight(),
                            onclick: move |_| {
                                pending.set(Some(status));
                                confirm_open.set(true);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
        ConfirmDialog {
            open: confirm_open,
            title: "Record this decision?",
            description: confirm_text,
            confirm_label: "Record decision",
            on_confirm: record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(id: i64, code: &str, active: bool) -> User {
        User {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.org"),
            user_type: code.into(),
            phone: None,
            affiliation: None,
            resume: None,
            image: None,
            active,
            created_at: None,
        }
    }

    #[test]
    fn only_active_reviewers_are_offered() {
        let users = vec![user(1, "0", true), user(2, "3", true), user(3, "3", false), user(4, "2", true)];

        let ids: Vec<i64> = active_reviewers(users).into_iter().map(|u| u.id).collect();

        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn every_offered_decision_is_valid() {
        for (status, _, _) in DECISIONS {
            assert!(EditorialDecision::new(status).is_ok(), "{status:?}");
        }
    }
}
