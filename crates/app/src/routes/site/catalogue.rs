use dioxus::prelude::*;
use shared_types::{excerpt, Journal};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, DetailItem, DetailList, Input,
    PageDescription, PageHeader, PageTitle, SkeletonRows,
};

use crate::components::LoadError;
use crate::format_helpers::format_date_opt;
use crate::routes::Route;
use crate::session::use_api;

fn matches_query(journal: &Journal, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    journal.title.to_lowercase().contains(&query)
        || journal
            .issn
            .as_deref()
            .is_some_and(|issn| issn.to_lowercase().contains(&query))
}

/// Public list of active journals with a title/ISSN filter.
#[component]
pub fn JournalCatalogue() -> Element {
    let client = use_api();
    let mut query = use_signal(String::new);

    let journals = use_resource(move || {
        let client = client.clone();
        async move { client.public_journals().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site.css") }
        div { class: "site-container",
            PageHeader {
                div {
                    PageTitle { "Journals" }
                    PageDescription { "Every journal currently accepting submissions." }
                }
            }
            Input {
                value: query(),
                placeholder: "Filter by title or ISSN",
                on_input: move |e: FormEvent| query.set(e.value()),
            }

            match &*journals.read() {
                Some(Ok(list)) => {
                    let q = query();
                    let shown: Vec<Journal> = list
                        .iter()
                        .filter(|j| j.active && matches_query(j, &q))
                        .cloned()
                        .collect();
                    rsx! {
                        if shown.is_empty() {
                            p { class: "muted", "No journals match your filter." }
                        }
                        div { class: "card-grid",
                            for journal in shown {
                                Link { key: "{journal.id}", to: Route::JournalPage { id: journal.id },
                                    Card { class: "journal-card",
                                        CardHeader {
                                            CardTitle { "{journal.title}" }
                                            if let Some(issn) = journal.issn.as_deref() {
                                                CardDescription { "ISSN {issn}" }
                                            }
                                        }
                                        CardContent {
                                            p { "{excerpt(journal.description.as_deref().unwrap_or_default(), 160)}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                None => rsx! { SkeletonRows {} },
            }
        }
    }
}

#[component]
pub fn JournalPage(id: i64) -> Element {
    let client = use_api();
    let assets = client.config().clone();

    let journal = use_resource(move || {
        let client = client.clone();
        async move { client.public_journal(id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site.css") }
        div { class: "site-container",
            Link { to: Route::JournalCatalogue {}, class: "back-link", "\u{2190} All journals" }
            match &*journal.read() {
                Some(Ok(j)) => {
                    let cover = j.image.as_deref().map(|path| assets.asset_url(path));
                    rsx! {
                        PageHeader {
                            PageTitle { "{j.title}" }
                        }
                        div { class: "journal-detail",
                            if let Some(src) = cover {
                                img { class: "journal-cover", src: "{src}", alt: "{j.title} cover" }
                            }
                            Card {
                                CardContent {
                                    DetailList {
                                        DetailItem { label: "ISSN", value: j.issn.clone() }
                                        DetailItem { label: "Published since", value: Some(format_date_opt(j.created_at.as_deref())) }
                                    }
                                    if let Some(description) = j.description.as_deref() {
                                        div { class: "prose", dangerous_inner_html: "{description}" }
                                    }
                                }
                            }
                        }
                        p { class: "muted",
                            "Want to publish here? "
                            Link { to: Route::SignUp {}, "Create an author account" }
                            " and submit from your dashboard."
                        }
                    }
                }
                Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                None => rsx! { SkeletonRows { count: 4 } },
            }
        }
    }
}
