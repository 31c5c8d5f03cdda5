use dioxus::prelude::*;
use shared_types::excerpt;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, SkeletonRows,
};

use crate::components::LoadError;
use crate::format_helpers::format_date_opt;
use crate::routes::Route;
use crate::session::use_api;

const PREVIEW_COUNT: usize = 3;

#[component]
pub fn Landing() -> Element {
    let client = use_api();

    let journals = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.public_journals().await }
        }
    });
    let news = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.public_news().await }
        }
    });
    let blogs = use_resource(move || {
        let client = client.clone();
        async move { client.public_blogs().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site.css") }

        section { class: "hero",
            h1 { "Peer-reviewed journals, managed in one place" }
            p {
                "Browse our journals, follow editorial news, or submit your manuscript "
                "and track it through review."
            }
            div { class: "hero-actions",
                Link { to: Route::JournalCatalogue {},
                    Button { variant: ButtonVariant::Primary, "Browse journals" }
                }
                Link { to: Route::SignUp {},
                    Button { variant: ButtonVariant::Outline, "Become an author or reviewer" }
                }
            }
        }

        section { class: "site-section",
            div { class: "site-section-header",
                h2 { "Journals" }
                Link { to: Route::JournalCatalogue {}, "View all" }
            }
            match &*journals.read() {
                Some(Ok(list)) => rsx! {
                    div { class: "card-grid",
                        for journal in list.iter().filter(|j| j.active).take(PREVIEW_COUNT).cloned() {
                            Link { key: "{journal.id}", to: Route::JournalPage { id: journal.id },
                                Card { class: "journal-card",
                                    CardHeader {
                                        CardTitle { "{journal.title}" }
                                        if let Some(issn) = journal.issn.as_deref() {
                                            CardDescription { "ISSN {issn}" }
                                        }
                                    }
                                    CardContent {
                                        p { "{excerpt(journal.description.as_deref().unwrap_or_default(), 140)}" }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                None => rsx! { SkeletonRows { count: 3 } },
            }
        }

        section { class: "site-section site-columns",
            div {
                div { class: "site-section-header",
                    h2 { "News" }
                    Link { to: Route::NewsFeed {}, "All news" }
                }
                match &*news.read() {
                    Some(Ok(items)) => rsx! {
                        ul { class: "headline-list",
                            for item in items.iter().filter(|n| n.active).take(PREVIEW_COUNT).cloned() {
                                li { key: "{item.id}",
                                    span { class: "headline-date", "{format_date_opt(item.created_at.as_deref())}" }
                                    span { class: "headline-title", "{item.title}" }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                    None => rsx! { SkeletonRows { count: 3 } },
                }
            }
            div {
                div { class: "site-section-header",
                    h2 { "From the blog" }
                    Link { to: Route::BlogList {}, "All posts" }
                }
                match &*blogs.read() {
                    Some(Ok(posts)) => rsx! {
                        ul { class: "headline-list",
                            for post in posts.iter().filter(|b| b.active).take(PREVIEW_COUNT).cloned() {
                                li { key: "{post.id}",
                                    Link { to: Route::BlogPost { id: post.id }, class: "headline-title", "{post.title}" }
                                    span { class: "headline-excerpt", "{excerpt(&post.body, 100)}" }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                    None => rsx! { SkeletonRows { count: 3 } },
                }
            }
        }
    }
}
