use dioxus::prelude::*;
use shared_ui::{PageDescription, PageHeader, PageTitle, SkeletonRows};

use crate::components::LoadError;
use crate::format_helpers::format_date_opt;
use crate::session::use_api;

/// News items are short, so the feed shows them in full.
#[component]
pub fn NewsFeed() -> Element {
    let client = use_api();
    let assets = client.config().clone();

    let news = use_resource(move || {
        let client = client.clone();
        async move { client.public_news().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site.css") }
        div { class: "site-container",
            PageHeader {
                div {
                    PageTitle { "News" }
                    PageDescription { "Calls for papers, special issues and announcements." }
                }
            }
            match &*news.read() {
                Some(Ok(items)) => rsx! {
                    if items.iter().all(|n| !n.active) {
                        p { class: "muted", "No announcements right now." }
                    }
                    div { class: "news-feed",
                        for item in items.iter().filter(|n| n.active).cloned() {
                            article { key: "{item.id}", class: "news-item",
                                span { class: "news-date", "{format_date_opt(item.created_at.as_deref())}" }
                                h2 { class: "news-title", "{item.title}" }
                                if let Some(image) = item.image.as_deref() {
                                    img { class: "news-image", src: "{assets.asset_url(image)}", alt: "" }
                                }
                                div { class: "prose", dangerous_inner_html: "{item.body}" }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                None => rsx! { SkeletonRows {} },
            }
        }
    }
}
