use dioxus::prelude::*;
use shared_types::excerpt;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageDescription, PageHeader,
    PageTitle, SkeletonRows,
};

use crate::components::LoadError;
use crate::format_helpers::format_date_opt;
use crate::routes::Route;
use crate::session::use_api;

#[component]
pub fn BlogList() -> Element {
    let client = use_api();
    let assets = client.config().clone();

    let blogs = use_resource(move || {
        let client = client.clone();
        async move { client.public_blogs().await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site.css") }
        div { class: "site-container",
            PageHeader {
                div {
                    PageTitle { "Blog" }
                    PageDescription { "Notes from the editorial team and our community." }
                }
            }
            match &*blogs.read() {
                Some(Ok(posts)) => rsx! {
                    div { class: "card-grid",
                        for post in posts.iter().filter(|b| b.active).cloned() {
                            Link { key: "{post.id}", to: Route::BlogPost { id: post.id },
                                Card { class: "post-card",
                                    if let Some(image) = post.image.as_deref() {
                                        img { class: "post-card-image", src: "{assets.asset_url(image)}", alt: "" }
                                    }
                                    CardHeader {
                                        CardTitle { "{post.title}" }
                                        CardDescription {
                                            "{format_date_opt(post.created_at.as_deref())}"
                                            if let Some(author) = post.author.as_deref() {
                                                " \u{b7} {author}"
                                            }
                                        }
                                    }
                                    CardContent {
                                        p { "{excerpt(&post.body, 180)}" }
                                    }
                                }
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

#[component]
pub fn BlogPost(id: i64) -> Element {
    let client = use_api();
    let assets = client.config().clone();

    let blog = use_resource(move || {
        let client = client.clone();
        async move { client.public_blog(id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site.css") }
        article { class: "site-container post",
            Link { to: Route::BlogList {}, class: "back-link", "\u{2190} All posts" }
            match &*blog.read() {
                Some(Ok(post)) => rsx! {
                    h1 { class: "post-title", "{post.title}" }
                    p { class: "post-meta",
                        "{format_date_opt(post.created_at.as_deref())}"
                        if let Some(author) = post.author.as_deref() {
                            " \u{b7} {author}"
                        }
                    }
                    if let Some(image) = post.image.as_deref() {
                        img { class: "post-image", src: "{assets.asset_url(image)}", alt: "" }
                    }
                    div { class: "prose", dangerous_inner_html: "{post.body}" }
                },
                Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
                None => rsx! { SkeletonRows { count: 6 } },
            }
        }
    }
}
