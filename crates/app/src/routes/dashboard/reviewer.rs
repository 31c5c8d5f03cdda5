use dioxus::prelude::*;
use shared_types::Manuscript;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, SkeletonRows};

use crate::components::{LoadError, ManuscriptTable};
use crate::session::use_api;

pub(crate) fn review_queue(manuscripts: &[Manuscript]) -> Vec<Manuscript> {
    manuscripts
        .iter()
        .filter(|m| m.status.awaits_review())
        .cloned()
        .collect()
}

/// Manuscripts assigned to this reviewer that still need a review.
#[component]
pub fn ReviewerDashboard() -> Element {
    let client = use_api();
    let mut manuscripts = use_resource(move || {
        let client = client.clone();
        async move { client.list_manuscripts().await }
    });

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Awaiting your review" }
                CardDescription { "Open a manuscript to read it and send your recommendation." }
            }
            CardContent {
                match &*manuscripts.read() {
                    Some(Ok(all)) => rsx! {
                        ManuscriptTable {
                            manuscripts: review_queue(all),
                            empty_message: "No reviews are waiting on you.",
                        }
                    },
                    Some(Err(e)) => rsx! {
                        LoadError { error: e.clone(), on_retry: move |_| manuscripts.restart() }
                    },
                    None => rsx! { SkeletonRows {} },
                }
            }
        }
    }
}
