use dioxus::prelude::*;
use shared_types::Manuscript;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, SkeletonRows};

use crate::components::{LoadError, ManuscriptTable};
use crate::session::use_api;

pub(crate) fn editor_queue(manuscripts: &[Manuscript]) -> Vec<Manuscript> {
    manuscripts
        .iter()
        .filter(|m| m.status.awaits_editor())
        .cloned()
        .collect()
}

/// Manuscripts waiting on an editor: new ones needing a reviewer, and
/// reviewed ones needing a decision.
#[component]
pub fn EditorDashboard() -> Element {
    let client = use_api();
    let mut manuscripts = use_resource(move || {
        let client = client.clone();
        async move { client.list_manuscripts().await }
    });

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Needs your attention" }
                CardDescription { "Assign a reviewer to new submissions and decide on reviewed ones." }
            }
            CardContent {
                match &*manuscripts.read() {
                    Some(Ok(all)) => rsx! {
                        ManuscriptTable {
                            manuscripts: editor_queue(all),
                            empty_message: "Nothing is waiting on the editor.",
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
