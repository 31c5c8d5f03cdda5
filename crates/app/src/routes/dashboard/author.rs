use dioxus::prelude::*;
use shared_types::Manuscript;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageActions,
    SkeletonRows,
};

use crate::components::{LoadError, ManuscriptTable};
use crate::routes::Route;
use crate::session::{use_api, use_session};

/// The author's own submissions. Records without an author id are not
/// attributed to anyone and stay out.
pub(crate) fn own_manuscripts(manuscripts: &[Manuscript], author_id: i64) -> Vec<Manuscript> {
    manuscripts
        .iter()
        .filter(|m| m.author_id == Some(author_id))
        .cloned()
        .collect()
}

#[component]
pub fn AuthorDashboard() -> Element {
    let client = use_api();
    let session = use_session();
    let author_id = session.user().map(|u| u.id).unwrap_or_default();
    let mut manuscripts = use_resource(move || {
        let client = client.clone();
        async move { client.list_manuscripts().await }
    });

    rsx! {
        PageActions {
            Link { to: Route::SubmitManuscript {},
                Button { variant: ButtonVariant::Primary, "Submit manuscript" }
            }
        }
        Card {
            CardHeader {
                CardTitle { "Your submissions" }
                CardDescription { "Track each manuscript from submission to decision." }
            }
            CardContent {
                match &*manuscripts.read() {
                    Some(Ok(all)) => rsx! {
                        ManuscriptTable {
                            manuscripts: own_manuscripts(all, author_id),
                            empty_message: "You have not submitted anything yet.",
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
