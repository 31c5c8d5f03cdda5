use dioxus::prelude::*;
use shared_types::{Manuscript, ManuscriptStatus, RoleCode};
use shared_ui::{
    Button, ButtonVariant, FormSelect, PageActions, PageDescription, PageHeader, PageTitle,
    SkeletonRows,
};

use crate::components::{LoadError, ManuscriptTable};
use crate::routes::Route;
use crate::session::{use_api, use_session};

const STATUS_FILTERS: [ManuscriptStatus; 6] = [
    ManuscriptStatus::Submitted,
    ManuscriptStatus::UnderReview,
    ManuscriptStatus::Reviewed,
    ManuscriptStatus::RevisionRequested,
    ManuscriptStatus::Accepted,
    ManuscriptStatus::Rejected,
];

fn filter_by_status(manuscripts: &[Manuscript], status: Option<ManuscriptStatus>) -> Vec<Manuscript> {
    manuscripts
        .iter()
        .filter(|m| status.map_or(true, |wanted| wanted == m.status))
        .cloned()
        .collect()
}

/// Every manuscript the caller can see; the API scopes the list by role.
#[component]
pub fn ManuscriptListPage() -> Element {
    let client = use_api();
    let session = use_session();
    let can_submit = session.role() == Some(RoleCode::Author);
    let mut status = use_signal(|| Option::<ManuscriptStatus>::None);

    let mut data = use_resource(move || {
        let client = client.clone();
        async move { client.list_manuscripts().await }
    });

    let selected = status()
        .and_then(|s| STATUS_FILTERS.iter().position(|f| *f == s))
        .map(|i| i.to_string())
        .unwrap_or_default();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Manuscripts" }
                PageDescription { "Submissions moving through review." }
            }
            PageActions {
                FormSelect {
                    value: selected,
                    onchange: move |e: FormEvent| {
                        let picked = e.value().parse::<usize>().ok().and_then(|i| STATUS_FILTERS.get(i).copied());
                        status.set(picked);
                    },
                    option { value: "", "All statuses" }
                    for (i, s) in STATUS_FILTERS.iter().enumerate() {
                        option { value: "{i}", selected: status() == Some(*s), "{s.label()}" }
                    }
                }
                if can_submit {
                    Link { to: Route::SubmitManuscript {},
                        Button { variant: ButtonVariant::Primary, "Submit manuscript" }
                    }
                }
            }
        }

        match &*data.read() {
            Some(Ok(all)) => rsx! {
                ManuscriptTable {
                    manuscripts: filter_by_status(all, status()),
                    empty_message: "No manuscripts match.",
                }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| data.restart() }
            },
            None => rsx! { SkeletonRows {} },
        }
    }
}
