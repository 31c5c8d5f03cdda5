use dioxus::prelude::*;
use shared_types::{Category, Group, Journal};
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageActions,
    PageDescription, PageHeader, PageTitle, SkeletonRows, StatusBadge,
};

use super::form_sheet::JournalFormSheet;
use super::{category_name, group_name};
use crate::components::{FormMode, LoadError};
use crate::feedback::use_feedback;
use crate::format_helpers::{format_date_opt, or_placeholder};
use crate::session::use_api;

#[component]
pub fn JournalListPage() -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let storage = client.config().clone();

    let journals_client = client.clone();
    let mut journals = use_resource(move || {
        let client = journals_client.clone();
        async move { client.list_journals().await }
    });
    // Lookups for the table and the form's pickers; a failure only costs the names.
    let lookup_client = client.clone();
    let lookups = use_resource(move || {
        let client = lookup_client.clone();
        async move {
            let categories = client.list_categories().await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "categories unavailable");
                Vec::new()
            });
            let groups = client.list_groups().await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "groups unavailable");
                Vec::new()
            });
            (categories, groups)
        }
    });

    let mut sheet_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Journal>::None);
    let mut confirm_open = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Journal>::None);

    let confirm_delete = move |_| {
        let Some(journal) = pending_delete() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match client.delete_journal(journal.id).await {
                Ok(reply) => {
                    tracing::info!(id = journal.id, "journal deleted");
                    feedback.success(reply.message_or("Journal deleted"));
                    journals.restart();
                }
                Err(e) => feedback.error(&e),
            }
            pending_delete.set(None);
        });
    };

    let (categories, groups): (Vec<Category>, Vec<Group>) =
        lookups.read().clone().unwrap_or_default();
    let mode = if editing.read().is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let delete_description = pending_delete
        .read()
        .as_ref()
        .map(|j| format!("\"{}\" and its cover image will be removed from the catalogue.", j.title))
        .unwrap_or_default();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Journals" }
                PageDescription { "Everything listed in the public catalogue." }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        editing.set(None);
                        sheet_open.set(true);
                    },
                    "New journal"
                }
            }
        }

        match &*journals.read() {
            Some(Ok(list)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "" }
                        DataTableColumn { "Title" }
                        DataTableColumn { "ISSN" }
                        DataTableColumn { "Category" }
                        DataTableColumn { "Group" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Added" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if list.is_empty() {
                            DataTableEmpty { colspan: 8, message: "No journals yet." }
                        }
                        for journal in list.iter().cloned() {
                            DataTableRow { key: "{journal.id}",
                                DataTableCell {
                                    if let Some(path) = journal.image.as_deref() {
                                        img { class: "journal-thumb", src: storage.asset_url(path), alt: "" }
                                    }
                                }
                                DataTableCell { span { class: "cell-strong", "{journal.title}" } }
                                DataTableCell { "{or_placeholder(journal.issn.as_deref())}" }
                                DataTableCell { "{or_placeholder(category_name(&categories, journal.category_id))}" }
                                DataTableCell { "{or_placeholder(group_name(&groups, journal.group_id))}" }
                                DataTableCell { StatusBadge { active: journal.active } }
                                DataTableCell { "{format_date_opt(journal.created_at.as_deref())}" }
                                DataTableCell {
                                    DataTableActions {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let journal = journal.clone();
                                                move |_| {
                                                    editing.set(Some(journal.clone()));
                                                    sheet_open.set(true);
                                                }
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let journal = journal.clone();
                                                move |_| {
                                                    pending_delete.set(Some(journal.clone()));
                                                    confirm_open.set(true);
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| journals.restart() }
            },
            None => rsx! { SkeletonRows {} },
        }

        JournalFormSheet {
            mode,
            initial: editing(),
            categories,
            groups,
            open: sheet_open(),
            on_close: move |_| sheet_open.set(false),
            on_saved: move |_| journals.restart(),
        }

        ConfirmDialog {
            open: confirm_open,
            title: "Delete journal?",
            description: delete_description,
            on_confirm: confirm_delete,
        }
    }
}
