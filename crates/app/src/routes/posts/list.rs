use dioxus::prelude::*;
use shared_types::excerpt;
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageActions,
    PageDescription, PageHeader, PageTitle, SkeletonRows, StatusBadge,
};

use super::form_sheet::PostFormSheet;
use super::{PostKind, PostRow};
use crate::components::{FormMode, LoadError};
use crate::feedback::use_feedback;
use crate::format_helpers::{format_date_opt, or_placeholder};
use crate::session::use_api;

const PREVIEW_CHARS: usize = 90;

#[component]
pub fn PostListPage(kind: PostKind) -> Element {
    let client = use_api();
    let feedback = use_feedback();

    let list_client = client.clone();
    let mut data = use_resource(move || {
        let client = list_client.clone();
        async move { kind.list(&client).await }
    });

    let mut sheet_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<PostRow>::None);
    let mut confirm_open = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<PostRow>::None);

    let confirm_delete = move |_| {
        let Some(row) = pending_delete() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match kind.delete(&client, row.id).await {
                Ok(message) => {
                    tracing::info!(kind = kind.singular(), id = row.id, "post deleted");
                    feedback.success(message);
                    data.restart();
                }
                Err(e) => feedback.error(&e),
            }
            pending_delete.set(None);
        });
    };

    let mode = if editing.read().is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let colspan = if kind.has_author() { 6 } else { 5 };
    let delete_description = pending_delete
        .read()
        .as_ref()
        .map(|row| format!("\"{}\" will be taken off the site.", row.title))
        .unwrap_or_default();

    rsx! {
        PageHeader {
            div {
                PageTitle { "{kind.plural()}" }
                PageDescription { "{kind.description()}" }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        editing.set(None);
                        sheet_open.set(true);
                    },
                    "New {kind.singular().to_lowercase()}"
                }
            }
        }

        match &*data.read() {
            Some(Ok(rows)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Title" }
                        DataTableColumn { "Preview" }
                        if kind.has_author() {
                            DataTableColumn { "Author" }
                        }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Date" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if rows.is_empty() {
                            DataTableEmpty {
                                colspan,
                                message: format!("No {} yet.", kind.plural().to_lowercase()),
                            }
                        }
                        for row in rows.iter().cloned() {
                            DataTableRow { key: "{row.id}",
                                DataTableCell { span { class: "cell-strong", "{row.title}" } }
                                DataTableCell { span { class: "muted", "{excerpt(&row.body, PREVIEW_CHARS)}" } }
                                if kind.has_author() {
                                    DataTableCell { "{or_placeholder(row.author.as_deref())}" }
                                }
                                DataTableCell {
                                    StatusBadge {
                                        active: row.active,
                                        active_label: "Published",
                                        inactive_label: "Draft",
                                    }
                                }
                                DataTableCell { "{format_date_opt(row.created_at.as_deref())}" }
                                DataTableCell {
                                    DataTableActions {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let row = row.clone();
                                                move |_| {
                                                    editing.set(Some(row.clone()));
                                                    sheet_open.set(true);
                                                }
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let row = row.clone();
                                                move |_| {
                                                    pending_delete.set(Some(row.clone()));
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
                LoadError { error: e.clone(), on_retry: move |_| data.restart() }
            },
            None => rsx! { SkeletonRows {} },
        }

        PostFormSheet {
            kind,
            mode,
            initial: editing(),
            open: sheet_open(),
            on_close: move |_| sheet_open.set(false),
            on_saved: move |_| data.restart(),
        }

        ConfirmDialog {
            open: confirm_open,
            title: format!("Delete {}?", kind.singular().to_lowercase()),
            description: delete_description,
            on_confirm: confirm_delete,
        }
    }
}
