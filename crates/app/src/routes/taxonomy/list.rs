use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageActions,
    PageDescription, PageHeader, PageTitle, SkeletonRows, StatusBadge,
};

use super::form_sheet::TaxonomyFormSheet;
use super::{TaxonomyKind, TaxonomyRow};
use crate::components::{FormMode, LoadError};
use crate::feedback::use_feedback;
use crate::format_helpers::or_placeholder;
use crate::session::use_api;

#[component]
pub fn TaxonomyListPage(kind: TaxonomyKind) -> Element {
    let client = use_api();
    let feedback = use_feedback();

    let list_client = client.clone();
    let mut data = use_resource(move || {
        let client = list_client.clone();
        async move { kind.list(&client).await }
    });

    let mut sheet_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<TaxonomyRow>::None);
    let mut confirm_open = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<TaxonomyRow>::None);

    let open_create = move |_| {
        editing.set(None);
        sheet_open.set(true);
    };

    let confirm_delete = move |_| {
        let Some(row) = pending_delete() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match kind.delete(&client, row.id).await {
                Ok(message) => {
                    tracing::info!(kind = kind.singular(), id = row.id, "taxonomy entry deleted");
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
    let colspan = if kind.has_slug() { 5 } else { 4 };
    let delete_title = format!("Delete {}?", kind.singular().to_lowercase());
    let delete_description = pending_delete
        .read()
        .as_ref()
        .map(|row| format!("\"{}\" will be removed. Journals filed under it keep their other details.", row.name))
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
                    onclick: open_create,
                    "New {kind.singular().to_lowercase()}"
                }
            }
        }

        match &*data.read() {
            Some(Ok(rows)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        if kind.has_slug() {
                            DataTableColumn { "Slug" }
                        }
                        DataTableColumn { "Description" }
                        DataTableColumn { "Status" }
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
                            TaxonomyTableRow {
                                key: "{row.id}",
                                kind,
                                row: row.clone(),
                                on_edit: move |row: TaxonomyRow| {
                                    editing.set(Some(row));
                                    sheet_open.set(true);
                                },
                                on_delete: move |row: TaxonomyRow| {
                                    pending_delete.set(Some(row));
                                    confirm_open.set(true);
                                },
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

        TaxonomyFormSheet {
            kind,
            mode,
            initial: editing(),
            open: sheet_open(),
            on_close: move |_| sheet_open.set(false),
            on_saved: move |_| data.restart(),
        }

        ConfirmDialog {
            open: confirm_open,
            title: delete_title,
            description: delete_description,
            on_confirm: confirm_delete,
        }
    }
}

#[component]
fn TaxonomyTableRow(
    kind: TaxonomyKind,
    row: TaxonomyRow,
    on_edit: EventHandler<TaxonomyRow>,
    on_delete: EventHandler<TaxonomyRow>,
) -> Element {
    let for_edit = row.clone();
    let for_delete = row.clone();

    rsx! {
        DataTableRow {
            DataTableCell { span { class: "cell-strong", "{row.name}" } }
            if kind.has_slug() {
                DataTableCell { "{or_placeholder(row.slug.as_deref())}" }
            }
            DataTableCell { "{or_placeholder(row.description.as_deref())}" }
            DataTableCell { StatusBadge { active: row.active } }
            DataTableCell {
                DataTableActions {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_edit.call(for_edit.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_delete.call(for_delete.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
