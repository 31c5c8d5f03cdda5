use dioxus::prelude::*;
use shared_types::User;
use shared_ui::{
    Button, ButtonVariant, ConfirmDialog, DataTable, DataTableActions, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Input,
    PageActions, PageDescription, PageHeader, PageTitle, SkeletonRows, StatusBadge,
};

use super::form_sheet::UserFormSheet;
use crate::components::{FormMode, LoadError, RoleBadge};
use crate::feedback::use_feedback;
use crate::format_helpers::{format_date_opt, or_placeholder};
use crate::session::{use_api, use_session};

fn matches_query(user: &User, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || user.name.to_lowercase().contains(&query)
        || user.email.to_lowercase().contains(&query)
        || user.role_label().to_lowercase().contains(&query)
}

#[component]
pub fn UserListPage() -> Element {
    let client = use_api();
    let feedback = use_feedback();
    let session = use_session();
    let own_id = session.user().map(|u| u.id);

    let list_client = client.clone();
    let mut data = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_users().await }
    });

    let mut query = use_signal(String::new);
    let mut sheet_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut confirm_open = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<User>::None);

    let confirm_delete = move |_| {
        let Some(user) = pending_delete() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match client.delete_user(user.id).await {
                Ok(reply) => {
                    tracing::info!(id = user.id, "user deleted");
                    feedback.success(reply.message_or("User deleted"));
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
    let delete_description = pending_delete
        .read()
        .as_ref()
        .map(|u| format!("{} <{}> will lose access to the site.", u.name, u.email))
        .unwrap_or_default();

    rsx! {
        PageHeader {
            div {
                PageTitle { "Users" }
                PageDescription { "Every account, including editors and administrators." }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        editing.set(None);
                        sheet_open.set(true);
                    },
                    "New user"
                }
            }
        }

        Input {
            value: query(),
            placeholder: "Filter by name, email or role",
            on_input: move |e: FormEvent| query.set(e.value()),
        }

        match &*data.read() {
            Some(Ok(users)) => {
                let q = query();
                let shown: Vec<User> = users.iter().filter(|u| matches_query(u, &q)).cloned().collect();
                rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Name" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Role" }
                            DataTableColumn { "Affiliation" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Joined" }
                            DataTableColumn { "" }
                        }
                        DataTableBody {
                            if shown.is_empty() {
                                DataTableEmpty { colspan: 7, message: "No users match." }
                            }
                            for user in shown {
                                DataTableRow { key: "{user.id}",
                                    DataTableCell { span { class: "cell-strong", "{user.name}" } }
                                    DataTableCell { "{user.email}" }
                                    DataTableCell { RoleBadge { code: user.user_type.clone() } }
                                    DataTableCell { "{or_placeholder(user.affiliation.as_deref())}" }
                                    DataTableCell { StatusBadge { active: user.active } }
                                    DataTableCell { "{format_date_opt(user.created_at.as_deref())}" }
                                    DataTableCell {
                                        DataTableActions {
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: {
                                                    let user = user.clone();
                                                    move |_| {
                                                        editing.set(Some(user.clone()));
                                                        sheet_open.set(true);
                                                    }
                                                },
                                                "Edit"
                                            }
                                            if Some(user.id) != own_id {
                                                Button {
                                                    variant: ButtonVariant::Destructive,
                                                    onclick: {
                                                        let user = user.clone();
                                                        move |_| {
                                                            pending_delete.set(Some(user.clone()));
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
                    }
                }
            }
            Some(Err(e)) => rsx! {
                LoadError { error: e.clone(), on_retry: move |_| data.restart() }
            },
            None => rsx! { SkeletonRows {} },
        }

        UserFormSheet {
            mode,
            initial: editing(),
            open: sheet_open(),
            on_close: move |_| sheet_open.set(false),
            on_saved: move |_| data.restart(),
        }

        ConfirmDialog {
            open: confirm_open,
            title: "Delete user?",
            description: delete_description,
            on_confirm: confirm_delete,
        }
    }
}
