use dioxus::prelude::*;
use shared_types::Manuscript;
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow,
};

use super::ManuscriptStatusBadge;
use crate::format_helpers::{format_date_opt, or_placeholder};
use crate::routes::Route;

/// Manuscripts as a clickable table; rows open the workflow page.
#[component]
pub fn ManuscriptTable(
    manuscripts: Vec<Manuscript>,
    #[props(default = "No manuscripts yet.".to_string())] empty_message: String,
) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Title" }
                DataTableColumn { "Journal" }
                DataTableColumn { "Author" }
                DataTableColumn { "Reviewer" }
                DataTableColumn { "Status" }
                DataTableColumn { "Submitted" }
            }
            DataTableBody {
                if manuscripts.is_empty() {
                    DataTableEmpty { colspan: 6, message: empty_message }
                }
                for m in manuscripts {
                    DataTableRow {
                        key: "{m.id}",
                        onclick: move |_| {
                            navigator().push(Route::ManuscriptDetail { id: m.id });
                        },
                        DataTableCell { span { class: "cell-strong", "{m.title}" } }
                        DataTableCell { "{or_placeholder(m.journal_title.as_deref())}" }
                        DataTableCell { "{or_placeholder(m.author_name.as_deref())}" }
                        DataTableCell { "{or_placeholder(m.reviewer_name.as_deref())}" }
                        DataTableCell { ManuscriptStatusBadge { status: m.status } }
                        DataTableCell { "{format_date_opt(m.created_at.as_deref())}" }
                    }
                }
            }
        }
    }
}
