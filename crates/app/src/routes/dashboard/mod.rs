pub mod admin;
pub mod author;
pub mod editor;
pub mod reviewer;

use dioxus::prelude::*;
use shared_types::{dispatch_role, DashboardDispatch, DashboardKind};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle};

use crate::routes::Route;
use crate::session::use_session;

/// Role-adaptive dashboard: mounts exactly one variant for the session's role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    // The guard keeps visitors out, so an empty code only shows up mid sign-out.
    let code = session.role_code().unwrap_or_default();

    match dispatch_role(&code) {
        DashboardDispatch::Mount(kind) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
            PageHeader {
                PageTitle { "{kind.title()}" }
            }
            match kind {
                DashboardKind::Admin => rsx! { admin::AdminDashboard {} },
                DashboardKind::Editor => rsx! { editor::EditorDashboard {} },
                DashboardKind::Author => rsx! { author::AuthorDashboard {} },
                DashboardKind::Reviewer => rsx! { reviewer::ReviewerDashboard {} },
            }
        },
        DashboardDispatch::NoDashboard(role) => {
            tracing::debug!(%role, "role has no dashboard");
            rsx! {
                NoDashboard {
                    title: format!("Welcome, {}", role.label()),
                    message: "Your account type has no workspace yet. Browse the journals and news while you wait.",
                }
            }
        }
        DashboardDispatch::UnknownRole(code) => {
            tracing::warn!(%code, "unrecognised role code");
            rsx! {
                NoDashboard {
                    title: "Account type not recognised",
                    message: format!("The role code \"{code}\" is not one this site knows. Ask an administrator to check your account."),
                }
            }
        }
    }
}

#[component]
fn NoDashboard(title: String, message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-empty",
            Card {
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{message}" }
                }
                CardContent {
                    Link { to: Route::JournalCatalogue {}, "Browse journals" }
                }
            }
        }
    }
}
