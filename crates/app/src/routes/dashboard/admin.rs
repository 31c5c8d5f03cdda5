use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdFolder, LdPackage, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, StatCard};

use crate::routes::Route;
use crate::session::use_api;

fn count<T>(result: Option<&Result<Vec<T>, AppError>>) -> Option<usize> {
    match result {
        Some(Ok(rows)) => Some(rows.len()),
        _ => None,
    }
}

/// Catalogue and account totals with shortcuts into each admin section.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api();

    let journals = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_journals().await }
        }
    });
    let categories = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_categories().await }
        }
    });
    let groups = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_groups().await }
        }
    });
    let users = use_resource(move || {
        let client = client.clone();
        async move { client.list_users().await }
    });

    let failed = [
        journals.read().as_ref().and_then(|r| r.as_ref().err().cloned()),
        categories.read().as_ref().and_then(|r| r.as_ref().err().cloned()),
        groups.read().as_ref().and_then(|r| r.as_ref().err().cloned()),
        users.read().as_ref().and_then(|r| r.as_ref().err().cloned()),
    ]
    .into_iter()
    .flatten()
    .next();

    rsx! {
        if let Some(err) = failed {
            p { class: "dashboard-warning", "Some totals are unavailable: {err.friendly_message()}" }
        }
        div { class: "stats-grid",
            StatCard {
                label: "Journals",
                value: count(journals.read().as_ref()),
                hint: "Published and draft",
                Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
            }
            StatCard {
                label: "Categories",
                value: count(categories.read().as_ref()),
                Icon::<LdFolder> { icon: LdFolder, width: 20, height: 20 }
            }
            StatCard {
                label: "Groups",
                value: count(groups.read().as_ref()),
                Icon::<LdPackage> { icon: LdPackage, width: 20, height: 20 }
            }
            StatCard {
                label: "Users",
                value: count(users.read().as_ref()),
                hint: "All roles",
                Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
            }
        }

        Card { class: "dashboard-shortcuts",
            CardHeader {
                CardTitle { "Shortcuts" }
            }
            CardContent {
                div { class: "shortcut-row",
                    Link { to: Route::ManageJournals {},
                        Button { variant: ButtonVariant::Outline, "Manage journals" }
                    }
                    Link { to: Route::Users {},
                        Button { variant: ButtonVariant::Outline, "Manage users" }
                    }
                    Link { to: Route::ManageBlogs {},
                        Button { variant: ButtonVariant::Outline, "Write a blog post" }
                    }
                    Link { to: Route::ManageNews {},
                        Button { variant: ButtonVariant::Outline, "Publish news" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_loaded_lists() {
        let loaded: Result<Vec<u8>, AppError> = Ok(vec![1, 2, 3]);
        let failed: Result<Vec<u8>, AppError> = Err(AppError::internal("boom"));

        assert_eq!(count(Some(&loaded)), Some(3));
        assert_eq!(count(Some(&failed)), None);
        assert_eq!(count::<u8>(None), None);
    }
}
