use dioxus::prelude::*;
use shared_types::{ManuscriptStatus, RoleCode};
use shared_ui::{Badge, BadgeVariant};

fn status_variant(status: ManuscriptStatus) -> BadgeVariant {
    match status {
        ManuscriptStatus::Submitted => BadgeVariant::Primary,
        ManuscriptStatus::UnderReview | ManuscriptStatus::Reviewed => BadgeVariant::Warning,
        ManuscriptStatus::RevisionRequested => BadgeVariant::Outline,
        ManuscriptStatus::Accepted => BadgeVariant::Success,
        ManuscriptStatus::Rejected => BadgeVariant::Destructive,
        ManuscriptStatus::Unknown => BadgeVariant::Secondary,
    }
}

#[component]
pub fn ManuscriptStatusBadge(status: ManuscriptStatus) -> Element {
    rsx! {
        Badge { variant: status_variant(status), "{status.label()}" }
    }
}

/// Role label for the users table. Codes outside the role set show the raw code.
#[component]
pub fn RoleBadge(code: String) -> Element {
    let (variant, label) = match RoleCode::parse(&code) {
        Some(RoleCode::Admin) => (BadgeVariant::Destructive, RoleCode::Admin.label().to_string()),
        Some(RoleCode::Editor) => (BadgeVariant::Primary, RoleCode::Editor.label().to_string()),
        Some(role) => (BadgeVariant::Secondary, role.label().to_string()),
        None => (BadgeVariant::Outline, format!("Unknown ({code})")),
    };

    rsx! {
        Badge { variant, "{label}" }
    }
}
