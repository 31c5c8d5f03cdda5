use crate::role::RoleCode;

/// Dashboard variants that exist in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardKind {
    Admin,
    Editor,
    Author,
    Reviewer,
}

impl DashboardKind {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Admin => "Administration",
            DashboardKind::Editor => "Editorial Desk",
            DashboardKind::Author => "My Submissions",
            DashboardKind::Reviewer => "Review Queue",
        }
    }
}

/// What the dashboard root should mount for a session's role code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardDispatch {
    /// Exactly one dashboard variant.
    Mount(DashboardKind),
    /// A known role that has no dashboard of its own.
    NoDashboard(RoleCode),
    /// A code outside the closed role set.
    UnknownRole(String),
}

impl DashboardDispatch {
    pub fn kind(&self) -> Option<DashboardKind> {
        match self {
            DashboardDispatch::Mount(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Select the dashboard for a raw `user_type` code. Performs no I/O.
pub fn dispatch_role(code: &str) -> DashboardDispatch {
    match RoleCode::parse(code) {
        Some(role) => dispatch_known(role),
        None => DashboardDispatch::UnknownRole(code.trim().to_string()),
    }
}

fn dispatch_known(role: RoleCode) -> DashboardDispatch {
    match role {
        RoleCode::Admin => DashboardDispatch::Mount(DashboardKind::Admin),
        RoleCode::Editor => DashboardDispatch::Mount(DashboardKind::Editor),
        RoleCode::Author => DashboardDispatch::Mount(DashboardKind::Author),
        RoleCode::Reviewer => DashboardDispatch::Mount(DashboardKind::Reviewer),
        RoleCode::Subscriber | RoleCode::Publisher => DashboardDispatch::NoDashboard(role),
    }
}
