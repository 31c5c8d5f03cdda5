use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppError, LoginResponse, RoleCode, Session, User};

/// The signed-in session, provided once at the app root.
///
/// Only explicit sign-in and sign-out change it; views read it during render,
/// which is what lets the route guard react to a logout immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub session: Signal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::anonymous()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token().map(str::to_string)
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn role(&self) -> Option<RoleCode> {
        self.session.read().role()
    }

    pub fn role_code(&self) -> Option<String> {
        self.session.read().role_code().map(str::to_string)
    }

    pub fn sign_in(&mut self, response: LoginResponse) -> Result<(), AppError> {
        let next = Session::establish(response.token, response.user)?;
        if let Some(user) = next.user() {
            tracing::info!(user_id = user.id, role = %user.user_type, "session established");
        }
        self.session.set(next);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if self.is_authenticated() {
            tracing::info!("session cleared");
        }
        self.session.write().sign_out();
    }

    /// Swap in a freshly fetched profile. A changed role is refused and the
    /// session stays as it was.
    pub fn replace_user(&mut self, user: User) -> Result<(), AppError> {
        let mut next = self.session.read().clone();
        next.replace_user(user)?;
        self.session.set(next);
        Ok(())
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// API client carrying the current session's bearer token.
pub fn use_api() -> ApiClient {
    let base = use_context::<ApiClient>();
    let session = use_session();
    base.with_token(session.token())
}

/// Which sidebar entries a role gets.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SidebarVisibility {
    pub taxonomy: bool,
    pub journals: bool,
    pub content: bool,
    pub users: bool,
    pub manuscripts: bool,
}

impl SidebarVisibility {
    pub fn for_role(role: Option<RoleCode>) -> Self {
        match role {
            Some(RoleCode::Admin) => Self {
                taxonomy: true,
                journals: true,
                content: true,
                users: true,
                manuscripts: true,
            },
            Some(RoleCode::Editor) => Self {
                journals: true,
                manuscripts: true,
                ..Self::default()
            },
            Some(RoleCode::Author) | Some(RoleCode::Reviewer) => Self {
                manuscripts: true,
                ..Self::default()
            },
            Some(RoleCode::Subscriber) | Some(RoleCode::Publisher) | None => Self::default(),
        }
    }
}

pub fn use_sidebar_visibility() -> SidebarVisibility {
    SidebarVisibility::for_role(use_session().role())
}
