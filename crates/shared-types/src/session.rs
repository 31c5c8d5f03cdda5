use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::role::RoleCode;
use crate::user::User;

#[derive(Debug, Clone, PartialEq)]
struct Credentials {
    token: String,
    user: User,
}

/// Who is signed in. Token and user are set and cleared together, so
/// "authenticated" always means "has a token".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn establish(token: impl Into<String>, user: User) -> Result<Self, AppError> {
        let mut session = Self::anonymous();
        session.sign_in(token, user)?;
        Ok(session)
    }

    /// Replaces whatever was there. An empty token is refused and leaves the
    /// session untouched.
    pub fn sign_in(&mut self, token: impl Into<String>, user: User) -> Result<(), AppError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::invalid_response(
                "The server did not return an access token.",
            ));
        }
        self.credentials = Some(Credentials { token, user });
        Ok(())
    }

    /// Idempotent.
    pub fn sign_out(&mut self) {
        self.credentials = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    /// Raw role code of the signed-in user.
    pub fn role_code(&self) -> Option<&str> {
        self.user().map(|u| u.user_type.as_str())
    }

    pub fn role(&self) -> Option<RoleCode> {
        self.user().and_then(User::role)
    }

    /// Swap in a refreshed profile. The role is fixed for the lifetime of a
    /// session, so a refresh reporting another role is refused.
    pub fn replace_user(&mut self, user: User) -> Result<(), AppError> {
        let credentials = self
            .credentials
            .as_mut()
            .ok_or_else(|| AppError::unauthorized("You are not signed in."))?;
        if credentials.user.user_type != user.user_type {
            return Err(AppError::forbidden(
                "Your role has changed. Please sign in again.",
            ));
        }
        credentials.user = user;
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_authenticated: self.is_authenticated(),
            token: self.token().map(str::to_string),
            user: self.user().cloned(),
        }
    }
}

/// Plain view of a session, e.g. for debug panels and logs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub user: Option<User>,
}
