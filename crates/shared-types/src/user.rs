use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::role::RoleCode;
use crate::upload::Upload;
use crate::wire;

/// An account as returned by the API, both for the signed-in profile and the
/// admin user list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Raw role code. Kept as received so an out-of-range code still reaches
    /// the dashboard dispatcher instead of failing the whole login.
    #[serde(deserialize_with = "wire::string_or_number")]
    pub user_type: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "status", deserialize_with = "wire::active_flag")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Parsed role, or `None` for a code outside the closed set.
    pub fn role(&self) -> Option<RoleCode> {
        RoleCode::parse(&self.user_type)
    }

    /// Display label for the role, falling back to the raw code.
    pub fn role_label(&self) -> String {
        self.role()
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| format!("Unknown ({})", self.user_type))
    }

    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Credentials for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// `data` of a successful login envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}

/// Public sign-up form, sent as multipart because reviewers attach a resume.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Name must be at least 2 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "password", message = "Passwords do not match"))
    )]
    pub password_confirmation: String,
    pub user_type: RoleCode,
    pub phone: Option<String>,
    pub affiliation: Option<String>,
    #[serde(skip)]
    pub resume: Option<Upload>,
}

impl RegisterRequest {
    /// Checks that depend on more than one field. Returns `(field, message)`.
    pub fn cross_field_problem(&self) -> Option<(&'static str, &'static str)> {
        if !self.user_type.self_registrable() {
            return Some(("user_type", "This role cannot be chosen at sign-up"));
        }
        if self.user_type.requires_resume() && self.resume.is_none() {
            return Some(("resume", "Reviewers must attach a resume"));
        }
        None
    }
}

/// Self-service profile edit for `POST /api/profile`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ProfileUpdate {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Name must be at least 2 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    pub phone: Option<String>,
    pub affiliation: Option<String>,
    #[serde(skip)]
    pub image: Option<Upload>,
}

impl ProfileUpdate {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            affiliation: user.affiliation.clone(),
            image: None,
        }
    }
}

/// Admin create/edit body for `/api/admin/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UserForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Name must be at least 2 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    pub user_type: RoleCode,
    /// Only sent when set; leaving it empty on edit keeps the old password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(
        rename = "status",
        serialize_with = "wire::flag_as_int",
        deserialize_with = "wire::active_flag"
    )]
    pub active: bool,
}

impl UserForm {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            user_type: RoleCode::Author,
            password: None,
            phone: None,
            affiliation: None,
            active: true,
        }
    }

    /// Prefill an edit form from a listed user. Unknown role codes fall back
    /// to author so the admin has to pick a real role before saving.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.role().unwrap_or(RoleCode::Author),
            password: None,
            phone: user.phone.clone(),
            affiliation: user.affiliation.clone(),
            active: user.active,
        }
    }
}
