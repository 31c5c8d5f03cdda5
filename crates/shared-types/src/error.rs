use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Message shown when a failure carries nothing readable.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    Network,
    InvalidResponse,
    InternalError,
}

impl AppErrorKind {
    /// Map an HTTP status of a failed response to a kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            400..=499 => AppErrorKind::BadRequest,
            _ => AppErrorKind::InternalError,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InvalidResponse => write!(f, "InvalidResponse"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error for every failed operation in the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InvalidResponse, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Build an error from a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = AppErrorKind::from_status(status);
        match serde_json::from_str::<Value>(body) {
            Ok(json) => Self::from_body(kind, &json),
            Err(_) => Self::new(kind, GENERIC_ERROR_MESSAGE),
        }
    }

    /// Build an error from a 2xx body whose envelope reported failure.
    ///
    /// Field errors make it a `ValidationError` so forms can place them;
    /// anything else is a `BadRequest`.
    pub fn from_failed_envelope(json: &Value) -> Self {
        let mut err = Self::from_body(AppErrorKind::BadRequest, json);
        if !err.field_errors.is_empty() {
            err.kind = AppErrorKind::ValidationError;
        }
        err
    }

    /// The message comes from the body's `message`, then `error`, then the
    /// first field error, then [`GENERIC_ERROR_MESSAGE`]. A Laravel-style
    /// `errors` object (`{"field": ["msg", ...]}`) fills `field_errors`.
    fn from_body(kind: AppErrorKind, json: &Value) -> Self {
        let field_errors = extract_field_errors(json);
        let message = non_empty_str(&json["message"])
            .or_else(|| non_empty_str(&json["error"]))
            .or_else(|| first_field_error(json))
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        Self {
            kind,
            message,
            field_errors,
        }
    }

    /// Message suitable for a toast. Never empty.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }

    /// True when the API rejected the session itself (expired or revoked token).
    pub fn is_auth_failure(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Field error for a form input, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn field_message(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(non_empty_str),
        other => non_empty_str(other),
    }
}

fn extract_field_errors(json: &Value) -> HashMap<String, String> {
    json["errors"]
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|(field, value)| field_message(value).map(|m| (field.clone(), m)))
                .collect()
        })
        .unwrap_or_default()
}

// serde_json's default map is ordered by key, so "first" is deterministic.
fn first_field_error(json: &Value) -> Option<String> {
    json["errors"]
        .as_object()
        .and_then(|fields| fields.values().find_map(field_message))
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please correct the highlighted fields.", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_mapping() {
        assert_eq!(AppErrorKind::from_status(401), AppErrorKind::Unauthorized);
        assert_eq!(AppErrorKind::from_status(403), AppErrorKind::Forbidden);
        assert_eq!(AppErrorKind::from_status(404), AppErrorKind::NotFound);
        assert_eq!(AppErrorKind::from_status(409), AppErrorKind::Conflict);
        assert_eq!(AppErrorKind::from_status(422), AppErrorKind::ValidationError);
        assert_eq!(AppErrorKind::from_status(429), AppErrorKind::RateLimited);
        assert_eq!(AppErrorKind::from_status(418), AppErrorKind::BadRequest);
        assert_eq!(AppErrorKind::from_status(500), AppErrorKind::InternalError);
        assert_eq!(AppErrorKind::from_status(503), AppErrorKind::InternalError);
    }

    #[test]
    fn from_response_prefers_message() {
        let err = AppError::from_response(
            401,
            r#"{"status": false, "message": "Invalid credentials", "error": "ignored"}"#,
        );
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");
        assert!(err.is_auth_failure());
    }

    #[test]
    fn from_response_falls_back_to_error_field() {
        let err = AppError::from_response(500, r#"{"error": "Server exploded"}"#);
        assert_eq!(err.message, "Server exploded");
        assert_eq!(err.kind, AppErrorKind::InternalError);
    }

    #[test]
    fn from_response_collects_field_errors() {
        let body = r#"{
            "errors": {
                "email": ["The email has already been taken.", "second"],
                "name": "The name field is required."
            }
        }"#;
        let err = AppError::from_response(422, body);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("email"), Some("The email has already been taken."));
        assert_eq!(err.field("name"), Some("The name field is required."));
        assert_eq!(err.message, "The email has already been taken.");
    }

    #[test]
    fn from_response_blank_message_uses_field_error() {
        let body = r#"{"message": "  ", "errors": {"title": ["Title is required"]}}"#;
        let err = AppError::from_response(422, body);
        assert_eq!(err.message, "Title is required");
    }

    #[test]
    fn from_response_generic_fallback_for_garbage() {
        let err = AppError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
        assert!(err.field_errors.is_empty());

        let err = AppError::from_response(400, "{}");
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn failed_envelope_with_field_errors_is_validation_error() {
        let json = serde_json::json!({
            "flag": 0,
            "errors": {"email": ["The email has already been taken."]}
        });
        let err = AppError::from_failed_envelope(&json);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "The email has already been taken.");
        assert_eq!(err.field("email"), Some("The email has already been taken."));
    }

    #[test]
    fn failed_envelope_falls_back_to_error_field() {
        let json = serde_json::json!({"status": false, "error": "Journal not found"});
        let err = AppError::from_failed_envelope(&json);
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Journal not found");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn friendly_message_never_empty() {
        assert_eq!(AppError::network("").friendly_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            AppError::forbidden("Admins only").friendly_message(),
            "Admins only"
        );
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn only_unauthorized_is_auth_failure() {
        assert!(!AppError::forbidden("").is_auth_failure());
        assert!(!AppError::network("").is_auth_failure());
        assert!(AppError::unauthorized("").is_auth_failure());
    }
}
