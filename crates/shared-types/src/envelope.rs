use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::wire;

const UNREADABLE_RESPONSE: &str = "The server sent a response this app could not read.";

/// Wrapper the API puts around every JSON response:
/// `{ "flag" | "status": <indicator>, "message": "...", "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "none")]
    pub data: Option<T>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    /// `flag` wins over `status` when both are present. An envelope with
    /// neither counts as successful; the HTTP status already was 2xx.
    pub fn is_success(&self) -> bool {
        match self.flag.as_ref().or(self.status.as_ref()) {
            Some(indicator) => wire::is_success_indicator(indicator),
            None => true,
        }
    }
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Decode the body of a 2xx response.
    ///
    /// The indicator is checked before `data` is typed, so a failure keeps
    /// its message even when its payload has another shape (`"data": []`).
    /// A failed indicator goes through the same extraction as non-2xx bodies.
    /// An empty body is a successful envelope without data.
    pub fn from_body(body: &str) -> Result<Self, AppError> {
        if body.trim().is_empty() {
            return Ok(Self {
                flag: None,
                status: None,
                message: None,
                data: None,
            });
        }

        let json: Value =
            serde_json::from_str(body).map_err(|_| AppError::invalid_response(UNREADABLE_RESPONSE))?;
        let raw: ApiEnvelope<Value> = serde_json::from_value(json.clone())
            .map_err(|_| AppError::invalid_response(UNREADABLE_RESPONSE))?;

        if !raw.is_success() {
            return Err(AppError::from_failed_envelope(&json));
        }

        let data = raw
            .data
            .map(serde_json::from_value::<T>)
            .transpose()
            .map_err(|_| AppError::invalid_response(UNREADABLE_RESPONSE))?;

        Ok(Self {
            flag: raw.flag,
            status: raw.status,
            message: raw.message,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppErrorKind, GENERIC_ERROR_MESSAGE};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: i64,
    }

    #[test]
    fn numeric_flag_envelope() {
        let env = ApiEnvelope::<Vec<i32>>::from_body(r#"{"flag": 1, "message": "ok", "data": [1, 2]}"#)
            .unwrap();
        assert!(env.is_success());
        assert_eq!(env.message.as_deref(), Some("ok"));
        assert_eq!(env.data, Some(vec![1, 2]));
    }

    #[test]
    fn boolean_status_envelope() {
        let env = ApiEnvelope::<String>::from_body(r#"{"status": true, "data": "x"}"#).unwrap();
        assert_eq!(env.data.as_deref(), Some("x"));
    }

    #[test]
    fn failed_indicator_carries_message() {
        let err = ApiEnvelope::<String>::from_body(r#"{"status": false, "message": "Category exists"}"#)
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Category exists");
    }

    #[test]
    fn failed_indicator_without_message_uses_fallback() {
        let err = ApiEnvelope::<String>::from_body(r#"{"flag": 0}"#).unwrap_err();
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn failed_indicator_reads_error_and_field_errors() {
        let err = ApiEnvelope::<Record>::from_body(
            r#"{"flag": 0, "errors": {"email": ["The email has already been taken."]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "The email has already been taken.");
        assert_eq!(err.field("email"), Some("The email has already been taken."));

        let err = ApiEnvelope::<Record>::from_body(r#"{"status": false, "error": "Journal not found"}"#)
            .unwrap_err();
        assert_eq!(err.message, "Journal not found");
    }

    #[test]
    fn failed_indicator_ignores_payload_shape() {
        let err = ApiEnvelope::<Record>::from_body(
            r#"{"flag": 0, "message": "Invalid credentials", "data": []}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn successful_envelope_with_wrong_payload_is_invalid_response() {
        let env = ApiEnvelope::<Record>::from_body(r#"{"flag": 1, "data": {"id": 3}}"#).unwrap();
        assert_eq!(env.data.map(|r| r.id), Some(3));

        let err = ApiEnvelope::<Record>::from_body(r#"{"flag": 1, "data": []}"#).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidResponse);
    }

    #[test]
    fn flag_takes_precedence_over_status() {
        let err = ApiEnvelope::<()>::from_body(r#"{"flag": 0, "status": 200}"#).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn missing_indicator_is_success() {
        let env = ApiEnvelope::<i32>::from_body(r#"{"data": 4}"#).unwrap();
        assert_eq!(env.data, Some(4));
    }

    #[test]
    fn null_data_and_empty_body_have_no_payload() {
        let env = ApiEnvelope::<i32>::from_body(r#"{"status": 1, "data": null}"#).unwrap();
        assert_eq!(env.data, None);
        let env = ApiEnvelope::<i32>::from_body("  ").unwrap();
        assert_eq!(env.data, None);
    }

    #[test]
    fn non_json_body_is_invalid_response() {
        let err = ApiEnvelope::<i32>::from_body("definitely not json").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidResponse);
    }
}
