//! Lenient decoders for the remote API's loosely typed JSON.
//!
//! The API is not consistent about scalar encodings: ids and role codes show
//! up as numbers or strings, and status flags as `1`/`0`, booleans or
//! strings. These helpers are used through `#[serde(deserialize_with = ...)]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Whether an envelope success indicator reports success.
///
/// Accepts `true`, `1`, any 2xx number, and the strings `"1"`, `"true"`,
/// `"ok"`, `"success"` (case-insensitive).
pub fn is_success_indicator(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_i64() {
            Some(1) => true,
            Some(code) => (200..300).contains(&code),
            None => false,
        },
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "ok" | "success"
        ),
        _ => false,
    }
}

/// Whether a record status flag marks the record as active.
pub fn is_active_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().map(|v| v != 0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "active" | "published" | "yes"
        ),
        _ => false,
    }
}

/// Deserialize a record status flag into `bool`. Missing or null is inactive.
pub fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(is_active_flag).unwrap_or(false))
}

/// Serialize a `bool` flag the way the API stores it (`1` / `0`).
pub fn flag_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

/// Deserialize an id that may arrive as a number or a numeric string.
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("id {n} is not an integer"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("id {s:?} is not numeric"))),
        other => Err(D::Error::custom(format!("unexpected id value {other}"))),
    }
}

/// Deserialize an optional id; null, missing and empty strings become `None`.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_i64()),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("id {s:?} is not numeric"))),
        Some(other) => Err(D::Error::custom(format!("unexpected id value {other}"))),
    }
}

/// Deserialize a scalar that may be a string or a number into a `String`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id")]
        id: i64,
        #[serde(default, deserialize_with = "opt_id")]
        parent: Option<i64>,
        #[serde(deserialize_with = "string_or_number")]
        code: String,
        #[serde(default, deserialize_with = "active_flag")]
        status: bool,
    }

    #[test]
    fn success_indicator_variants() {
        assert!(is_success_indicator(&json!(true)));
        assert!(is_success_indicator(&json!(1)));
        assert!(is_success_indicator(&json!(200)));
        assert!(is_success_indicator(&json!(201)));
        assert!(is_success_indicator(&json!("success")));
        assert!(is_success_indicator(&json!("TRUE")));
        assert!(is_success_indicator(&json!("1")));

        assert!(!is_success_indicator(&json!(false)));
        assert!(!is_success_indicator(&json!(0)));
        assert!(!is_success_indicator(&json!(422)));
        assert!(!is_success_indicator(&json!("error")));
        assert!(!is_success_indicator(&json!(null)));
        assert!(!is_success_indicator(&json!({"ok": true})));
    }

    #[test]
    fn active_flag_variants() {
        assert!(is_active_flag(&json!(1)));
        assert!(is_active_flag(&json!("1")));
        assert!(is_active_flag(&json!("Active")));
        assert!(is_active_flag(&json!(true)));
        assert!(!is_active_flag(&json!(0)));
        assert!(!is_active_flag(&json!("0")));
        assert!(!is_active_flag(&json!("inactive")));
    }

    #[test]
    fn probe_accepts_numbers_and_strings() {
        let probe: Probe =
            serde_json::from_value(json!({"id": "12", "parent": 3, "code": 2, "status": "1"}))
                .unwrap();
        assert_eq!(probe.id, 12);
        assert_eq!(probe.parent, Some(3));
        assert_eq!(probe.code, "2");
        assert!(probe.status);
    }

    #[test]
    fn probe_defaults_missing_optionals() {
        let probe: Probe =
            serde_json::from_value(json!({"id": 7, "parent": "", "code": " 0 "})).unwrap();
        assert_eq!(probe.parent, None);
        assert_eq!(probe.code, "0");
        assert!(!probe.status);
    }

    #[test]
    fn probe_rejects_non_numeric_id() {
        let result: Result<Probe, _> =
            serde_json::from_value(json!({"id": "abc", "code": "1"}));
        assert!(result.is_err());
    }
}
