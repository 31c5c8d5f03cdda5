use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, TaxonomyForm, GENERIC_ERROR_MESSAGE};

use crate::common::{self, EMAIL, PASSWORD};

#[tokio::test]
async fn test_html_error_page_falls_back_to_generic_message() {
    let (client, stub) = common::spawn_stub().await;
    stub.override_route("GET", "/api/news", 502, "<html>Bad Gateway</html>");

    let err = client.public_news().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_undecodable_success_body_is_invalid_response() {
    let (client, stub) = common::spawn_stub().await;
    stub.override_route("GET", "/api/blog", 200, "definitely not json");

    let err = client.public_blogs().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_first_field_error_used_when_no_message() {
    let (client, stub) = common::spawn_stub().await;
    stub.override_route(
        "GET",
        "/api/journal",
        422,
        r#"{"errors": {"issn": ["ISSN is invalid.", "ISSN is too long."]}}"#,
    );

    let err = client.public_journals().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, "ISSN is invalid.");
    assert_eq!(err.field("issn"), Some("ISSN is invalid."));
}

#[tokio::test]
async fn test_rate_limit_and_conflict_statuses() {
    let (client, stub) = common::spawn_stub().await;
    stub.override_route("GET", "/api/news", 429, r#"{"message": "Too Many Attempts."}"#);
    stub.override_route("GET", "/api/blog", 409, r#"{"error": "Conflict"}"#);

    let err = client.public_news().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::RateLimited);
    assert_eq!(err.message, "Too Many Attempts.");

    let err = client.public_blogs().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Conflict");
}

#[tokio::test]
async fn test_string_success_indicator_and_null_data() {
    let (client, stub) = common::spawn_stub().await;
    stub.override_route("GET", "/api/news", 200, r#"{"status": "success", "data": null}"#);

    let news = client.public_news().await.unwrap();

    assert!(news.is_empty());
}

#[tokio::test]
async fn test_ok_status_with_failed_flag_fills_field_errors() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    stub.override_route(
        "POST",
        "/api/admin/groups",
        200,
        r#"{"flag": 0, "errors": {"name": ["The name has already been taken."]}}"#,
    );

    let mut form = TaxonomyForm::blank();
    form.name = "Open Science Press".into();
    let err = client.create_group(&form).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, "The name has already been taken.");
    assert_eq!(err.field("name"), Some("The name has already been taken."));
}

#[tokio::test]
async fn test_ok_status_with_failed_status_uses_error_field() {
    let (client, stub) = common::spawn_stub().await;
    stub.override_route("GET", "/api/journal/5", 200, r#"{"status": false, "error": "Journal not found"}"#);

    let err = client.public_journal(5).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Journal not found");
}

#[tokio::test]
async fn test_failed_login_with_empty_data_array_keeps_message() {
    let (client, stub) = common::spawn_stub().await;
    stub.override_route(
        "POST",
        "/api/login",
        200,
        r#"{"flag": 0, "message": "Invalid credentials", "data": []}"#,
    );

    let err = client
        .login(&LoginRequest {
            email: EMAIL.into(),
            password: PASSWORD.into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn test_unreachable_api_is_network_error() {
    let offline = api::ApiClient::new(shared_types::ClientConfig::new("http://127.0.0.1:9", None));

    let err = offline.public_news().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}
