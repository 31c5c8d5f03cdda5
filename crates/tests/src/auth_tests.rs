use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, LoginRequest, ProfileUpdate, RegisterRequest, RoleCode, Upload,
};

use crate::common::{self, EMAIL, PASSWORD, TOKEN};

fn registration(user_type: RoleCode, resume: Option<Upload>) -> RegisterRequest {
    RegisterRequest {
        name: "Rosalind Franklin".into(),
        email: "rf@example.org".into(),
        password: "photo51photo51".into(),
        password_confirmation: "photo51photo51".into(),
        user_type,
        phone: Some("+44 20 0000 0000".into()),
        affiliation: None,
        resume,
    }
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let (client, stub) = common::spawn_stub().await;

    let response = client
        .login(&LoginRequest {
            email: EMAIL.into(),
            password: PASSWORD.into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, TOKEN);
    assert_eq!(response.user.role(), Some(RoleCode::Admin));

    let req = stub.last();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/login");
    assert_eq!(req.authorization, None);
    assert_eq!(req.body["email"], EMAIL);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let (client, _stub) = common::spawn_stub().await;

    let err = client
        .login(&LoginRequest {
            email: EMAIL.into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "These credentials do not match our records.");
}

#[tokio::test]
async fn test_login_without_token_is_invalid_response() {
    let (client, _stub) = common::spawn_stub().await;

    let err = client
        .login(&LoginRequest {
            email: "tokenless@example.org".into(),
            password: "whatever".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_invalid_login_never_reaches_server() {
    let (client, stub) = common::spawn_stub().await;

    let err = client
        .login(&LoginRequest {
            email: "not-an-email".into(),
            password: PASSWORD.into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_logout_sends_bearer_token() {
    let (client, stub) = common::spawn_stub().await;

    common::signed_in(&client).logout().await.unwrap();

    let req = stub.last();
    assert_eq!(req.path, "/api/logout");
    assert_eq!(req.authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_register_reviewer_uploads_resume_as_multipart() {
    let (client, stub) = common::spawn_stub().await;
    let resume = Upload::new("cv.pdf", None, vec![7; 64]);

    let reply = client
        .register(&registration(RoleCode::Reviewer, Some(resume)))
        .await
        .unwrap();

    assert_eq!(reply.message.as_deref(), Some("Registration successful"));
    let created = reply.data.unwrap();
    assert_eq!(created.role(), Some(RoleCode::Reviewer));

    let req = stub.last();
    assert_eq!(req.path, "/api/register");
    assert!(req
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("multipart/form-data"));
    assert_eq!(req.body["user_type"], "3");
    assert_eq!(req.body["phone"], "+44 20 0000 0000");
    assert!(req.body.get("affiliation").is_none());
    assert_eq!(
        req.files,
        vec![common::RecordedFile {
            field: "resume".into(),
            file_name: "cv.pdf".into(),
            content_type: "application/pdf".into(),
            size: 64,
        }]
    );
}

#[tokio::test]
async fn test_register_duplicate_email_maps_field_error() {
    let (client, _stub) = common::spawn_stub().await;
    let mut request = registration(RoleCode::Author, None);
    request.email = EMAIL.into();

    let err = client.register(&request).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.message, "The email has already been taken.");
    assert_eq!(err.field("email"), Some("The email has already been taken."));
}

#[tokio::test]
async fn test_register_staff_role_is_refused_locally() {
    let (client, stub) = common::spawn_stub().await;

    let err = client
        .register(&registration(RoleCode::Editor, None))
        .await
        .unwrap_err();

    assert_eq!(err.field("user_type"), Some("This role cannot be chosen at sign-up"));
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_profile_requires_token() {
    let (client, _stub) = common::spawn_stub().await;

    let err = client.fetch_profile().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn test_update_profile_posts_multipart_with_avatar() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let profile = client.fetch_profile().await.unwrap();

    let mut update = ProfileUpdate::from_user(&profile);
    update.name = "Augusta Ada King".into();
    update.image = Some(Upload::new("me.png", None, vec![1, 2, 3]));
    let reply = client.update_profile(&update).await.unwrap();

    assert_eq!(reply.message_or("Saved"), "Profile updated");
    assert_eq!(reply.data.unwrap().name, "Augusta Ada King");
    let req = stub.last();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/profile");
    assert_eq!(req.files[0].field, "image");
    assert_eq!(req.files[0].content_type, "image/png");
}
