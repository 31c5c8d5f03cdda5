use pretty_assertions::assert_eq;
use shared_types::{
    dispatch_role, AppErrorKind, DashboardDispatch, DashboardKind, LoginRequest, RouteAccess,
    Authorization, RedirectTarget, Session,
};

use crate::common::{self, EMAIL, PASSWORD, TOKEN};

async fn signed_in_session(client: &api::ApiClient) -> Session {
    let response = client
        .login(&LoginRequest {
            email: EMAIL.into(),
            password: PASSWORD.into(),
        })
        .await
        .unwrap();
    Session::establish(response.token, response.user).unwrap()
}

#[tokio::test]
async fn test_login_opens_admin_dashboard_and_closes_public_only_routes() {
    let (client, _stub) = common::spawn_stub().await;

    let session = signed_in_session(&client).await;

    assert_eq!(session.token(), Some(TOKEN));
    assert_eq!(
        RouteAccess::Protected.authorize(session.is_authenticated()),
        Authorization::Allow
    );
    assert_eq!(
        RouteAccess::PublicOnly.authorize(session.is_authenticated()),
        Authorization::Redirect(RedirectTarget::Dashboard)
    );
    assert_eq!(
        dispatch_role(session.role_code().unwrap()),
        DashboardDispatch::Mount(DashboardKind::Admin)
    );
}

#[tokio::test]
async fn test_session_token_authenticates_followup_requests() {
    let (client, stub) = common::spawn_stub().await;
    let session = signed_in_session(&client).await;

    let authed = client.clone().with_token(session.token().map(str::to_string));
    let users = authed.list_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(stub.last().authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_profile_refresh_keeps_session_when_role_unchanged() {
    let (client, _stub) = common::spawn_stub().await;
    let mut session = signed_in_session(&client).await;
    let authed = client.clone().with_token(session.token().map(str::to_string));

    let profile = authed.fetch_profile().await.unwrap();
    session.replace_user(profile).unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.id), Some(1));
}

#[tokio::test]
async fn test_profile_refresh_with_other_role_is_rejected() {
    let (client, _stub) = common::spawn_stub().await;
    let mut session = signed_in_session(&client).await;
    let authed = client.clone().with_token(session.token().map(str::to_string));

    let mut profile = authed.fetch_profile().await.unwrap();
    profile.user_type = "3".into();
    let before = session.clone();
    let err = session.replace_user(profile).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(session, before);
}

#[tokio::test]
async fn test_logout_then_protected_routes_redirect() {
    let (client, _stub) = common::spawn_stub().await;
    let mut session = signed_in_session(&client).await;
    let authed = client.clone().with_token(session.token().map(str::to_string));

    authed.logout().await.unwrap();
    session.sign_out();
    session.sign_out();

    assert_eq!(session, Session::anonymous());
    assert_eq!(
        RouteAccess::Protected.authorize(session.is_authenticated()),
        Authorization::Redirect(RedirectTarget::Landing)
    );

    let anonymous = client.clone().with_token(session.token().map(str::to_string));
    let err = anonymous.list_users().await.unwrap_err();
    assert!(err.is_auth_failure());
}
