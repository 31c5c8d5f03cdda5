use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, RoleCode, UserForm};

use crate::common;

#[tokio::test]
async fn test_list_users_parses_roles() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);

    let users = client.list_users().await.unwrap();

    let roles: Vec<_> = users.iter().map(|u| u.role()).collect();
    assert_eq!(
        roles,
        vec![Some(RoleCode::Admin), Some(RoleCode::Author), Some(RoleCode::Reviewer)]
    );
    assert_eq!(stub.last().path, "/api/admin/users");
}

#[tokio::test]
async fn test_create_user_sends_json_with_role_code() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let mut form = UserForm::blank();
    form.name = "Lise Meitner".into();
    form.email = "lise@example.org".into();
    form.user_type = RoleCode::Editor;
    form.password = Some("fission1938".into());

    let reply = client.create_user(&form).await.unwrap();

    assert_eq!(reply.data.and_then(|u| u.role()), Some(RoleCode::Editor));
    let req = stub.last();
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert_eq!(req.body["user_type"], "1");
    assert_eq!(req.body["status"], 1);
    assert_eq!(req.body["password"], "fission1938");
}

#[tokio::test]
async fn test_update_user_omits_blank_password() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let users = client.list_users().await.unwrap();
    let mut form = UserForm::from_user(&users[1]);
    form.password = Some(String::new());
    form.active = false;

    client.update_user(users[1].id, &form).await.unwrap();

    let req = stub.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/api/admin/users/2"));
    assert!(req.body.get("password").is_none());
    assert_eq!(req.body["status"], 0);
}

#[tokio::test]
async fn test_delete_own_account_uses_error_field() {
    let (client, _stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);

    let err = client.delete_user(1).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "You cannot delete your own account.");

    client.delete_user(2).await.unwrap();
}
