use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, JournalForm, TaxonomyForm, Upload};

use crate::common;

#[tokio::test]
async fn test_public_journals_need_no_token() {
    let (client, stub) = common::spawn_stub().await;

    let journals = client.public_journals().await.unwrap();

    assert_eq!(journals.len(), 2);
    assert_eq!(journals[0].category_id, Some(2));
    assert!(journals[1].active);
    assert_eq!(
        client.config().asset_url(journals[0].image.as_deref().unwrap()),
        format!("{}/journals/widgets.png", client.config().storage_url)
    );
    assert_eq!(stub.last().authorization, None);
}

#[tokio::test]
async fn test_public_journal_detail_and_missing() {
    let (client, _stub) = common::spawn_stub().await;

    let journal = client.public_journal(5).await.unwrap();
    assert_eq!(journal.description.as_deref(), Some("Widgets, applied."));

    let err = client.public_journal(404).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_admin_categories_require_token() {
    let (client, _stub) = common::spawn_stub().await;

    let err = client.list_categories().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_category_crud_round() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);

    let categories = client.list_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert!(!categories[1].active);

    let mut form = TaxonomyForm::blank();
    form.name = "Chemistry".into();
    let created = client.create_category(&form).await.unwrap();
    assert_eq!(created.message.as_deref(), Some("Category created"));
    assert_eq!(created.data.as_ref().map(|c| c.id), Some(10));
    let req = stub.last();
    assert_eq!(req.body["status"], 1);
    assert_eq!(req.authorization.as_deref(), Some("Bearer tok-123"));

    form.active = false;
    let updated = client.update_category(10, &form).await.unwrap();
    assert_eq!(updated.data.map(|c| c.active), Some(false));
    let req = stub.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/api/admin/categories/10"));

    let deleted = client.delete_category(10).await.unwrap();
    assert_eq!(deleted.message_or(""), "Category deleted");
    assert_eq!(stub.last().method, "DELETE");
}

#[tokio::test]
async fn test_duplicate_category_surfaces_field_error() {
    let (client, _stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let mut form = TaxonomyForm::blank();
    form.name = "Physics".into();

    let err = client.create_category(&form).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field("name"), Some("The name has already been taken."));
}

#[tokio::test]
async fn test_failed_envelope_flag_is_an_error() {
    let (client, _stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let mut form = TaxonomyForm::blank();
    form.name = "Duplicate".into();

    let err = client.create_group(&form).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Group already exists");
}

#[tokio::test]
async fn test_groups_list_update_delete() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);

    let groups = client.list_groups().await.unwrap();
    assert_eq!(groups[0].name, "Open Science Press");
    assert!(groups[0].active);

    let form = TaxonomyForm::from(&groups[0]);
    client.update_group(1, &form).await.unwrap();
    assert_eq!(stub.last().path, "/api/admin/groups/1");

    client.delete_group(1).await.unwrap();
    assert_eq!(stub.last().method, "DELETE");
}

#[tokio::test]
async fn test_journal_create_is_multipart_with_cover() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let mut form = JournalForm::blank();
    form.title = "Widget Letters".into();
    form.issn = Some("2049-3630".into());
    form.group_id = Some(1);
    form.image = Some(Upload::new("cover.jpg", None, vec![9; 10]));

    let reply = client.create_journal(&form).await.unwrap();

    assert_eq!(reply.data.map(|j| j.title), Some("Widget Letters".to_string()));
    let req = stub.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/api/admin/journals"));
    assert_eq!(req.body["issn"], "2049-3630");
    assert_eq!(req.body["group_id"], "1");
    assert_eq!(req.body["status"], "1");
    assert!(req.body.get("_method").is_none());
    assert_eq!(req.files[0].content_type, "image/jpeg");
}

#[tokio::test]
async fn test_journal_update_spoofs_put_over_post() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let journals = client.list_journals().await.unwrap();
    let mut form = JournalForm::from(&journals[0]);
    form.active = false;

    let reply = client.update_journal(journals[0].id, &form).await.unwrap();

    assert_eq!(reply.message.as_deref(), Some("Journal updated"));
    assert_eq!(reply.data.map(|j| j.active), Some(false));
    let req = stub.last();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/admin/journals/5");
    assert_eq!(req.body["_method"], "PUT");
    assert!(req.files.is_empty());

    client.delete_journal(5).await.unwrap();
    assert_eq!(stub.last().method, "DELETE");
}
