use pretty_assertions::assert_eq;
use shared_types::{excerpt, PostForm, Upload};

use crate::common;

#[tokio::test]
async fn test_public_feeds() {
    let (client, _stub) = common::spawn_stub().await;

    let blogs = client.public_blogs().await.unwrap();
    assert_eq!(blogs[0].author.as_deref(), Some("Editorial team"));
    assert_eq!(excerpt(&blogs[0].body, 80), "Hello");

    let blog = client.public_blog(1).await.unwrap();
    assert_eq!(blog.title, "Open access week");

    let news = client.public_news().await.unwrap();
    assert_eq!(news[0].body, "Submit now");
}

#[tokio::test]
async fn test_blog_create_sends_body_as_description() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let mut form = PostForm::blank();
    form.title = "Peer review week".into();
    form.body = "<p>Thank a reviewer.</p>".into();
    form.image = Some(Upload::new("banner.webp", None, vec![1; 5]));

    let reply = client.create_blog(&form).await.unwrap();

    let blog = reply.data.unwrap();
    assert_eq!(blog.body, "<p>Thank a reviewer.</p>");
    assert!(blog.active);
    let req = stub.last();
    assert_eq!(req.path, "/api/admin/blogs");
    assert_eq!(req.body["description"], "<p>Thank a reviewer.</p>");
    assert_eq!(req.files[0].field, "image");
}

#[tokio::test]
async fn test_blog_update_and_delete() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let blogs = client.list_blogs().await.unwrap();

    let reply = client.update_blog(blogs[0].id, &PostForm::from(&blogs[0])).await.unwrap();
    assert_eq!(reply.message_or(""), "Blog updated");
    let req = stub.last();
    assert_eq!((req.method.as_str(), req.body["_method"].as_str()), ("POST", Some("PUT")));

    client.delete_blog(1).await.unwrap();
    assert_eq!(stub.last().path, "/api/admin/blogs/1");
}

#[tokio::test]
async fn test_news_crud() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);

    let news = client.list_news().await.unwrap();
    assert!(!news[0].active);

    let mut form = PostForm::from(&news[0]);
    form.active = true;
    let created = client.create_news(&form).await.unwrap();
    assert_eq!(created.data.map(|n| n.body), Some("Submit now".to_string()));

    client.update_news(3, &form).await.unwrap();
    assert_eq!(stub.last().path, "/api/admin/news/3");

    let deleted = client.delete_news(3).await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("News deleted"));
}
