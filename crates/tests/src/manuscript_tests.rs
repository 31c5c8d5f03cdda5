use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, EditorialDecision, ManuscriptStatus, ManuscriptSubmission, Recommendation,
    ReviewSubmission, Upload,
};

use crate::common;

#[tokio::test]
async fn test_list_and_detail() {
    let (client, _stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);

    let manuscripts = client.list_manuscripts().await.unwrap();
    let statuses: Vec<_> = manuscripts.iter().map(|m| m.status).collect();
    assert_eq!(statuses, vec![ManuscriptStatus::Submitted, ManuscriptStatus::UnderReview]);

    let detail = client.manuscript(7).await.unwrap();
    assert_eq!(detail.journal_title.as_deref(), Some("Journal of Applied Widgets"));

    let err = client.manuscript(99).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Manuscript not found");
}

#[tokio::test]
async fn test_submit_uploads_file_and_abstract() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let submission = ManuscriptSubmission {
        journal_id: 5,
        title: "Widgets at scale".into(),
        summary: "We measure widgets across a thousand deployments and report on it.".into(),
        keywords: Some("widgets, scale".into()),
        file: Upload::new("paper.docx", None, vec![3; 128]),
    };

    let reply = client.submit_manuscript(&submission).await.unwrap();

    assert_eq!(reply.data.map(|m| m.status), Some(ManuscriptStatus::Submitted));
    let req = stub.last();
    assert_eq!(req.path, "/api/manuscripts");
    assert_eq!(req.body["journal_id"], "5");
    assert_eq!(req.body["abstract"], submission.summary);
    assert_eq!(req.files[0].field, "file");
    assert_eq!(req.files[0].size, 128);
}

#[tokio::test]
async fn test_editor_assigns_reviewer() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);

    let reply = client.assign_reviewer(7, 3).await.unwrap();

    let manuscript = reply.data.unwrap();
    assert_eq!(manuscript.status, ManuscriptStatus::UnderReview);
    assert_eq!(manuscript.reviewer_id, Some(3));
    let req = stub.last();
    assert_eq!(req.path, "/api/manuscripts/7/assign");
    assert_eq!(req.body, serde_json::json!({ "reviewer_id": 3 }));
}

#[tokio::test]
async fn test_reviewer_submits_review() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let review = ReviewSubmission {
        recommendation: Recommendation::Revise,
        comments: "Sound method, but the related work section is thin.".into(),
    };

    let reply = client.submit_review(8, &review).await.unwrap();

    assert_eq!(reply.data.map(|m| m.status), Some(ManuscriptStatus::Reviewed));
    assert_eq!(stub.last().body["recommendation"], "revise");
}

#[tokio::test]
async fn test_editor_records_decision() {
    let (client, stub) = common::spawn_stub().await;
    let client = common::signed_in(&client);
    let decision = EditorialDecision::new(ManuscriptStatus::Accepted).unwrap();

    let reply = client.record_decision(7, &decision).await.unwrap();

    assert_eq!(reply.message.as_deref(), Some("Decision recorded"));
    assert!(reply.data.unwrap().status.is_final());
    assert_eq!(stub.last().body["status"], "accepted");
}

#[tokio::test]
async fn test_manuscripts_require_token() {
    let (client, _stub) = common::spawn_stub().await;

    let err = client.list_manuscripts().await.unwrap_err();

    assert!(err.is_auth_failure());
}
