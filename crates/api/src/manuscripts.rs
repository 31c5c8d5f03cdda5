use shared_types::{
    AppError, EditorialDecision, Manuscript, ManuscriptSubmission, ReviewSubmission,
    ReviewerAssignment, MAX_DOCUMENT_BYTES,
};

use crate::client::{list, required, ApiClient, Reply};
use crate::multipart::to_form;
use crate::validate;

/// File types accepted for manuscripts.
const MANUSCRIPT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

impl ApiClient {
    /// Manuscripts visible to the caller; the API scopes the list by role.
    #[tracing::instrument(skip(self))]
    pub async fn list_manuscripts(&self) -> Result<Vec<Manuscript>, AppError> {
        Ok(list(self.get("/api/manuscripts").await?))
    }

    #[tracing::instrument(skip(self))]
    pub async fn manuscript(&self, id: i64) -> Result<Manuscript, AppError> {
        required(self.get(&format!("/api/manuscripts/{id}")).await?)
    }

    #[tracing::instrument(skip(self, submission), fields(journal_id = submission.journal_id))]
    pub async fn submit_manuscript(
        &self,
        submission: &ManuscriptSubmission,
    ) -> Result<Reply<Manuscript>, AppError> {
        validate(submission)?;
        if !MANUSCRIPT_TYPES.contains(&submission.file.content_type.as_str()) {
            return Err(AppError::bad_request(
                "Upload the manuscript as a PDF or Word document.",
            ));
        }
        submission
            .file
            .check_size(MAX_DOCUMENT_BYTES)
            .map_err(AppError::bad_request)?;
        self.post_multipart("/api/manuscripts", to_form(submission, None)?)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn assign_reviewer(
        &self,
        id: i64,
        reviewer_id: i64,
    ) -> Result<Reply<Manuscript>, AppError> {
        self.post_json(
            &format!("/api/manuscripts/{id}/assign"),
            &ReviewerAssignment { reviewer_id },
        )
        .await
    }

    #[tracing::instrument(skip(self, review), fields(recommendation = review.recommendation.as_str()))]
    pub async fn submit_review(
        &self,
        id: i64,
        review: &ReviewSubmission,
    ) -> Result<Reply<Manuscript>, AppError> {
        validate(review)?;
        self.post_json(&format!("/api/manuscripts/{id}/review"), review)
            .await
    }

    #[tracing::instrument(skip(self, decision), fields(status = decision.status.label()))]
    pub async fn record_decision(
        &self,
        id: i64,
        decision: &EditorialDecision,
    ) -> Result<Reply<Manuscript>, AppError> {
        self.post_json(&format!("/api/manuscripts/{id}/decision"), decision)
            .await
    }
}
