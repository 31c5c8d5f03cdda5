use std::collections::HashMap;

use shared_types::{
    AppError, LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest, User,
    MAX_DOCUMENT_BYTES, MAX_IMAGE_BYTES,
};

use crate::client::{required, ApiClient, Reply};
use crate::multipart::to_form;
use crate::validate;

fn field_error(field: &str, message: impl Into<String>) -> AppError {
    let mut fields = HashMap::new();
    fields.insert(field.to_string(), message.into());
    AppError::validation("Please correct the highlighted fields.", fields)
}

impl ApiClient {
    /// `POST /api/login`. The caller stores the returned token and user in
    /// the session.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        validate(request)?;
        let reply = self.post_json("/api/login", request).await?;
        let response: LoginResponse = required(reply)?;
        if response.token.trim().is_empty() {
            return Err(AppError::invalid_response(
                "The server did not return an access token.",
            ));
        }
        tracing::info!(user_id = response.user.id, role = %response.user.user_type, "signed in");
        Ok(response)
    }

    /// `POST /api/logout`. Best effort; the session is cleared locally
    /// whatever the outcome.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), AppError> {
        self.post_empty::<serde_json::Value>("/api/logout").await?;
        Ok(())
    }

    /// `POST /api/register` as multipart so reviewers can attach a resume.
    #[tracing::instrument(skip(self, request), fields(email = %request.email, role = %request.user_type))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<Reply<User>, AppError> {
        validate(request)?;
        if let Some((field, message)) = request.cross_field_problem() {
            return Err(field_error(field, message));
        }
        if let Some(resume) = &request.resume {
            resume
                .check_size(MAX_DOCUMENT_BYTES)
                .map_err(|m| field_error("resume", m))?;
        }
        let reply = self
            .post_multipart("/api/register", to_form(request, None)?)
            .await?;
        tracing::info!("registration accepted");
        Ok(reply)
    }

    /// `GET /api/profile`.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_profile(&self) -> Result<User, AppError> {
        required(self.get("/api/profile").await?)
    }

    /// `POST /api/profile` as multipart (optional avatar image).
    #[tracing::instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Reply<User>, AppError> {
        validate(update)?;
        if let Some(image) = &update.image {
            if !image.is_image() {
                return Err(field_error("image", "Choose an image file"));
            }
            image
                .check_size(MAX_IMAGE_BYTES)
                .map_err(|m| field_error("image", m))?;
        }
        self.post_multipart("/api/profile", to_form(update, None)?)
            .await
    }
}
