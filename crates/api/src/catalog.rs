use shared_types::{AppError, Category, Group, Journal, JournalForm, TaxonomyForm, MAX_IMAGE_BYTES};

use crate::client::{list, required, ApiClient, Reply};
use crate::multipart::to_form;
use crate::validate;

fn check_cover(form: &JournalForm) -> Result<(), AppError> {
    match &form.image {
        Some(image) if !image.is_image() => {
            Err(AppError::bad_request("The journal cover must be an image."))
        }
        Some(image) => image.check_size(MAX_IMAGE_BYTES).map_err(AppError::bad_request),
        None => Ok(()),
    }
}

impl ApiClient {
    // --- Public catalogue ---

    #[tracing::instrument(skip(self))]
    pub async fn public_journals(&self) -> Result<Vec<Journal>, AppError> {
        Ok(list(self.get("/api/journal").await?))
    }

    #[tracing::instrument(skip(self))]
    pub async fn public_journal(&self, id: i64) -> Result<Journal, AppError> {
        required(self.get(&format!("/api/journal/{id}")).await?)
    }

    // --- Categories ---

    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(list(self.get("/api/admin/categories").await?))
    }

    #[tracing::instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_category(&self, form: &TaxonomyForm) -> Result<Reply<Category>, AppError> {
        validate(form)?;
        self.post_json("/api/admin/categories", form).await
    }

    #[tracing::instrument(skip(self, form))]
    pub async fn update_category(
        &self,
        id: i64,
        form: &TaxonomyForm,
    ) -> Result<Reply<Category>, AppError> {
        validate(form)?;
        self.put_json(&format!("/api/admin/categories/{id}"), form)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_category(&self, id: i64) -> Result<Reply<serde_json::Value>, AppError> {
        self.delete(&format!("/api/admin/categories/{id}")).await
    }

    // --- Groups ---

    #[tracing::instrument(skip(self))]
    pub async fn list_groups(&self) -> Result<Vec<Group>, AppError> {
        Ok(list(self.get("/api/admin/groups").await?))
    }

    #[tracing::instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_group(&self, form: &TaxonomyForm) -> Result<Reply<Group>, AppError> {
        validate(form)?;
        self.post_json("/api/admin/groups", form).await
    }

    #[tracing::instrument(skip(self, form))]
    pub async fn update_group(&self, id: i64, form: &TaxonomyForm) -> Result<Reply<Group>, AppError> {
        validate(form)?;
        self.put_json(&format!("/api/admin/groups/{id}"), form).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_group(&self, id: i64) -> Result<Reply<serde_json::Value>, AppError> {
        self.delete(&format!("/api/admin/groups/{id}")).await
    }

    // --- Journals ---

    #[tracing::instrument(skip(self))]
    pub async fn list_journals(&self) -> Result<Vec<Journal>, AppError> {
        Ok(list(self.get("/api/admin/journals").await?))
    }

    #[tracing::instrument(skip(self, form), fields(title = %form.title))]
    pub async fn create_journal(&self, form: &JournalForm) -> Result<Reply<Journal>, AppError> {
        validate(form)?;
        check_cover(form)?;
        self.post_multipart("/api/admin/journals", to_form(form, None)?)
            .await
    }

    #[tracing::instrument(skip(self, form))]
    pub async fn update_journal(&self, id: i64, form: &JournalForm) -> Result<Reply<Journal>, AppError> {
        validate(form)?;
        check_cover(form)?;
        self.post_multipart(
            &format!("/api/admin/journals/{id}"),
            to_form(form, Some("PUT"))?,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_journal(&self, id: i64) -> Result<Reply<serde_json::Value>, AppError> {
        self.delete(&format!("/api/admin/journals/{id}")).await
    }
}
