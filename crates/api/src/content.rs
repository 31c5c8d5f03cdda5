use shared_types::{AppError, Blog, News, PostForm, MAX_IMAGE_BYTES};

use crate::client::{list, required, ApiClient, Reply};
use crate::multipart::to_form;
use crate::validate;

fn check_image(form: &PostForm) -> Result<(), AppError> {
    match &form.image {
        Some(image) if !image.is_image() => Err(AppError::bad_request("Attach an image file.")),
        Some(image) => image.check_size(MAX_IMAGE_BYTES).map_err(AppError::bad_request),
        None => Ok(()),
    }
}

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn public_blogs(&self) -> Result<Vec<Blog>, AppError> {
        Ok(list(self.get("/api/blog").await?))
    }

    #[tracing::instrument(skip(self))]
    pub async fn public_blog(&self, id: i64) -> Result<Blog, AppError> {
        required(self.get(&format!("/api/blog/{id}")).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn public_news(&self) -> Result<Vec<News>, AppError> {
        Ok(list(self.get("/api/news").await?))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        Ok(list(self.get("/api/admin/blogs").await?))
    }

    #[tracing::instrument(skip(self, form), fields(title = %form.title))]
    pub async fn create_blog(&self, form: &PostForm) -> Result<Reply<Blog>, AppError> {
        validate(form)?;
        check_image(form)?;
        self.post_multipart("/api/admin/blogs", to_form(form, None)?)
            .await
    }

    #[tracing::instrument(skip(self, form))]
    pub async fn update_blog(&self, id: i64, form: &PostForm) -> Result<Reply<Blog>, AppError> {
        validate(form)?;
        check_image(form)?;
        self.post_multipart(&format!("/api/admin/blogs/{id}"), to_form(form, Some("PUT"))?)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_blog(&self, id: i64) -> Result<Reply<serde_json::Value>, AppError> {
        self.delete(&format!("/api/admin/blogs/{id}")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_news(&self) -> Result<Vec<News>, AppError> {
        Ok(list(self.get("/api/admin/news").await?))
    }

    #[tracing::instrument(skip(self, form), fields(title = %form.title))]
    pub async fn create_news(&self, form: &PostForm) -> Result<Reply<News>, AppError> {
        validate(form)?;
        check_image(form)?;
        self.post_multipart("/api/admin/news", to_form(form, None)?)
            .await
    }

    #[tracing::instrument(skip(self, form))]
    pub async fn update_news(&self, id: i64, form: &PostForm) -> Result<Reply<News>, AppError> {
        validate(form)?;
        check_image(form)?;
        self.post_multipart(&format!("/api/admin/news/{id}"), to_form(form, Some("PUT"))?)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_news(&self, id: i64) -> Result<Reply<serde_json::Value>, AppError> {
        self.delete(&format!("/api/admin/news/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, ClientConfig, Upload};

    fn offline_client() -> ApiClient {
        ApiClient::new(ClientConfig::new("http://127.0.0.1:9", None))
    }

    #[tokio::test]
    async fn empty_body_fails_locally() {
        let mut form = PostForm::blank();
        form.title = "Launch".into();
        let err = offline_client().create_news(&form).await.unwrap_err();
        assert_eq!(err.field("body"), Some("Body is required"));
    }

    #[tokio::test]
    async fn oversized_image_is_rejected() {
        let mut form = PostForm::blank();
        form.title = "Launch".into();
        form.body = "Text".into();
        form.image = Some(Upload::new("big.png", None, vec![0; MAX_IMAGE_BYTES + 1]));
        let err = offline_client().create_blog(&form).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "big.png is larger than 2 MB");
    }
}
