use shared_types::{AppError, User, UserForm};

use crate::client::{list, ApiClient, Reply};
use crate::validate;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(list(self.get("/api/admin/users").await?))
    }

    /// New accounts need a password; edits may leave it empty.
    #[tracing::instrument(skip(self, form), fields(email = %form.email, role = %form.user_type))]
    pub async fn create_user(&self, form: &UserForm) -> Result<Reply<User>, AppError> {
        if form.password.as_deref().map_or(true, str::is_empty) {
            let mut fields = std::collections::HashMap::new();
            fields.insert("password".to_string(), "Password is required".to_string());
            return Err(AppError::validation(
                "Please correct the highlighted fields.",
                fields,
            ));
        }
        validate(form)?;
        self.post_json("/api/admin/users", form).await
    }

    #[tracing::instrument(skip(self, form), fields(role = %form.user_type))]
    pub async fn update_user(&self, id: i64, form: &UserForm) -> Result<Reply<User>, AppError> {
        let mut form = form.clone();
        if form.password.as_deref().is_some_and(str::is_empty) {
            form.password = None;
        }
        validate(&form)?;
        self.put_json(&format!("/api/admin/users/{id}"), &form)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<Reply<serde_json::Value>, AppError> {
        self.delete(&format!("/api/admin/users/{id}")).await
    }
}
