pub mod form_sheet;
pub mod list;

use std::collections::HashMap;

use api::ApiClient;
use shared_types::{AppError, Blog, News, PostForm};

/// Blog posts and news items share one admin screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostKind {
    Blog,
    News,
}

impl PostKind {
    pub fn singular(&self) -> &'static str {
        match self {
            PostKind::Blog => "Blog post",
            PostKind::News => "News item",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            PostKind::Blog => "Blog posts",
            PostKind::News => "News",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PostKind::Blog => "Long-form articles shown on the public blog.",
            PostKind::News => "Announcements shown in the public news feed.",
        }
    }

    /// Blog posts name an author; news items are published by the site.
    pub fn has_author(&self) -> bool {
        matches!(self, PostKind::Blog)
    }

    pub async fn list(self, client: &ApiClient) -> Result<Vec<PostRow>, AppError> {
        match self {
            PostKind::Blog => Ok(client
                .list_blogs()
                .await?
                .into_iter()
                .map(PostRow::from)
                .collect()),
            PostKind::News => Ok(client
                .list_news()
                .await?
                .into_iter()
                .map(PostRow::from)
                .collect()),
        }
    }

    pub async fn save(
        self,
        client: &ApiClient,
        id: Option<i64>,
        form: &PostForm,
    ) -> Result<String, AppError> {
        let fallback = format!("{} saved", self.singular());
        let message = match (self, id) {
            (PostKind::Blog, None) => client.create_blog(form).await?.message_or(&fallback),
            (PostKind::Blog, Some(id)) => client.update_blog(id, form).await?.message_or(&fallback),
            (PostKind::News, None) => client.create_news(form).await?.message_or(&fallback),
            (PostKind::News, Some(id)) => client.update_news(id, form).await?.message_or(&fallback),
        };
        Ok(message)
    }

    pub async fn delete(self, client: &ApiClient, id: i64) -> Result<String, AppError> {
        let fallback = format!("{} deleted", self.singular());
        let reply = match self {
            PostKind::Blog => client.delete_blog(id).await?,
            PostKind::News => client.delete_news(id).await?,
        };
        Ok(reply.message_or(&fallback))
    }
}

/// A blog post or news item as the shared list shows it.
#[derive(Clone, Debug, PartialEq)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub active: bool,
    pub created_at: Option<String>,
}

impl From<Blog> for PostRow {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            body: b.body,
            image: b.image,
            author: b.author,
            active: b.active,
            created_at: b.created_at,
        }
    }
}

impl From<News> for PostRow {
    fn from(n: News) -> Self {
        Self {
            id: n.id,
            title: n.title,
            body: n.body,
            image: n.image,
            author: None,
            active: n.active,
            created_at: n.created_at,
        }
    }
}

impl From<&PostRow> for PostForm {
    fn from(row: &PostRow) -> Self {
        Self {
            title: row.title.clone(),
            body: row.body.clone(),
            active: row.active,
            image: None,
        }
    }
}

/// The body goes out as `description`, so the API reports its errors there.
pub(crate) fn body_error(errors: &HashMap<String, String>) -> Option<String> {
    errors.get("body").or_else(|| errors.get("description")).cloned()
}
