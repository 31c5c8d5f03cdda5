use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::upload::Upload;
use crate::wire;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blog {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub title: String,
    #[serde(default, alias = "description", alias = "content")]
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, rename = "status", deserialize_with = "wire::active_flag")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct News {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub title: String,
    #[serde(default, alias = "description", alias = "content")]
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "status", deserialize_with = "wire::active_flag")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/edit body for blog posts and news items; multipart for the image.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct PostForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Title must be at least 3 characters"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Body is required"))
    )]
    pub body: String,
    pub active: bool,
    pub image: Option<Upload>,
}

impl PostForm {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            active: true,
            image: None,
        }
    }
}

impl From<&Blog> for PostForm {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            body: blog.body.clone(),
            active: blog.active,
            image: None,
        }
    }
}

impl From<&News> for PostForm {
    fn from(news: &News) -> Self {
        Self {
            title: news.title.clone(),
            body: news.body.clone(),
            active: news.active,
            image: None,
        }
    }
}

/// Plain-text preview of a post body: tags stripped, whitespace collapsed,
/// cut at `max_chars` on a char boundary with an ellipsis.
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let mut text = String::with_capacity(body.len());
    let mut in_tag = false;
    for ch in body.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let cut: String = collapsed.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}
