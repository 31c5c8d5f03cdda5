use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::upload::Upload;
use crate::wire;

/// Subject area a journal is filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "status", deserialize_with = "wire::active_flag")]
    pub active: bool,
}

/// Editorial group (publisher imprint) that owns journals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "status", deserialize_with = "wire::active_flag")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Journal {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub issn: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "wire::opt_id")]
    pub group_id: Option<i64>,
    /// Relative storage path or absolute URL of the cover image.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "status", deserialize_with = "wire::active_flag")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/edit body shared by categories and groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct TaxonomyForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, max = 120, message = "Name must be 2 to 120 characters"))
    )]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        rename = "status",
        serialize_with = "wire::flag_as_int",
        deserialize_with = "wire::active_flag"
    )]
    pub active: bool,
}

impl TaxonomyForm {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            description: None,
            active: true,
        }
    }
}

impl From<&Category> for TaxonomyForm {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            active: category.active,
        }
    }
}

impl From<&Group> for TaxonomyForm {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone(),
            active: group.active,
        }
    }
}

/// Journal create/edit body; multipart because of the cover image.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct JournalForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Title must be at least 2 characters"))
    )]
    pub title: String,
    pub issn: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub group_id: Option<i64>,
    pub active: bool,
    pub image: Option<Upload>,
}

impl JournalForm {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            issn: None,
            description: None,
            category_id: None,
            group_id: None,
            active: true,
            image: None,
        }
    }
}

impl From<&Journal> for JournalForm {
    fn from(journal: &Journal) -> Self {
        Self {
            title: journal.title.clone(),
            issn: journal.issn.clone(),
            description: journal.description.clone(),
            category_id: journal.category_id,
            group_id: journal.group_id,
            active: journal.active,
            image: None,
        }
    }
}
