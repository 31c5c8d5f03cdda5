pub mod form_sheet;
pub mod list;

use api::ApiClient;
use shared_types::{AppError, Category, Group, TaxonomyForm};

/// Categories and groups share one admin screen; this says which one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaxonomyKind {
    Category,
    Group,
}

impl TaxonomyKind {
    pub fn singular(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "Category",
            TaxonomyKind::Group => "Group",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "Categories",
            TaxonomyKind::Group => "Groups",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "Subject areas journals are filed under.",
            TaxonomyKind::Group => "Publishing groups that own journals.",
        }
    }

    /// Categories carry a server-generated slug; groups do not.
    pub fn has_slug(&self) -> bool {
        matches!(self, TaxonomyKind::Category)
    }

    pub async fn list(self, client: &ApiClient) -> Result<Vec<TaxonomyRow>, AppError> {
        match self {
            TaxonomyKind::Category => Ok(client
                .list_categories()
                .await?
                .into_iter()
                .map(TaxonomyRow::from)
                .collect()),
            TaxonomyKind::Group => Ok(client
                .list_groups()
                .await?
                .into_iter()
                .map(TaxonomyRow::from)
                .collect()),
        }
    }

    /// Create when `id` is `None`, update otherwise. Returns the API's
    /// confirmation message.
    pub async fn save(
        self,
        client: &ApiClient,
        id: Option<i64>,
        form: &TaxonomyForm,
    ) -> Result<String, AppError> {
        let fallback = format!("{} saved", self.singular());
        let message = match (self, id) {
            (TaxonomyKind::Category, None) => client.create_category(form).await?.message_or(&fallback),
            (TaxonomyKind::Category, Some(id)) => {
                client.update_category(id, form).await?.message_or(&fallback)
            }
            (TaxonomyKind::Group, None) => client.create_group(form).await?.message_or(&fallback),
            (TaxonomyKind::Group, Some(id)) => client.update_group(id, form).await?.message_or(&fallback),
        };
        Ok(message)
    }

    pub async fn delete(self, client: &ApiClient, id: i64) -> Result<String, AppError> {
        let fallback = format!("{} deleted", self.singular());
        let reply = match self {
            TaxonomyKind::Category => client.delete_category(id).await?,
            TaxonomyKind::Group => client.delete_group(id).await?,
        };
        Ok(reply.message_or(&fallback))
    }
}

/// A category or group as the shared list shows it.
#[derive(Clone, Debug, PartialEq)]
pub struct TaxonomyRow {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub active: bool,
}

impl From<Category> for TaxonomyRow {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            active: c.active,
        }
    }
}

impl From<Group> for TaxonomyRow {
    fn from(g: Group) -> Self {
        Self {
            id: g.id,
            name: g.name,
            slug: None,
            description: g.description,
            active: g.active,
        }
    }
}

impl From<&TaxonomyRow> for TaxonomyForm {
    fn from(row: &TaxonomyRow) -> Self {
        Self {
            name: row.name.clone(),
            description: row.description.clone(),
            active: row.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn group_rows_have_no_slug() {
        let row = TaxonomyRow::from(Group {
            id: 4,
            name: "Open Science Press".into(),
            description: None,
            active: true,
        });
        assert_eq!(row.slug, None);
        assert!(!TaxonomyKind::Group.has_slug());
    }

    #[test]
    fn edit_form_prefills_from_row() {
        let row = TaxonomyRow::from(Category {
            id: 2,
            name: "Physics".into(),
            slug: Some("physics".into()),
            description: Some("Matter and energy".into()),
            active: false,
        });
        let form = TaxonomyForm::from(&row);
        assert_eq!(form.name, "Physics");
        assert_eq!(form.description.as_deref(), Some("Matter and energy"));
        assert!(!form.active);
    }
}
