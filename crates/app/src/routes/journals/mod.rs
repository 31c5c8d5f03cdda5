pub mod form_sheet;
pub mod list;

use shared_types::{Category, Group};

/// Name of the category or group with `id`, for table cells.
fn lookup_name<T>(items: &[T], id: Option<i64>, key: impl Fn(&T) -> (i64, &str)) -> Option<&str> {
    let id = id?;
    items
        .iter()
        .map(key)
        .find(|(item_id, _)| *item_id == id)
        .map(|(_, name)| name)
}

pub(crate) fn category_name(categories: &[Category], id: Option<i64>) -> Option<&str> {
    lookup_name(categories, id, |c| (c.id, c.name.as_str()))
}

pub(crate) fn group_name(groups: &[Group], id: Option<i64>) -> Option<&str> {
    lookup_name(groups, id, |g| (g.id, g.name.as_str()))
}
