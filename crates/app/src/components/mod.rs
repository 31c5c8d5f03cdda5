mod form_mode;
mod load_error;
mod manuscript_table;
mod status;

pub use form_mode::FormMode;
pub use load_error::LoadError;
pub use manuscript_table::ManuscriptTable;
pub use status::{ManuscriptStatusBadge, RoleBadge};
