/// Whether a form sheet creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit => "Save changes",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "created",
            FormMode::Edit => "updated",
        }
    }
}
