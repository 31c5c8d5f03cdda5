use reqwest::multipart::{Form, Part};
use shared_types::{
    AppError, JournalForm, ManuscriptSubmission, PostForm, ProfileUpdate, RegisterRequest, Upload,
};

/// A request body that goes out as `multipart/form-data`.
pub trait MultipartBody {
    /// Plain text fields. Optional values that are unset are left out.
    fn text_fields(&self) -> Vec<(&'static str, String)>;

    /// The file part, with the field name the API expects.
    fn upload(&self) -> Option<(&'static str, &Upload)>;
}

/// Builds the form. `method_override` adds the `_method` field for
/// frameworks that only parse multipart bodies on POST.
pub fn to_form<B: MultipartBody + ?Sized>(
    body: &B,
    method_override: Option<&str>,
) -> Result<Form, AppError> {
    let mut form = Form::new();
    for (name, value) in body.text_fields() {
        form = form.text(name, value);
    }
    if let Some(method) = method_override {
        form = form.text("_method", method.to_string());
    }
    if let Some((name, upload)) = body.upload() {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|_| {
                AppError::bad_request(format!(
                    "{} has an unsupported file type.",
                    upload.file_name
                ))
            })?;
        form = form.part(name, part);
    }
    Ok(form)
}

fn flag(active: bool) -> String {
    if active { "1" } else { "0" }.to_string()
}

fn push_opt(fields: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        fields.push((name, v.to_string()));
    }
}

impl MultipartBody for RegisterRequest {
    fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("password", self.password.clone()),
            ("password_confirmation", self.password_confirmation.clone()),
            ("user_type", self.user_type.code().to_string()),
        ];
        push_opt(&mut fields, "phone", &self.phone);
        push_opt(&mut fields, "affiliation", &self.affiliation);
        fields
    }

    fn upload(&self) -> Option<(&'static str, &Upload)> {
        self.resume.as_ref().map(|u| ("resume", u))
    }
}

impl MultipartBody for ProfileUpdate {
    fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.clone()), ("email", self.email.clone())];
        push_opt(&mut fields, "phone", &self.phone);
        push_opt(&mut fields, "affiliation", &self.affiliation);
        fields
    }

    fn upload(&self) -> Option<(&'static str, &Upload)> {
        self.image.as_ref().map(|u| ("image", u))
    }
}

impl MultipartBody for JournalForm {
    fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("title", self.title.clone())];
        push_opt(&mut fields, "issn", &self.issn);
        push_opt(&mut fields, "description", &self.description);
        if let Some(id) = self.category_id {
            fields.push(("category_id", id.to_string()));
        }
        if let Some(id) = self.group_id {
            fields.push(("group_id", id.to_string()));
        }
        fields.push(("status", flag(self.active)));
        fields
    }

    fn upload(&self) -> Option<(&'static str, &Upload)> {
        self.image.as_ref().map(|u| ("image", u))
    }
}

impl MultipartBody for PostForm {
    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.body.clone()),
            ("status", flag(self.active)),
        ]
    }

    fn upload(&self) -> Option<(&'static str, &Upload)> {
        self.image.as_ref().map(|u| ("image", u))
    }
}

impl MultipartBody for ManuscriptSubmission {
    fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("journal_id", self.journal_id.to_string()),
            ("title", self.title.clone()),
            ("abstract", self.summary.clone()),
        ];
        push_opt(&mut fields, "keywords", &self.keywords);
        fields
    }

    fn upload(&self) -> Option<(&'static str, &Upload)> {
        Some(("file", &self.file))
    }
}
