/// Largest image the client will send (covers, avatars, post images).
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Largest document the client will send (resumes, manuscripts).
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// A file picked in the browser, ready to go out as a multipart part.
#[derive(Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Build an upload, guessing the content type from the file name when the
    /// browser did not report one.
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| mime_from_filename(&file_name).to_string());
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Reject files over `limit` bytes with a message naming the limit.
    pub fn check_size(&self, limit: usize) -> Result<(), String> {
        if self.size() > limit {
            Err(format!(
                "{} is larger than {} MB",
                self.file_name,
                limit / (1024 * 1024)
            ))
        } else {
            Ok(())
        }
    }
}

// Bytes are omitted so uploads never flood logs.
impl std::fmt::Debug for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Content type for the file extensions the API accepts.
pub fn mime_from_filename(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
