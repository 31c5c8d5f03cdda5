use dioxus::prelude::*;
use shared_types::Upload;

/// Reads the first file picked in a file input. `Ok(None)` when the picker
/// was cleared.
pub async fn first_upload(evt: &FormEvent) -> Result<Option<Upload>, String> {
    let files = evt.files();
    let Some(file) = files.first() else {
        return Ok(None);
    };
    let name = file.name();
    let content_type = file.content_type();
    match file.read_bytes().await {
        Ok(bytes) => Ok(Some(Upload::new(name, content_type, bytes.to_vec()))),
        Err(e) => {
            tracing::warn!(file = %name, error = %e, "could not read picked file");
            Err("Failed to read file.".to_string())
        }
    }
}
