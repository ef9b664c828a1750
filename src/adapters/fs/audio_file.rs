//! Reads an audio file from disk into a `SelectedFile`.

use crate::domain::{DomainError, SelectedFile};
use std::path::Path;
use tokio::fs;
use tracing::warn;

/// Extension the reference backend accepts. Others are sent anyway, with a warning.
const BACKEND_EXTENSION: &str = "mp3";

/// MIME type by file extension (case-insensitive). Unknown types go as octet-stream.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("ogg") | Some("oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

/// Load `path` fully into memory.
///
/// # Errors
/// * `File` - the path cannot be read or is not a regular file
pub async fn load_audio_file(path: impl AsRef<Path>) -> Result<SelectedFile, DomainError> {
    let path = path.as_ref();

    let meta = fs::metadata(path)
        .await
        .map_err(|e| DomainError::File(format!("{}: {}", path.display(), e)))?;
    if !meta.is_file() {
        return Err(DomainError::File(format!(
            "{}: not a regular file",
            path.display()
        )));
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| DomainError::File(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let is_backend_type = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(BACKEND_EXTENSION));
    if !is_backend_type {
        warn!(file = %file_name, "backend expects .mp3 audio; uploading anyway");
    }
    if bytes.is_empty() {
        warn!(file = %file_name, "selected file is empty");
    }

    Ok(SelectedFile::new(file_name, mime_for_path(path), bytes))
}
