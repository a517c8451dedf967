//! Reads the document under review from disk

use super::error::StorageError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use trial_domain::Document;

/// Read `path` as UTF-8 text. The document id is the file name.
pub async fn read_document(path: &Path) -> Result<Document, StorageError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
        _ => StorageError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let content = String::from_utf8(bytes).map_err(|_| StorageError::NotUtf8(path.to_path_buf()))?;
    debug!("Read {} ({} bytes)", path.display(), content.len());

    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(id, content))
}
