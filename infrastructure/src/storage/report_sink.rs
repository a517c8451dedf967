//! Writes rendered reports to disk

use super::error::StorageError;
use std::path::Path;
use tracing::info;

/// Write `contents` to `path`, creating parent directories as needed.
pub async fn write_report(path: &Path, contents: &str) -> Result<(), StorageError> {
    let io_error = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    tokio::fs::write(path, contents).await.map_err(io_error)?;
    info!("Report written to {}", path.display());
    Ok(())
}
