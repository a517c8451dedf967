use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading documents and writing reports
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    #[error("Input file is not valid UTF-8: {0}")]
    NotUtf8(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
