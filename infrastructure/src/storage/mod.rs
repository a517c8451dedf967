//! Document source and report sink on the local filesystem

mod document_source;
mod error;
mod report_sink;

pub use document_source::read_document;
pub use error::StorageError;
pub use report_sink::write_report;
