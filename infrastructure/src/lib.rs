//! Infrastructure layer for trial-by-hex
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenRouter invoker, configuration file
//! loading, and filesystem storage for documents and reports.

pub mod config;
pub mod openrouter;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileOpenRouterConfig, FileOutputConfig, FilePanelConfig,
};
pub use openrouter::{OpenRouterConfig, OpenRouterError, OpenRouterInvoker};
pub use storage::{StorageError, read_document, write_report};
