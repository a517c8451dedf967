//! Presentation layer for trial-by-hex
//!
//! This crate contains the CLI definition, report formatters and
//! progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, FormatArg, PanelArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::markdown::MarkdownFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
