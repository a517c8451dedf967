//! Configuration file loading for trial-by-hex
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./trial-by-hex.toml` or `./.trial-by-hex.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/trial-by-hex/config.toml`
//! 4. `TRIAL_BY_HEX_*` environment variables (`__` separates section and key)
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{FileConfig, FileOpenRouterConfig, FileOutputConfig, FilePanelConfig};
pub use loader::ConfigLoader;
