//! Configuration errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("OpenRouter API key not set: export {env} or add it to a .env file")]
    MissingCredential { env: String },
}
