//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - OpenRouter model identities (vendor/name)
//! - [`document::Document`] - the text under review
//! - [`error::DomainError`] - domain-level errors

pub mod document;
pub mod error;
pub mod model;
pub mod string;
