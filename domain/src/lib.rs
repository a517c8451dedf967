//! Domain layer for trial-by-hex
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! A [`Panel`] is an ordered list of [`ReviewerSpec`]s, each pairing a model
//! with a reviewing persona. Built-in panels come from [`PanelPreset`].
//!
//! ## Trial
//!
//! A trial fans one [`Document`] out to every reviewer, collects one
//! [`ReviewOutcome`] per reviewer (degraded reviewers carry a placeholder),
//! synthesizes them, extracts a [`Verdict`], and assembles a [`Report`].

pub mod config;
pub mod core;
pub mod orchestration;
pub mod panel;
pub mod prompt;
pub mod review;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{document::Document, error::DomainError, model::Model};
pub use orchestration::Phase;
pub use panel::{Panel, PanelPreset, ReviewerSpec};
pub use prompt::PromptTemplate;
pub use review::{
    FAILURE_PLACEHOLDER_PREFIX, Report, ReviewOutcome, SynthesisResult, Verdict, extract_verdict,
};
pub use session::{
    entities::{Message, Role},
    request::InvocationRequest,
};
