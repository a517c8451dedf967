//! Prompt domain
//!
//! Templates for the reviewer and synthesis passes.

mod template;

pub use template::PromptTemplate;
