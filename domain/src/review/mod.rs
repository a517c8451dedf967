//! Review results: per-reviewer outcomes, synthesis, verdict and the report.
//!
//! - [`ReviewOutcome`] - one panel entry's text (or failure placeholder)
//! - [`SynthesisResult`] - the consensus text from the synthesis model
//! - [`Verdict`] / [`extract_verdict`] - coarse outcome from synthesis text
//! - [`Report`] - the assembled artifact of a run

pub mod outcome;
pub mod report;
pub mod verdict;

pub use outcome::{FAILURE_PLACEHOLDER_PREFIX, ReviewOutcome, SynthesisResult};
pub use report::Report;
pub use verdict::{Verdict, extract_verdict};
