//! Progress notification port
//!
//! Defines the interface for reporting progress during a trial run.

use trial_domain::{Model, Phase};

/// What finished within a phase
#[derive(Debug, Clone, Copy)]
pub struct TaskCompletion<'a> {
    /// Reviewer label, or the synthesis model for the synthesis phase
    pub label: &'a str,
    pub requested: &'a Model,
    /// Model that produced the text; `None` when every attempt failed
    pub responded_by: Option<&'a Model>,
    /// Fallback position that answered, when one did
    pub fallback_attempt: Option<usize>,
}

impl TaskCompletion<'_> {
    pub fn success(&self) -> bool {
        self.responded_by.is_some()
    }

    pub fn used_fallback(&self) -> bool {
        self.responded_by
            .is_some_and(|m| self.fallback_attempt.is_some() || m != self.requested)
    }
}

/// Callback for progress updates during a trial run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a task completes within a phase
    fn on_task_complete(&self, phase: &Phase, task: &TaskCompletion<'_>);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &Phase, _task: &TaskCompletion<'_>) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
