//! Progress reporting for trial runs
//!
//! Both reporters draw on stderr so a report piped to stdout stays clean.

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use trial_application::ports::progress::{ProgressNotifier, TaskCompletion};
use trial_domain::Phase;

/// Reports progress during a run with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Review => "Phase 1: Blind Review",
            Phase::Synthesis => "Phase 2: Synthesis",
        }
    }

    fn phase_short_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Review => "Phase 1",
            Phase::Synthesis => "Phase 2",
        }
    }

    fn task_status(task: &TaskCompletion<'_>) -> String {
        match task.responded_by {
            Some(model) if task.used_fallback() => {
                format!("{} {} (via {})", "v".yellow(), task.label, model)
            }
            Some(_) => format!("{} {}", "v".green(), task.label),
            None => format!("{} {}", "x".red(), task.label),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(phase).to_string());
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, task: &TaskCompletion<'_>) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::task_status(task));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete!", Self::phase_short_name(phase).green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_display_name(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &Phase, task: &TaskCompletion<'_>) {
        eprintln!("  {}", ProgressReporter::task_status(task));
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trial_domain::Model;

    #[test]
    fn test_task_status() {
        colored::control::set_override(false);
        let requested = Model::Gpt51;
        let fallback = Model::Gpt5Nano;

        let task = TaskCompletion {
            label: "Reviewer 2",
            requested: &requested,
            responded_by: Some(&fallback),
            fallback_attempt: Some(3),
        };
        assert_eq!(
            ProgressReporter::task_status(&task),
            "v Reviewer 2 (via openai/gpt-5-nano)"
        );

        let failed = TaskCompletion {
            responded_by: None,
            ..task
        };
        assert_eq!(ProgressReporter::task_status(&failed), "x Reviewer 2");
    }

    #[test]
    fn test_reporter_tolerates_hidden_target() {
        let reporter = ProgressReporter {
            multi: MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden()),
            phase_bar: Mutex::new(None),
        };
        let model = Model::Gpt51;
        reporter.on_phase_start(&Phase::Review, 2);
        reporter.on_task_complete(
            &Phase::Review,
            &TaskCompletion {
                label: "Reviewer 1",
                requested: &model,
                responded_by: Some(&model),
                fallback_attempt: None,
            },
        );
        reporter.on_phase_complete(&Phase::Review);
        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }
}
