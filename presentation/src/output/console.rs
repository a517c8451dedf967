//! Console output for run summaries and panel listings

use colored::Colorize;
use std::path::Path;
use trial_domain::core::string::{excerpt, first_line};
use trial_domain::{Panel, Report, Verdict};

/// Formats run results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colored output on or off (`[output] color`)
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Closing summary printed after a run
    pub fn summary(report: &Report, output_path: Option<&Path>) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("{} Complete", report.panel_title)));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Document:".cyan().bold(),
            report.document_id
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Verdict:".cyan().bold(),
            Self::verdict(report.verdict)
        ));

        let degraded: Vec<_> = report.degraded().collect();
        output.push_str(&format!(
            "{} {}/{} answered",
            "Reviewers:".cyan().bold(),
            report.reviewer_count() - degraded.len(),
            report.reviewer_count()
        ));
        let rescued = report.outcomes.iter().filter(|o| o.used_fallback()).count();
        if rescued > 0 {
            output.push_str(&format!(" ({} via fallback)", rescued));
        }
        output.push('\n');

        for outcome in degraded {
            output.push_str(&format!(
                "  {} {} [{}]: {}\n",
                "x".red(),
                outcome.label(),
                outcome.requested_model(),
                outcome.error.as_deref().unwrap_or("unknown error")
            ));
        }

        if let Some(path) = output_path {
            output.push_str(&format!(
                "{} {}\n",
                "Saved to:".cyan().bold(),
                path.display()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// One line per reviewer, for `--list-reviewers`
    pub fn panel(panel: &Panel) -> String {
        let mut output = format!(
            "{} ({} reviewers)\n\n",
            panel.title().bold(),
            panel.len()
        );
        for (i, reviewer) in panel.reviewers().iter().enumerate() {
            let label = reviewer.label(i + 1);
            output.push_str(&format!(
                "  {:>2}. {} {}\n      {}\n",
                i + 1,
                label.yellow().bold(),
                format!("[{}]", reviewer.model).dimmed(),
                excerpt(first_line(&reviewer.persona), 80)
            ));
        }
        output
    }

    fn verdict(verdict: Verdict) -> String {
        match verdict {
            Verdict::Pass => verdict.label().green().bold().to_string(),
            Verdict::Revise => verdict.label().yellow().bold().to_string(),
            Verdict::Reject => verdict.label().red().bold().to_string(),
            Verdict::Unknown => verdict.label().dimmed().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        "=".repeat(60).cyan().to_string()
    }
}
