//! Markdown report rendering
//!
//! The layout matches reports written by earlier releases so existing
//! tooling that greps `**Verdict:**` keeps working.

use crate::output::formatter::OutputFormatter;
use trial_domain::core::string::excerpt;
use trial_domain::{Report, ReviewOutcome};

/// Persona characters shown under each review
const FOCUS_EXCERPT_CHARS: usize = 100;

/// Formats reports as Markdown files
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn header(report: &Report) -> String {
        format!(
            "# {} Review\n\n**Document:** {}\n**Date:** {}\n**Verdict:** {}\n**Reviewers:** {} AI reviewers via OpenRouter\n",
            report.panel_title,
            report.document_id,
            report.created_at.to_rfc3339(),
            report.verdict.label(),
            report.reviewer_count()
        )
    }

    fn individual(outcome: &ReviewOutcome) -> String {
        let mut section = format!(
            "### {}. {}\n**Model:** {}\n",
            outcome.position,
            outcome.label(),
            outcome.requested_model()
        );
        if outcome.used_fallback()
            && let Some(model) = &outcome.responded_by
        {
            match outcome.fallback_attempt {
                Some(attempt) => section.push_str(&format!(
                    "**Answered by:** {} (fallback {})\n",
                    model, attempt
                )),
                None => section.push_str(&format!("**Answered by:** {}\n", model)),
            }
        }
        section.push_str(&format!(
            "**Focus:** {}\n\n{}\n\n---\n\n",
            excerpt(&outcome.reviewer.persona, FOCUS_EXCERPT_CHARS),
            outcome.content
        ));
        section
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> String {
        let mut output = Self::header(report);

        output.push_str("\n---\n\n## Synthesized Review\n\n");
        output.push_str(&report.synthesis.content);
        output.push_str("\n\n---\n\n## Individual Reviews\n\n");

        for outcome in &report.outcomes {
            output.push_str(&Self::individual(outcome));
        }

        output
    }

    fn format_json(&self, report: &Report) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    fn format_synthesis_only(&self, report: &Report) -> String {
        let mut output = Self::header(report);
        output.push_str(&format!(
            "**Synthesized by:** {}\n\n---\n\n{}\n",
            report.synthesis.model, report.synthesis.content
        ));
        output
    }
}
