//! Final report value object and its assembler

use super::outcome::{ReviewOutcome, SynthesisResult};
use super::verdict::Verdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a completed run produced (Value Object)
///
/// Owns copies of all text; nothing borrows from request buffers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Panel title, e.g. "Trial by Hex+"
    pub panel_title: String,
    pub document_id: String,
    pub created_at: DateTime<Utc>,
    pub verdict: Verdict,
    pub synthesis: SynthesisResult,
    /// One entry per reviewer, in panel order
    pub outcomes: Vec<ReviewOutcome>,
}

impl Report {
    /// Combine the pieces of a run into a report.
    ///
    /// Pure: no I/O, and the outcome order is kept exactly as given.
    pub fn assemble(
        panel_title: impl Into<String>,
        document_id: impl Into<String>,
        outcomes: Vec<ReviewOutcome>,
        synthesis: SynthesisResult,
        verdict: Verdict,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            panel_title: panel_title.into(),
            document_id: document_id.into(),
            created_at,
            verdict,
            synthesis,
            outcomes,
        }
    }

    pub fn reviewer_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> impl Iterator<Item = &ReviewOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Reviewers that fell through their whole fallback chain
    pub fn degraded(&self) -> impl Iterator<Item = &ReviewOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn passed(&self) -> bool {
        self.verdict.is_pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Model;
    use crate::panel::ReviewerSpec;
    use chrono::TimeZone;

    fn outcomes() -> Vec<ReviewOutcome> {
        vec![
            ReviewOutcome::success(
                1,
                ReviewerSpec::new(Model::Gpt51, "critic"),
                Model::Gpt51,
                "first",
            ),
            ReviewOutcome::failure(2, ReviewerSpec::new(Model::Gpt5Mini, "tester"), "timeout"),
            ReviewOutcome::success(
                3,
                ReviewerSpec::new(Model::ClaudeSonnet45, "rigor"),
                Model::ClaudeHaiku45,
                "third",
            ),
        ]
    }

    #[test]
    fn test_assemble_preserves_order() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let report = Report::assemble(
            "Trial by Hex",
            "paper.md",
            outcomes(),
            SynthesisResult::new(Model::ClaudeOpus45, "Overall: PASS"),
            Verdict::Pass,
            at,
        );

        let positions: Vec<usize> = report.outcomes.iter().map(|o| o.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(report.reviewer_count(), 3);
        assert_eq!(report.successful().count(), 2);
        assert_eq!(report.degraded().count(), 1);
        assert_eq!(report.created_at, at);
        assert!(report.passed());
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let build = || {
            Report::assemble(
                "Trial by Hex",
                "paper.md",
                outcomes(),
                SynthesisResult::new(Model::ClaudeOpus45, "REVISE"),
                Verdict::Revise,
                at,
            )
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_report_json_shape() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let report = Report::assemble(
            "Trial by Hex",
            "paper.md",
            outcomes(),
            SynthesisResult::new(Model::ClaudeOpus45, "REVISE"),
            Verdict::Revise,
            at,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verdict"], "revise");
        assert_eq!(json["outcomes"][1]["error"], "timeout");
        assert!(json["outcomes"][0].get("error").is_none());
        assert_eq!(json["synthesis"]["model"], "anthropic/claude-opus-4.5");
    }
}
