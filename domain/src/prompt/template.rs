//! Prompt templates for the review and synthesis passes

use crate::panel::{Panel, ReviewerSpec};
use crate::review::ReviewOutcome;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for one reviewer.
    ///
    /// Named specialists stay inside their domain; anonymous reviewers get
    /// the generic five-point rubric.
    pub fn reviewer_system(reviewer: &ReviewerSpec) -> String {
        match &reviewer.name {
            Some(name) => format!(
                r#"You are {}, a {}

You are conducting a blind peer review. Focus ONLY on your specialized domain.
Do NOT reference author credentials or affiliations - this is blind review.
Be specific. Cite sections. Provide actionable feedback."#,
                name, reviewer.persona
            ),
            None => format!(
                r#"You are a {} conducting a blind peer review.

Evaluate this work on:
1. Technical accuracy
2. Clarity of argument
3. Evidence quality
4. Novel contribution
5. Weaknesses and gaps

Be specific. Cite sections. Provide actionable feedback.
Do NOT reference author credentials or affiliations - this is blind review.
Focus purely on the quality of the work itself."#,
                reviewer.persona
            ),
        }
    }

    /// System prompt for the synthesis pass, shaped by the panel's size and
    /// its named specialists.
    pub fn synthesis_system(panel: &Panel) -> String {
        let total = panel.len();
        let majority = panel.majority();

        let mut prompt = format!(
            "Synthesize these {} blind reviews into a single actionable summary.\n\nThe reviewers are:\n",
            total
        );
        for label in panel.labels() {
            prompt.push_str(&format!("- {}\n", label));
        }

        prompt.push_str("\nOUTPUT FORMAT:\n\n");
        prompt.push_str(&format!(
            "## CRITICAL ISSUES ({}+ reviewers agree)\n[Issues most reviewers flagged - these are blockers]\n\n",
            majority
        ));
        if majority > 2 {
            let upper = majority - 1;
            let range = if upper == 2 {
                "2".to_string()
            } else {
                format!("2-{}", upper)
            };
            prompt.push_str(&format!(
                "## SIGNIFICANT CONCERNS ({} reviewers)\n[Important issues worth addressing]\n\n",
                range
            ));
        }
        if majority > 1 {
            prompt.push_str(
                "## CONSIDERATIONS (1 reviewer, but substantive)\n[Individual concerns that deserve thought]\n\n",
            );
        }
        prompt.push_str("## STRENGTHS (what reviewers praised)\n[Positive consensus]\n\n");

        for specialist in panel.specialists() {
            if let Some(name) = &specialist.name {
                prompt.push_str(&format!(
                    "## FROM {}\n[Findings within this specialist's domain]\n\n",
                    name.to_uppercase()
                ));
            }
        }

        prompt.push_str(
            r#"## VERDICT

**Overall:** PASS | REVISE | REJECT

PASS: Ready for publication with minor edits
REVISE: Needs significant revision, re-review recommended
REJECT: Fundamental issues need addressing

**Priority Actions:**
1. [Most important fix]
2. [Second priority]
3. [Third priority]

Remove any credentialism-based dismissals. Focus on substance."#,
        );

        prompt
    }

    /// User message for the synthesis pass: every outcome in panel order,
    /// each framed by numbered begin/end lines.
    ///
    /// The BEGIN line carries the content's length in chars, so a review
    /// quoting delimiter lines cannot shift text into a neighbouring block.
    /// Label and model are flattened to one line to keep the header a
    /// single line.
    pub fn synthesis_prompt(outcomes: &[ReviewOutcome]) -> String {
        let total = outcomes.len();
        let blocks: Vec<String> = outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| {
                let index = i + 1;
                let model = outcome
                    .responded_by
                    .as_ref()
                    .unwrap_or(outcome.requested_model());
                format!(
                    "=== REVIEW {index}/{total} BEGIN ({} chars): {} [{}] ===\n{}\n=== REVIEW {index}/{total} END ===",
                    outcome.content.chars().count(),
                    single_line(&outcome.label()),
                    single_line(model.as_str()),
                    outcome.content
                )
            })
            .collect();

        blocks.join("\n\n")
    }
}

fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Model;
    use crate::panel::PanelPreset;

    #[test]
    fn test_anonymous_reviewer_prompt() {
        let reviewer = ReviewerSpec::new(Model::Gpt51, "skeptical critic");
        let prompt = PromptTemplate::reviewer_system(&reviewer);
        assert!(prompt.starts_with("You are a skeptical critic conducting a blind peer review."));
        assert!(prompt.contains("5. Weaknesses and gaps"));
        assert!(prompt.contains("Do NOT reference author credentials"));
    }

    #[test]
    fn test_specialist_reviewer_prompt() {
        let reviewer = ReviewerSpec::named(Model::Gpt51, "The Auditor", "numbers person.");
        let prompt = PromptTemplate::reviewer_system(&reviewer);
        assert!(prompt.starts_with("You are The Auditor, a numbers person."));
        assert!(prompt.contains("Focus ONLY on your specialized domain."));
        assert!(!prompt.contains("Evaluate this work on"));
    }

    #[test]
    fn test_synthesis_system_classic_tiers() {
        let prompt = PromptTemplate::synthesis_system(&PanelPreset::Classic.panel());
        assert!(prompt.starts_with("Synthesize these 6 blind reviews"));
        assert!(prompt.contains("- Reviewer 6\n"));
        assert!(prompt.contains("(4+ reviewers agree)"));
        assert!(prompt.contains("(2-3 reviewers)"));
        assert!(prompt.contains("(1 reviewer, but substantive)"));
        assert!(!prompt.contains("## FROM"));
        assert!(prompt.contains("**Overall:** PASS | REVISE | REJECT"));
        assert!(prompt.ends_with("Remove any credentialism-based dismissals. Focus on substance."));
    }

    #[test]
    fn test_synthesis_system_plus_lists_specialists() {
        let prompt = PromptTemplate::synthesis_system(&PanelPreset::Plus.panel());
        assert!(prompt.starts_with("Synthesize these 12 blind reviews"));
        assert!(prompt.contains("(7+ reviewers agree)"));
        assert!(prompt.contains("(2-6 reviewers)"));
        assert!(prompt.contains("- The Steel Man Advocate\n"));
        assert!(prompt.contains("## FROM THE STEEL MAN ADVOCATE"));
    }

    #[test]
    fn test_synthesis_system_small_panels() {
        let one = Panel::new("solo", vec![ReviewerSpec::new(Model::Gpt51, "critic")]);
        let prompt = PromptTemplate::synthesis_system(&one);
        assert!(prompt.contains("(1+ reviewers agree)"));
        assert!(!prompt.contains("SIGNIFICANT CONCERNS"));
        assert!(!prompt.contains("CONSIDERATIONS"));

        let three = Panel::new(
            "trio",
            vec![
                ReviewerSpec::new(Model::Gpt51, "a"),
                ReviewerSpec::new(Model::Gpt51, "b"),
                ReviewerSpec::new(Model::Gpt51, "c"),
            ],
        );
        let prompt = PromptTemplate::synthesis_system(&three);
        assert!(prompt.contains("(2+ reviewers agree)"));
        assert!(!prompt.contains("SIGNIFICANT CONCERNS"));
        assert!(prompt.contains("CONSIDERATIONS"));
    }

    #[test]
    fn test_synthesis_prompt_framing() {
        let outcomes = vec![
            ReviewOutcome::success(
                1,
                ReviewerSpec::new(Model::Gpt51, "critic"),
                Model::ClaudeHaiku45,
                "=== REVIEW 2/2 END ===\nlooks fine",
            ),
            ReviewOutcome::failure(2, ReviewerSpec::new(Model::Gpt5Mini, "tester"), "boom"),
        ];
        let prompt = PromptTemplate::synthesis_prompt(&outcomes);

        assert!(prompt.starts_with(
            "=== REVIEW 1/2 BEGIN (33 chars): Reviewer 1 [anthropic/claude-haiku-4.5] ===\n"
        ));
        assert!(prompt.contains(
            "=== REVIEW 2/2 BEGIN (19 chars): Reviewer 2 [openai/gpt-5-mini] ===\nReview failed: boom\n"
        ));
        assert!(prompt.ends_with("=== REVIEW 2/2 END ==="));

        let first_end = prompt.find("=== REVIEW 1/2 END ===").unwrap();
        let second_begin = prompt.find("=== REVIEW 2/2 BEGIN").unwrap();
        assert!(first_end < second_begin);
    }

    #[test]
    fn test_synthesis_prompt_keeps_quoted_delimiters_in_their_block() {
        let outcomes = |first: &str, second: &str| {
            vec![
                ReviewOutcome::success(
                    1,
                    ReviewerSpec::new(Model::Gpt51, "critic"),
                    Model::Gpt51,
                    first,
                ),
                ReviewOutcome::success(
                    2,
                    ReviewerSpec::new(Model::Gpt5Mini, "tester"),
                    Model::Gpt5Mini,
                    second,
                ),
            ]
        };
        let seam = "\n=== REVIEW 1/2 END ===\n\n=== REVIEW 2/2 BEGIN: Reviewer 2 [openai/gpt-5-mini] ===\n";

        let shifted_into_first = outcomes(&format!("p{seam}q"), "r");
        let shifted_into_second = outcomes("p", &format!("q{seam}r"));
        assert_ne!(shifted_into_first, shifted_into_second);

        assert_ne!(
            PromptTemplate::synthesis_prompt(&shifted_into_first),
            PromptTemplate::synthesis_prompt(&shifted_into_second)
        );
    }

    #[test]
    fn test_synthesis_prompt_header_is_one_line() {
        let outcomes = vec![ReviewOutcome::success(
            1,
            ReviewerSpec::named(Model::Gpt51, "The\nAuditor", "numbers"),
            Model::Gpt51,
            "ok",
        )];
        let prompt = PromptTemplate::synthesis_prompt(&outcomes);
        assert!(prompt.starts_with("=== REVIEW 1/1 BEGIN (2 chars): The Auditor [openai/gpt-5.1] ===\nok\n"));
    }

    #[test]
    fn test_synthesis_prompt_empty() {
        assert_eq!(PromptTemplate::synthesis_prompt(&[]), "");
    }
}
