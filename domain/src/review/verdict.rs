//! Verdict derivation from synthesis text.
//!
//! Pure keyword matching, no I/O. The rules, applied to the upper-cased text:
//!
//! | Condition | Verdict |
//! |-----------|---------|
//! | contains `PASS`, no `REJECT` | [`Verdict::Pass`] |
//! | contains `REJECT` | [`Verdict::Reject`] |
//! | contains `REVISE` or `NEEDS REVISION` | [`Verdict::Revise`] |
//! | otherwise | [`Verdict::Unknown`] |
//!
//! # Known limitation
//!
//! Matching is on substrings, not on a parsed verdict line. A synthesis that
//! says "this does not pass" still counts as containing `PASS`, "passage"
//! contains `PASS`, and a model that echoes the template line
//! `PASS | REVISE | REJECT` back verbatim yields `Reject`. The rules above are
//! kept literal for compatibility with existing reports.

use serde::{Deserialize, Serialize};

/// Coarse outcome of a run, derived from the synthesis text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Revise,
    Reject,
    Unknown,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Label written into the report header
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASSED",
            Verdict::Revise => "NEEDS REVISION",
            Verdict::Reject => "REJECTED",
            Verdict::Unknown => "UNDETERMINED",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Revise => write!(f, "Revise"),
            Verdict::Reject => write!(f, "Reject"),
            Verdict::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Derive a [`Verdict`] from synthesis text by case-insensitive keyword scan.
///
/// # Examples
///
/// ```
/// use trial_domain::review::verdict::{extract_verdict, Verdict};
///
/// assert_eq!(extract_verdict("**Overall:** PASS"), Verdict::Pass);
/// assert_eq!(extract_verdict("Overall: reject"), Verdict::Reject);
/// assert_eq!(extract_verdict("Needs revision before release"), Verdict::Revise);
/// assert_eq!(extract_verdict("No conclusion reached"), Verdict::Unknown);
/// ```
pub fn extract_verdict(synthesis: &str) -> Verdict {
    let upper = synthesis.to_uppercase();
    let has_reject = upper.contains("REJECT");

    if upper.contains("PASS") && !has_reject {
        Verdict::Pass
    } else if has_reject {
        Verdict::Reject
    } else if upper.contains("REVISE") || upper.contains("NEEDS REVISION") {
        Verdict::Revise
    } else {
        Verdict::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass() {
        assert_eq!(extract_verdict("## VERDICT\n**Overall:** PASS"), Verdict::Pass);
        assert_eq!(extract_verdict("overall: pass"), Verdict::Pass);
    }

    #[test]
    fn test_reject_wins_over_pass() {
        assert_eq!(
            extract_verdict("Would not PASS review. Overall: REJECT"),
            Verdict::Reject
        );
    }

    #[test]
    fn test_revise() {
        assert_eq!(extract_verdict("Overall: REVISE"), Verdict::Revise);
        assert_eq!(extract_verdict("The draft needs revision."), Verdict::Revise);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(extract_verdict(""), Verdict::Unknown);
        assert_eq!(extract_verdict("The reviewers disagreed."), Verdict::Unknown);
    }

    #[test]
    fn test_substring_limitation_is_literal() {
        // "passage" contains PASS; kept as-is
        assert_eq!(extract_verdict("The opening passage is weak. REVISE."), Verdict::Pass);
        // echoed template line contains REJECT
        assert_eq!(extract_verdict("**Overall:** PASS | REVISE | REJECT"), Verdict::Reject);
    }

    #[test]
    fn test_deterministic() {
        let text = "Mixed feedback; overall REVISE";
        assert_eq!(extract_verdict(text), extract_verdict(text));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Verdict::Pass.label(), "PASSED");
        assert_eq!(Verdict::Revise.label(), "NEEDS REVISION");
        assert_eq!(Verdict::Reject.label(), "REJECTED");
        assert_eq!(Verdict::Unknown.label(), "UNDETERMINED");
    }
}
