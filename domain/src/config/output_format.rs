//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a finished report is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full Markdown report: header, synthesis, every individual review (default)
    #[default]
    Markdown,
    /// Only the synthesized review
    Synthesis,
    /// The report as JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Synthesis => "synthesis",
            OutputFormat::Json => "json",
        }
    }

    /// Conventional file extension for a report in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown | OutputFormat::Synthesis => "md",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" | "full" => Ok(OutputFormat::Markdown),
            "synthesis" => Ok(OutputFormat::Synthesis),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::UnknownOutputFormat(other.to_string())),
        }
    }
}
