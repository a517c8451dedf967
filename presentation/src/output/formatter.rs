//! Output formatter trait

use trial_domain::{OutputFormat, Report};

/// Trait for formatting trial reports
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, report: &Report) -> String;

    /// Format as JSON
    fn format_json(&self, report: &Report) -> Result<String, serde_json::Error>;

    /// Format synthesis only (concise output)
    fn format_synthesis_only(&self, report: &Report) -> String;

    /// Dispatch on the configured format
    fn render(&self, report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Markdown => Ok(self.format(report)),
            OutputFormat::Synthesis => Ok(self.format_synthesis_only(report)),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
