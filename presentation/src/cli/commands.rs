//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use trial_domain::{OutputFormat, PanelPreset};

/// Built-in panel to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PanelArg {
    /// Six anonymous reviewers
    Classic,
    /// The classic six plus six named specialists
    Plus,
}

impl From<PanelArg> for PanelPreset {
    fn from(arg: PanelArg) -> Self {
        match arg {
            PanelArg::Classic => PanelPreset::Classic,
            PanelArg::Plus => PanelPreset::Plus,
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Full Markdown report with every individual review
    Markdown,
    /// Only the synthesized review
    Synthesis,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Synthesis => OutputFormat::Synthesis,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for trial-by-hex
#[derive(Parser, Debug)]
#[command(name = "trial-by-hex")]
#[command(author, version, about = "Multi-model blind peer review via OpenRouter")]
#[command(long_about = r#"
Trial by Hex sends a document to a panel of reviewer models and merges their
blind reviews into one verdict.

The process has two phases:
1. Blind Review: every reviewer reads the document in parallel; a failing
   model is replaced by the fallback chain
2. Synthesis: one model groups the reviews into consensus tiers and ends with
   PASS, REVISE or REJECT

The OpenRouter API key is read from OPENROUTER_API_KEY (a .env file works too).

Configuration files are loaded from (in priority order):
1. --config <path>           Explicit config file
2. ./trial-by-hex.toml       Project-level config
3. ~/.config/trial-by-hex/config.toml   Global config

Example:
  trial-by-hex thesis.md thesis_review.md
  trial-by-hex --panel plus --format json draft.md review.json
  trial-by-hex --check paper.md > /dev/null
"#)]
pub struct Cli {
    /// Document to review (UTF-8 text)
    #[arg(required_unless_present_any = ["list_reviewers", "show_config"])]
    pub input: Option<PathBuf>,

    /// Where to write the report (stdout when omitted)
    pub output: Option<PathBuf>,

    /// Built-in panel [default: classic, or the configured preset]
    #[arg(short, long, value_enum)]
    pub panel: Option<PanelArg>,

    /// Print the panel's reviewers and exit
    #[arg(long)]
    pub list_reviewers: bool,

    /// Report format [default: markdown, or the configured format]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Model used for the synthesis pass
    #[arg(long, value_name = "MODEL")]
    pub synthesis_model: Option<String>,

    /// Fallback models, tried in order (can be specified multiple times; replaces the configured chain)
    #[arg(long = "fallback", value_name = "MODEL")]
    pub fallback: Vec<String>,

    /// Per-call timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Exit with status 1 unless the verdict is PASS
    #[arg(long)]
    pub check: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "trial-by-hex",
            "--panel",
            "plus",
            "--format",
            "json",
            "--fallback",
            "openai/gpt-5-nano",
            "--fallback",
            "anthropic/claude-haiku-4.5",
            "--timeout",
            "90",
            "--check",
            "-vv",
            "paper.md",
            "out/review.json",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("paper.md")));
        assert_eq!(cli.output, Some(PathBuf::from("out/review.json")));
        assert_eq!(cli.panel, Some(PanelArg::Plus));
        assert_eq!(cli.format.map(OutputFormat::from), Some(OutputFormat::Json));
        assert_eq!(cli.fallback.len(), 2);
        assert_eq!(cli.timeout, Some(90));
        assert!(cli.check);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["trial-by-hex"]).is_err());
    }

    #[test]
    fn test_list_reviewers_without_input() {
        let cli = Cli::try_parse_from(["trial-by-hex", "--list-reviewers", "-p", "plus"]).unwrap();
        assert!(cli.list_reviewers);
        assert!(cli.input.is_none());
        assert_eq!(PanelPreset::from(cli.panel.unwrap()), PanelPreset::Plus);
    }
}
