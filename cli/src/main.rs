//! CLI entrypoint for Trial by Hex
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use trial_application::{ProgressNotifier, RunTrialUseCase, TrialConfig};
use trial_domain::{Model, OutputFormat};
use trial_infrastructure::{
    ConfigLoader, FileConfig, OpenRouterConfig, OpenRouterInvoker, read_document, write_report,
};
use trial_presentation::{
    Cli, ConsoleFormatter, MarkdownFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env is fine; the key may already be exported
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting Trial by Hex");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    for warning in file_config.warnings() {
        warn!("{}", warning);
    }
    apply_cli_overrides(&cli, &mut file_config);

    if !file_config.output.color {
        ConsoleFormatter::set_color(false);
    }
    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .or(file_config.output.format)
        .unwrap_or_default();

    let trial_config = file_config.panel.to_trial_config();

    if cli.list_reviewers {
        println!("{}", ConsoleFormatter::panel(&trial_config.panel));
        return Ok(ExitCode::SUCCESS);
    }

    let Some(input) = cli.input.as_deref() else {
        bail!("An input document is required");
    };

    // Everything that can be checked before a call is made
    trial_config
        .validate()
        .context("Invalid panel configuration")?;
    let api_key = file_config.openrouter.resolve_api_key()?;

    // === Dependency Injection ===
    let invoker = Arc::new(OpenRouterInvoker::new(openrouter_config(
        &file_config,
        &trial_config,
        api_key,
    ))?);

    let document = read_document(input).await?;
    info!(
        "Loaded {} ({} bytes)",
        document.id(),
        document.content().len()
    );

    let cancellation = CancellationToken::new();
    spawn_ctrl_c_handler(cancellation.clone());

    if !cli.quiet {
        print_banner(&trial_config, input);
    }

    let use_case =
        RunTrialUseCase::new(invoker, trial_config).with_cancellation(cancellation);

    let report = if cli.quiet {
        use_case.execute(document).await?
    } else {
        let progress: Box<dyn ProgressNotifier> = if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        use_case
            .execute_with_progress(document, progress.as_ref())
            .await?
    };

    // === Output ===
    let rendered = MarkdownFormatter
        .render(&report, format)
        .context("Failed to serialize the report")?;
    match cli.output.as_deref() {
        Some(path) => write_report(path, &rendered).await?,
        None => println!("{}", rendered),
    }

    if !cli.quiet {
        eprintln!(
            "{}",
            ConsoleFormatter::summary(&report, cli.output.as_deref())
        );
    }

    if cli.check && !report.passed() {
        info!("--check: verdict is {}, exiting with failure", report.verdict);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Stderr logging filtered by `-v` (or `RUST_LOG`), plus an optional daily
/// rolling file. The returned guard must live until exit to flush the file.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("trial-by-hex")
        .filename_suffix("log")
        .build(dir)
        .with_context(|| format!("Cannot open log directory {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Ok(Some(guard))
}

/// Command-line flags win over every configuration source
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(panel) = cli.panel {
        config.panel.preset = panel.into();
        config.panel.reviewers = None;
        config.panel.title = None;
    }
    if let Some(model) = &cli.synthesis_model {
        config.panel.synthesis_model = Some(Model::from(model.as_str()));
    }
    if !cli.fallback.is_empty() {
        let chain: Vec<Model> = cli.fallback.iter().map(|m| Model::from(m.as_str())).collect();
        config.panel.fallback_models = Some(chain.clone());
        config.panel.synthesis_fallback_models = Some(chain);
    }
    if let Some(seconds) = cli.timeout {
        config.openrouter.timeout_seconds = Some(seconds);
    }
}

fn openrouter_config(
    file_config: &FileConfig,
    trial_config: &TrialConfig,
    api_key: String,
) -> OpenRouterConfig {
    let openrouter = &file_config.openrouter;
    let timeout = openrouter
        .timeout_seconds
        .map(Duration::from_secs)
        .unwrap_or_else(|| file_config.panel.preset.request_timeout());

    OpenRouterConfig {
        api_key,
        base_url: openrouter.base_url.clone(),
        referer: openrouter.referer.clone(),
        title: openrouter
            .title
            .clone()
            .unwrap_or_else(|| trial_config.panel.title().to_string()),
        timeout,
    }
}

fn spawn_ctrl_c_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling in-flight reviews");
            token.cancel();
        }
    });
}

fn print_banner(config: &TrialConfig, input: &Path) {
    let line = "=".repeat(60);
    eprintln!("{}", line);
    eprintln!("  {} - Multi-Model Blind Peer Review", config.panel.title().to_uppercase());
    eprintln!("{}", line);
    eprintln!();
    eprintln!("Document:  {}", input.display());
    eprintln!("Reviewers: {}", config.panel.len());
    eprintln!("Synthesis: {}", config.synthesis_model);
    eprintln!(
        "Fallbacks: {}",
        config
            .fallback_models
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    eprintln!();
}
