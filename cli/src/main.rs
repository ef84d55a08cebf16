//! CLI entrypoint for Content Request
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use content_request_application::{
    LoadDirectoryUseCase, NoSubmissionLogger, SubmissionLogger, SubmissionProgress,
    SubmitRequestUseCase,
};
use content_request_domain::{
    ConfigIssue, ConfigIssueCode, FormVariant, OutputFormat, SessionContext, Severity,
    SubmitAction,
};
use content_request_infrastructure::{
    ConfigLoader, FileConfig, HttpWebhookGateway, JsonlSubmissionLogger,
    RecordStoreDirectorySource, RecordStoreSettings,
};
use content_request_presentation::{
    Cli, Command, ConsoleFormatter, FormRepl, OutputConfig, ProgressMode, ReplConfig, SubmitArgs,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_config_sources() {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("{}", e))?
    };
    apply_overrides(&mut config, &cli);

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting Content Request ({} form)", config.form.variant);

    check_config(&config, cli.command.as_ref())?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
    };
    let show_progress = config.repl.show_progress && !cli.quiet;

    // === Dependency Injection ===
    let logger: Arc<dyn SubmissionLogger> = match config.logging.submission_log.as_deref() {
        Some(path) => match JsonlSubmissionLogger::open(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoSubmissionLogger),
        },
        None => Arc::new(NoSubmissionLogger),
    };

    let gateway = Arc::new(HttpWebhookGateway::new().context("Failed to build HTTP client")?);
    let submit = SubmitRequestUseCase::new(gateway, config.webhook.to_submission_params())
        .with_logger(logger.clone());

    let variant = config.form.variant;
    let settings = RecordStoreSettings::from_config(&config.record_store, config.webhook.timeout());
    let directory = match settings {
        Some(settings) if variant == FormVariant::Remote => {
            let source =
                RecordStoreDirectorySource::new(settings).context("Failed to build HTTP client")?;
            Some(LoadDirectoryUseCase::new(Arc::new(source)).with_logger(logger.clone()))
        }
        _ => None,
    };

    let mut session = SessionContext::for_variant(
        variant,
        config.form.login.clone(),
        config.directory.to_static_directory(),
    );

    let progress = ProgressMode::detect(show_progress, output.format).reporter();

    match cli.command {
        None => {
            let repl_config = ReplConfig {
                show_progress,
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
                export_path: PathBuf::from(&config.directory.export_path),
            };
            let mut repl = FormRepl::new(session, submit)
                .with_repl_config(repl_config)
                .with_output_config(output);
            if let Some(directory) = directory {
                repl = repl.with_directory(directory);
            }
            repl.run().await?;
        }
        Some(Command::Clients) => {
            if let Some(directory) = &directory {
                directory
                    .ensure_loaded_with_progress(&mut session, progress.as_ref())
                    .await?;
            }
            let listing = match output.format {
                OutputFormat::Json => ConsoleFormatter::format_directory_json(&session),
                OutputFormat::Text => ConsoleFormatter::format_directory(&session),
            };
            println!("{}", listing);
        }
        Some(Command::Submit(args)) => {
            if let Some(directory) = &directory {
                directory
                    .ensure_loaded_with_progress(&mut session, progress.as_ref())
                    .await?;
            }
            let sent = run_submit(&submit, &mut session, &args, output, progress.as_ref()).await?;
            if !sent {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Command-line flags take precedence over file values
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(variant) = cli.variant {
        config.form.variant = variant.into();
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if let Some(Command::Submit(args)) = &cli.command {
        if let Some(login) = &args.login {
            config.form.login = login.clone();
        }
        if let Some(url) = &args.webhook_url
            && !config.form.variant.collects_webhook_url()
        {
            config.webhook.url = Some(url.clone());
        }
    }
}

/// Initialize tracing; with `file` set, diagnostics go there instead of stderr
fn init_logging(verbose: u8, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(file) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let path = Path::new(file);
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", file))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Could not create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Print warnings and refuse to start on errors.
///
/// Listing clients never needs the webhook URL.
fn check_config(config: &FileConfig, command: Option<&Command>) -> Result<()> {
    let issues: Vec<ConfigIssue> = config
        .validate()
        .into_iter()
        .filter(|issue| {
            !(matches!(command, Some(Command::Clients))
                && issue.code == ConfigIssueCode::MissingWebhookUrl)
        })
        .collect();

    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        eprintln!("warning: {}", issue.message);
    }

    if ConfigIssue::has_errors(&issues) {
        let messages: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(())
}

/// Send one request; `Ok(false)` when it was rejected or not delivered
async fn run_submit(
    submit: &SubmitRequestUseCase,
    session: &mut SessionContext,
    args: &SubmitArgs,
    output: OutputConfig,
    progress: &dyn SubmissionProgress,
) -> Result<bool> {
    let mut fields = args.to_fields();
    // Directory names resolve by position or case-insensitively
    if !fields.client_name.is_empty() {
        match session.select_client(&fields.client_name) {
            Ok(name) => fields.client_name = name,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(false);
            }
        }
    }

    let outcome = submit
        .execute_with_progress(session, SubmitAction::new(fields), progress)
        .await;

    let (text, sent) = match (outcome, output.format) {
        (Ok(result), OutputFormat::Json) => {
            (ConsoleFormatter::format_result_json(&result), result.is_success())
        }
        (Ok(result), OutputFormat::Text) => {
            (ConsoleFormatter::format_result(&result), result.is_success())
        }
        (Err(e), OutputFormat::Json) => (ConsoleFormatter::format_issues_json(e.issues()), false),
        (Err(e), OutputFormat::Text) => (ConsoleFormatter::format_issues(e.issues()), false),
    };
    println!("{}", text);
    Ok(sent)
}
