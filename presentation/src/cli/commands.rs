//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use content_request_domain::FormVariant;
use std::path::PathBuf;

/// Output format for submission results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable messages
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for content_request_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Form variant selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Webhook URL typed into the form, session login tracked
    Generic,
    /// Fixed webhook, editable client list
    Static,
    /// Fixed webhook, clients fetched from the record store
    Remote,
}

impl From<VariantArg> for FormVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Generic => FormVariant::Generic,
            VariantArg::Static => FormVariant::Static,
            VariantArg::Remote => FormVariant::Remote,
        }
    }
}

/// CLI arguments for content-request
#[derive(Parser, Debug)]
#[command(name = "content-request")]
#[command(author, version, about = "Send content requests to a webhook")]
#[command(long_about = r#"
Content Request collects a topic, keyword and client, validates them, and
posts the request as JSON to a webhook.

Without a subcommand an interactive form starts. Fill it with
/set <field> <value> and send it with /submit.

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./content-request.toml          Project-level config
3. ~/.config/content-request/config.toml   Global config

The static and remote forms post to a fixed webhook, so they refuse to
start unless `[webhook] url` is set. The generic form asks for the URL
instead. A minimal config file:

  [webhook]
  url = "https://hooks.example.com/content"

Example:
  content-request --variant static
  content-request submit --topic "Rust errors" --keyword thiserror \
      --email me@example.com --client koala
  content-request --variant remote clients
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Form variant (overrides [form] variant)
    #[arg(long, value_enum, global = true)]
    pub variant: Option<VariantArg>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one content request and exit
    Submit(SubmitArgs),
    /// List the client directory for the chosen variant
    Clients,
}

/// Field values for a one-shot submission
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Topic or title of the content
    #[arg(long)]
    pub topic: String,

    /// Primary keyword
    #[arg(long)]
    pub keyword: String,

    /// Contact email (static and remote variants)
    #[arg(long, default_value = "")]
    pub email: String,

    /// Client name, or its position in the directory
    #[arg(long)]
    pub client: String,

    /// Target word count
    #[arg(long, value_name = "N", default_value_t = content_request_domain::DEFAULT_WORD_COUNT)]
    pub words: u32,

    /// Additional details for the writer
    #[arg(long, default_value = "")]
    pub details: String,

    /// Target audience (generic variant)
    #[arg(long, default_value = "")]
    pub audience: String,

    /// Webhook URL (generic variant; overrides [webhook] url)
    #[arg(long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Name recorded as the submitter (generic variant)
    #[arg(long)]
    pub login: Option<String>,
}

impl SubmitArgs {
    /// Form fields with the client left for the caller to resolve
    pub fn to_fields(&self) -> content_request_domain::FormFields {
        content_request_domain::FormFields {
            topic_title: self.topic.clone(),
            primary_keyword: self.keyword.clone(),
            email: self.email.clone(),
            target_word_count: self.words,
            target_audience: self.audience.clone(),
            client_name: self.client.clone(),
            additional_details: self.details.clone(),
            webhook_url: self.webhook_url.clone().unwrap_or_default(),
        }
    }
}
