//! CLI command definitions.

pub mod items;

use clap::{Parser, Subcommand, ValueEnum};
use ruffnote_core::service::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION};

/// CLI client for the ruffnote API.
#[derive(Debug, Parser)]
#[command(name = "ruffnote-client")]
#[command(about = "CLI client for the ruffnote API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "RUFFNOTE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Bearer token sent with item requests.
    #[arg(long, env = "RUFFNOTE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Registered service name.
    #[arg(long, default_value = DEFAULT_SERVICE_NAME)]
    pub service: String,

    /// Registered service version.
    #[arg(long = "service-version", default_value = DEFAULT_SERVICE_VERSION)]
    pub service_version: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Item management.
    Items(items::ItemsCommand),
    /// Show the service registration metadata.
    Discovery,
}
