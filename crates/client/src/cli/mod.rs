//! CLI command definitions.

pub mod health;
pub mod quotes;
pub mod stats;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the roofquote API.
#[derive(Debug, Parser)]
#[command(name = "roofquote-client")]
#[command(about = "CLI client for the roofquote API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ROOFQUOTE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

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
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
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
    /// Submit and list quotes.
    Quotes(quotes::QuotesCommand),
    /// Distinct states, roof types and project dates.
    Filters,
    /// Aggregate statistics.
    Stats(stats::StatsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
