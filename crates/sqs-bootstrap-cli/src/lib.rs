//! # SQS Bootstrap CLI
//!
//! Command-line tool for checking how a messaging client would bootstrap
//! in the current environment.
//!
//! This module provides CLI commands for:
//! - Reporting the detected deployment tier
//! - Building a session from configuration and reporting its settings
//! - Showing the resolved configuration

use clap::{Parser, Subcommand};
use serde::Serialize;
use sqs_bootstrap::environment::TIER_VARIABLE;
use sqs_bootstrap::{
    Config, ConfigurationError, EnvironmentSource, Session, SessionError, SessionFactory, Tier,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

// ============================================================================
// CLI Structure
// ============================================================================

/// SQS Bootstrap CLI - check messaging client session setup
#[derive(Parser)]
#[command(name = "sqs-bootstrap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check messaging client session bootstrap")]
pub struct Cli {
    /// Configuration file path (YAML, TOML or JSON)
    #[arg(short, long, env = "SQS_BOOTSTRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level, used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    pub json_logs: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the detected deployment tier
    Tier,

    /// Build a session and report its settings
    Check {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the resolved configuration
    Config {
        /// Output format for configuration
        #[arg(short, long, default_value = "yaml")]
        format: ConfigFormat,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// Configuration format options
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

// ============================================================================
// CLI Error Types
// ============================================================================

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML output failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 1,
            Self::Session(e) if e.is_fatal() => 2,
            Self::Session(_) => 3,
            Self::Json(_) | Self::Yaml(_) => 4,
        }
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Summary of a built session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub tier: String,
    pub mode: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub max_retries: Option<u32>,
    pub attributes: usize,
}

impl SessionReport {
    pub fn new(tier: Tier, session: &Session, config: &Config) -> Self {
        Self {
            tier: tier.to_string(),
            mode: session.mode().to_string(),
            region: session.region().map(str::to_string),
            endpoint: session.endpoint().map(str::to_string),
            max_retries: session.max_retries(),
            attributes: config.attributes.len(),
        }
    }

    pub fn render(&self, format: &OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(format!(
                "tier:        {}\nmode:        {}\nregion:      {}\nendpoint:    {}\nmax retries: {}",
                self.tier,
                self.mode,
                self.region.as_deref().unwrap_or("-"),
                self.endpoint.as_deref().unwrap_or("default"),
                self.max_retries
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "default".to_string()),
            )),
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Main CLI entry point
pub async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    initialize_logging(&cli);

    let output = execute(cli, &SessionFactory::new()).await?;
    println!("{}", output);

    Ok(())
}

/// Run a parsed command and return its output
pub async fn execute(cli: Cli, factory: &SessionFactory) -> Result<String, CliError> {
    match cli.command {
        Commands::Tier => Ok(execute_tier_command(factory)),
        Commands::Check { format } => {
            let config = load_configuration(cli.config.as_ref())?;
            execute_check_command(factory, &config, &format).await
        }
        Commands::Config { format } => {
            let config = load_configuration(cli.config.as_ref())?;
            execute_config_command(&config, &format)
        }
    }
}

fn initialize_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = installed {
        debug!(error = %e, "Tracing subscriber already installed, keeping it");
    }
}

fn load_configuration(path: Option<&PathBuf>) -> Result<Config, ConfigurationError> {
    debug!(path = ?path, "Loading configuration");
    Config::load(path.map(|p| p.as_path()))
}

fn execute_tier_command(factory: &SessionFactory) -> String {
    let raw = factory
        .environment()
        .var(TIER_VARIABLE)
        .unwrap_or_else(|| "<unset>".to_string());
    format!("{} ({}={})", factory.tier(), TIER_VARIABLE, raw)
}

async fn execute_check_command(
    factory: &SessionFactory,
    config: &Config,
    format: &OutputFormat,
) -> Result<String, CliError> {
    info!(mode = %factory.plan(config), "Building session");

    let session = factory.new_session(config).await?;
    SessionReport::new(factory.tier(), &session, config).render(format)
}

fn execute_config_command(config: &Config, format: &ConfigFormat) -> Result<String, CliError> {
    match format {
        ConfigFormat::Yaml => Ok(serde_yaml::to_string(config)?),
        ConfigFormat::Json => Ok(serde_json::to_string_pretty(config)?),
    }
}
