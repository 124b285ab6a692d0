//! VSPC CLI - Command-line interface for the VSPC REST API client.
//!
//! Useful for scripting, checking an API key, and inspecting companies,
//! backup servers and alarms from the terminal.

mod commands;

use clap::{Parser, Subcommand};
use tracing::debug;

use vspc_core::config::AppConfig;
use vspc_core::error::VspcResult;
use vspc_core::logging;

/// vspc - query a Veeam Service Provider Console from the terminal.
#[derive(Parser)]
#[command(
    name = "vspc",
    version,
    about = "Veeam Service Provider Console REST API client",
    long_about = "A command-line client for the Veeam Service Provider Console REST API.\n\
                  Settings come from the config file, then VSPC_API_HOST / VSPC_API_KEY /\n\
                  VSPC_PAGE_SIZE, then command-line flags."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Server endpoint (overrides config and environment).
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// API access token (overrides config and environment).
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Items requested per page on collection endpoints.
    #[arg(short = 'p', long, global = true)]
    page_size: Option<u32>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show general server information.
    About,
    /// Check that the configured access token is accepted.
    Login,
    /// List and inspect companies.
    Companies {
        #[command(subcommand)]
        action: commands::companies::CompaniesAction,
    },
    /// List and inspect backup servers.
    Servers {
        #[command(subcommand)]
        action: commands::servers::ServersAction,
    },
    /// Triggered alarms and alarm templates.
    Alarms {
        #[command(subcommand)]
        action: commands::alarms::AlarmsAction,
    },
}

#[tokio::main]
async fn main() -> VspcResult<()> {
    let cli = Cli::parse();

    // Load configuration: file, then environment, then flags
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(std::path::Path::new(path))?,
        None => AppConfig::load_default()?,
    };
    config.apply_env()?;
    if let Some(endpoint) = cli.endpoint {
        config.server.endpoint = endpoint;
    }
    if let Some(token) = cli.token {
        config.server.access_token = token;
    }
    if let Some(page_size) = cli.page_size {
        config.server.page_size = page_size;
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    let log_dir = config.effective_log_dir()?;
    let _guard = logging::init_logging(log_level, &log_dir, config.logging.json_output)?;

    debug!("vspc CLI v{}", vspc_core::constants::APP_VERSION);

    let api = commands::create_api_client(&config)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::About => commands::about::run(&api, cli.format).await,
        Commands::Login => commands::about::login(&api, cli.format).await,
        Commands::Companies { action } => {
            commands::companies::run(&api, action, cli.format).await
        }
        Commands::Servers { action } => {
            commands::servers::run(&api, action, cli.format).await
        }
        Commands::Alarms { action } => {
            commands::alarms::run(&api, action, cli.format).await
        }
    }
}
