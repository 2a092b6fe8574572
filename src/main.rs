use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use leagues::badge::BadgeClient;
use leagues::cache::BadgeCache;
use leagues::catalog::CatalogClient;
use leagues::client::HttpClient;
use leagues::config::{self, Config};
use leagues::data_provider::SportsDataProvider;
use leagues::selection::SelectionController;
use leagues::{commands, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "leagues")]
#[command(
    about = "Browse the TheSportsDB league catalog",
    long_about = "Browse the TheSportsDB league catalog\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error) or a tracing filter directive
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Serve fixture data instead of calling the API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List leagues, optionally filtered
    List {
        /// Case-insensitive substring of the league name
        #[arg(short, long)]
        search: Option<String>,

        /// Exact sport category (e.g. Soccer)
        #[arg(short = 'p', long)]
        sport: Option<String>,
    },
    /// List the sport categories present in the catalog
    Sports,
    /// Show how many leagues each sport has
    Stats {
        /// Sports shown before the rest are grouped as "Others" (defaults to config)
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
    /// Show the badge of a league's first season
    Badge {
        /// League ID (e.g., 4328)
        league_id: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let filter = EnvFilter::try_new(log_level.to_lowercase()).unwrap_or_else(|e| {
        eprintln!("Invalid log level {}: {}", log_level, e);
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("api_base_url: {}", cfg.api_base_url);
    println!("stats_top_n: {}", cfg.stats_top_n);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_provider(cli: &Cli, config: &Config) -> anyhow::Result<Arc<dyn SportsDataProvider>> {
    #[cfg(feature = "development")]
    {
        if cli.mock {
            return Ok(Arc::new(leagues::dev::mock_client::MockClient::new()));
        }
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    let client = HttpClient::with_base_url(config.api_base_url.as_str())
        .context("Failed to create TheSportsDB client")?;
    Ok(Arc::new(client))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    catalog: &CatalogClient,
    badges: Arc<BadgeClient>,
    command: Commands,
    config: &Config,
) -> anyhow::Result<()> {
    let display = &config.display;
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::List { search, sport } => commands::list::run(catalog, search, sport, display).await,
        Commands::Sports => commands::sports::run(catalog).await,
        Commands::Stats { top } => {
            commands::stats::run(catalog, top.unwrap_or(config.stats_top_n), display).await
        }
        Commands::Badge { league_id } => {
            let mut selection = SelectionController::new(badges);
            commands::badge::run(catalog, &mut selection, &league_id, display).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a client)
    if let Some(Commands::Config) = cli.command {
        handle_config_command();
        return;
    }

    let provider = match create_provider(&cli, &config) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    };
    let catalog = CatalogClient::new(provider.clone());
    let badges = Arc::new(BadgeClient::new(provider, Arc::new(BadgeCache::new())));

    let Some(command) = cli.command else {
        if let Err(e) = tui::run(catalog, badges, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(&catalog, badges, command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
