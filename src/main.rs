//! Archive Manifest CLI application
//!
//! Builds `manifest.json` for a chapter/season/version map archive, and
//! offers POI location search, POI file editing and version token
//! diagnostics.

use std::process;

use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

use archive_manifest::cli::{
    handle_generate, handle_poi, handle_resolve, handle_search, Cli, Commands,
};
use archive_manifest::config::AppConfig;
use archive_manifest::errors::Result;
use archive_manifest::AppError;

fn main() {
    let result = run();

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    let config = AppConfig::load(cli.global.config.as_deref())?;

    init_logging(&cli, &config)?;

    info!("Archive Manifest v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command_or_default() {
        Commands::Generate(args) => {
            info!("Executing generate command");
            handle_generate(args, &config)
        }
        Commands::Search(args) => {
            info!("Executing search command");
            handle_search(args, &config)
        }
        Commands::Resolve(args) => {
            info!("Executing resolve command");
            handle_resolve(args)
        }
        Commands::Poi(args) => {
            info!("Executing poi command");
            handle_poi(args)
        }
    }
}

/// Initialize logging based on CLI verbosity and configured level
fn init_logging(cli: &Cli, config: &AppConfig) -> Result<()> {
    let log_level = cli.log_level(config.logging.level()?);

    let directive: Directive = format!("archive_manifest={}", log_level)
        .parse()
        .map_err(|e| AppError::generic(format!("Invalid log directive: {}", e)))?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    // Logs share stderr with warnings so stdout stays the summary only
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
    Ok(())
}
