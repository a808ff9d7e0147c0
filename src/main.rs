//! Manifest Union CLI application
//!
//! Command-line interface for merging a directory of dependency manifests
//! into one sorted, deduplicated CSV.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use manifest_union::cli::{handle_manifest, Cli, Commands};
use manifest_union::config::AppConfig;
use manifest_union::errors::Result;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse_args();

    let result = run(cli);

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let config = AppConfig::load(cli.global.config.as_deref())?;

    // Initialize logging based on verbosity
    init_logging(&cli, &config);

    info!("Manifest Union v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Manifest(args) => {
            info!("Executing manifest command");
            handle_manifest(args, &config, cli.global.quiet)
        }
    }
}

/// Initialize logging based on CLI verbosity and the configured default level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let default_level = config.logging.level().unwrap_or(tracing::Level::WARN);
    let log_level = cli.log_level(default_level);

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("manifest_union={}", log_level).parse() {
        filter = filter.add_directive(directive);
    }

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
