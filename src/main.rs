//! Fedora Access CLI application
//!
//! Command-line tool for fetching datastream content and metadata from a
//! Fedora Commons repository.

use std::process;

use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use fedora_access::cli::{
    handle_config, handle_content, handle_metadata, load_config, Cli, Commands,
};
use fedora_access::errors::Result;

/// Handle for swapping the log filter once the configuration is known
type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    let filter_handle = init_logging(&cli);

    let config = load_config(&cli.global).await?;
    if let Some(handle) = filter_handle {
        apply_configured_level(&handle, &cli, &config.logging.level);
    }

    info!("Fedora Access v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Content(args) => {
            let fedora = config.build_remote()?;
            let mut stdout = tokio::io::stdout();
            handle_content(&fedora, args, &mut stdout).await
        }
        Commands::Metadata(args) => {
            let fedora = config.build_remote()?;
            handle_metadata(&fedora, args, &mut std::io::stdout()).await
        }
        Commands::Config => handle_config(&config, &mut std::io::stdout()),
    }
}

/// Initialize logging before the configuration is read
///
/// Logs go to stderr so streamed content on stdout stays clean. `RUST_LOG`
/// takes precedence over everything; otherwise the filter starts at the
/// verbosity flags' level and the returned handle lets the configured level
/// replace it later.
fn init_logging(cli: &Cli) -> Option<FilterHandle> {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(cli.log_directive(None)), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(cli.global.very_verbose),
        )
        .init();

    (!from_env).then_some(handle)
}

/// Switch the log filter to the level from the configuration file
fn apply_configured_level(handle: &FilterHandle, cli: &Cli, level: &str) {
    let directive = cli.log_directive(Some(level));
    match EnvFilter::try_new(&directive) {
        Ok(filter) => {
            if let Err(e) = handle.reload(filter) {
                warn!("Could not apply configured log level: {}", e);
            }
        }
        Err(e) => warn!("Ignoring invalid log level {:?}: {}", level, e),
    }
}
