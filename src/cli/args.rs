//! Command-line argument parsing for Fedora Access
//!
//! This module defines the CLI structure using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Fedora Access - fetch datastreams from a Fedora Commons repository
#[derive(Parser, Debug)]
#[command(
    name = "fedora_access",
    version,
    about = "Fetch datastream content and metadata from a Fedora Commons repository",
    long_about = "Fetches datastream content and metadata from a Fedora Commons repository.
Content is streamed straight through without buffering; metadata is decoded from the datastream profile."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (trace level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - only warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fedora base URL (overrides config and FEDORA_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Object namespace prefix, e.g. "temp:" (overrides config and FEDORA_NAMESPACE)
    #[arg(long, global = true, value_name = "NS")]
    pub namespace: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream the content of a datastream
    Content(ContentArgs),

    /// Show the repository metadata of a datastream
    Metadata(MetadataArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments for the content command
#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// Object id, without namespace
    pub id: String,

    /// Datastream name, e.g. "content"
    pub dsname: String,

    /// Write the content to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the metadata command
#[derive(Args, Debug, Clone)]
pub struct MetadataArgs {
    /// Object id, without namespace
    pub id: String,

    /// Datastream name, e.g. "content"
    pub dsname: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// True when any of the verbosity flags was given
    pub fn has_verbosity_flag(&self) -> bool {
        self.global.verbose || self.global.very_verbose || self.global.quiet
    }

    /// Get the log level based on verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.global.very_verbose {
            "trace"
        } else if self.global.verbose {
            "debug"
        } else if self.global.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Filter directive for the crate's log output
    ///
    /// Verbosity flags win over `configured_level`, which is `None` until the
    /// configuration has been loaded.
    pub fn log_directive(&self, configured_level: Option<&str>) -> String {
        let level = match configured_level {
            Some(level) if !self.has_verbosity_flag() => level,
            _ => self.log_level(),
        };
        format!("{}={}", env!("CARGO_CRATE_NAME"), level)
    }
}
