//! Command-line interface components
//!
//! This module contains CLI-specific code for the Fedora Access binary:
//! argument parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ContentArgs, GlobalArgs, MetadataArgs};
pub use commands::{handle_config, handle_content, handle_metadata, load_config};
