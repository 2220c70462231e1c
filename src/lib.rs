//! Fedora Access Library
//!
//! Typed access to datastream content and metadata held in a Fedora Commons
//! repository. Callers depend on the [`Fedora`](app::Fedora) trait and get a
//! content stream plus header metadata, or the repository's datastream
//! profile, without dealing with Fedora's REST paths or XML.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, FedoraError, Result};
