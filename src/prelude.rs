//! Prelude module for Fedora Access
//!
//! Re-exports the items needed for typical usage with a single
//! `use fedora_access::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use fedora_access::prelude::*;
//!
//! async fn serve(fedora: Arc<dyn Fedora>) -> FedoraResult<()> {
//!     match fedora.get_datastream("abc123", "content").await {
//!         Ok((stream, info)) => {
//!             let _ = info.content_type;
//!             stream.close();
//!             Ok(())
//!         }
//!         Err(FedoraError::NotFound) => Ok(()),
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, FedoraError, FedoraResult, Result};

// The capability and its implementations
pub use crate::app::{
    ClientConfig, ContentInfo, ContentStream, DsInfo, Fedora, MemoryFedora, RemoteFedora,
};

// Configuration
pub use crate::config::AppConfig;

// Standard library re-exports that are commonly needed
pub use std::sync::Arc;
