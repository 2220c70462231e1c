//! Core datastream access logic for Fedora Access
//!
//! This module contains the [`Fedora`] capability, its two implementations
//! and the model types passed across it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fedora_access::app::{Fedora, RemoteFedora};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fedora = RemoteFedora::new("http://localhost:8983/fedora/", "temp:")?;
//!
//! let (stream, info) = fedora.get_datastream("abc123", "content").await?;
//! println!("{} bytes of {}", info.length, info.content_type);
//! let body = stream.read_to_end().await?;
//!
//! let ds = fedora.get_datastream_info("abc123", "content").await?;
//! println!("version {} of {}", ds.version(), ds.label);
//! # let _ = body;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod content;
pub mod fedora;
pub mod memory;
pub mod models;

// Re-export main public API
pub use client::{ClientConfig, RemoteFedora};
pub use content::ContentStream;
pub use fedora::Fedora;
pub use memory::MemoryFedora;
pub use models::{normalize_checksum, ContentInfo, DatastreamProfile, DsInfo};
