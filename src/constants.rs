//! Application constants for Fedora Access
//!
//! This module centralizes the constants used throughout the crate,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Environment variable names for configuration overrides
pub mod env {
    /// Environment variable holding the Fedora base URL
    pub const FEDORA_URL: &str = "FEDORA_URL";

    /// Environment variable holding the object namespace prefix
    pub const FEDORA_NAMESPACE: &str = "FEDORA_NAMESPACE";
}

/// Fedora REST API path segments and wire-level names
pub mod fedora {
    /// Path segment for the objects collection, relative to the base URL
    pub const OBJECTS_SEGMENT: &str = "objects/";

    /// Path segment separating an object id from its datastreams
    pub const DATASTREAMS_SEGMENT: &str = "/datastreams/";

    /// Suffix selecting the raw datastream content
    pub const CONTENT_SUFFIX: &str = "/content";

    /// Query selecting the XML datastream profile
    pub const PROFILE_QUERY: &str = "?format=xml";

    /// Checksum header forwarded by checksum-aware content stores
    pub const MD5_HEADER: &str = "X-Content-Md5";

    /// Checksum header forwarded by checksum-aware content stores
    pub const SHA256_HEADER: &str = "X-Content-Sha256";

    /// Value Fedora reports in `dsChecksum` when no checksum is kept
    pub const CHECKSUM_NONE: &str = "none";

    /// Namespace used when none is configured
    pub const DEFAULT_NAMESPACE: &str = "";

    /// Base URL used when none is configured
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8983/fedora/";
}

/// Defaults applied by the in-memory store
pub mod memory {
    /// Datastream state for active datastreams
    pub const DEFAULT_STATE: &str = "A";

    /// Location type of datastreams held inside the repository
    pub const DEFAULT_LOCATION_TYPE: &str = "INTERNAL_ID";

    /// Content type reported for every stored datastream
    pub const CONTENT_TYPE: &str = "text/plain";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = concat!("fedora-access/", env!("CARGO_PKG_VERSION"));

    /// HTTP/2 keep-alive interval
    pub const HTTP2_KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(30);

    /// HTTP/2 keep-alive timeout
    pub const HTTP2_KEEP_ALIVE_TIMEOUT: Duration = Duration::from_secs(10);

    /// TCP keep-alive interval
    pub const TCP_KEEPALIVE: Duration = Duration::from_secs(30);

    /// Connection pool idle timeout
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

    /// Maximum idle connections per host in pool
    pub const POOL_MAX_PER_HOST: usize = 25;

    /// Maximum number of redirects to follow
    pub const MAX_REDIRECTS: usize = 10;
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE_NAME: &str = "fedora-access.toml";

    /// Directory under the user config dir
    pub const USER_DIR_NAME: &str = "fedora-access";

    /// File name inside the user config directory
    pub const USER_FILE_NAME: &str = "config.toml";
}

// Re-export commonly used constants at module level for convenience
pub use fedora::{CHECKSUM_NONE, MD5_HEADER, SHA256_HEADER};
pub use http::USER_AGENT;
