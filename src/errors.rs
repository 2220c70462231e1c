//! Error types for Fedora Access
//!
//! This module defines the error vocabulary shared by every datastream source,
//! plus configuration and top-level application errors. Errors are returned to
//! the caller and never logged here; deciding what to report is left to
//! whoever issued the request.

use std::path::PathBuf;

use thiserror::Error;

/// Datastream access errors
///
/// `NotFound` and `NotAuthorized` are the two outcomes a caller is expected to
/// handle. Everything else is a transport or protocol failure carrying enough
/// detail for logging.
#[derive(Error, Debug)]
pub enum FedoraError {
    /// The object or datastream does not exist (HTTP 404)
    #[error("Item not found in Fedora")]
    NotFound,

    /// The repository rejected the request's credentials (HTTP 401)
    #[error("Access denied by Fedora")]
    NotAuthorized,

    /// Any other non-success status
    #[error("Got status {status} from Fedora")]
    UnexpectedStatus { status: u16 },

    /// Connection, timeout, redirect or body transfer failure
    #[error("HTTP request to Fedora failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The datastream profile was not valid XML or had the wrong shape
    #[error("Failed to decode datastream profile: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Base URL could not be parsed or is not HTTP(S)
    #[error("Invalid Fedora URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },
}

impl FedoraError {
    /// Map a non-success HTTP status onto the error vocabulary
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => FedoraError::NotFound,
            401 => FedoraError::NotAuthorized,
            status => FedoraError::UnexpectedStatus { status },
        }
    }

    /// True when the repository reported the item missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, FedoraError::NotFound)
    }

    /// True when the repository rejected the credentials
    pub fn is_not_authorized(&self) -> bool {
        matches!(self, FedoraError::NotAuthorized)
    }

    /// The HTTP status behind this error, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            FedoraError::NotFound => Some(404),
            FedoraError::NotAuthorized => Some(401),
            FedoraError::UnexpectedStatus { status } => Some(*status),
            FedoraError::Http(e) => e.status().map(|s| s.as_u16()),
            FedoraError::Xml(_) | FedoraError::InvalidUrl { .. } => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    /// Missing required configuration field
    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// I/O error reading the configuration file
    #[error("Failed to read configuration file")]
    Io(#[from] std::io::Error),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Datastream access error
    #[error(transparent)]
    Fedora(#[from] FedoraError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if the caller can sensibly act on the error
    ///
    /// A missing item or a credentials problem is an answer from the
    /// repository. Transport failures are not retried by this crate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Fedora(FedoraError::NotFound) | AppError::Fedora(FedoraError::NotAuthorized)
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Fedora(FedoraError::NotFound) => "not_found",
            AppError::Fedora(FedoraError::NotAuthorized) => "not_authorized",
            AppError::Fedora(_) => "fedora",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Datastream access result type alias
pub type FedoraResult<T> = std::result::Result<T, FedoraError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
