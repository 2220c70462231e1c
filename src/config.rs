//! Configuration management for Fedora Access
//!
//! Settings are loaded with the precedence defaults, then config file, then
//! environment variables, then command-line flags. The library itself never
//! reads configuration implicitly: everything ends up as explicit arguments
//! to [`RemoteFedora`] construction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::client::{normalize_base_url, redact_url};
use crate::app::{ClientConfig, RemoteFedora};
use crate::constants::{config as files, env as env_vars, fedora, http};
use crate::errors::{ConfigError, ConfigResult, FedoraResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Repository location
    pub fedora: FedoraConfigToml,
    /// HTTP client settings
    pub client: ClientConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Repository location settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FedoraConfigToml {
    /// Fedora base URL, optionally with `user:password@` credentials
    pub url: String,
    /// Prefix put in front of every object id
    pub namespace: String,
}

impl Default for FedoraConfigToml {
    fn default() -> Self {
        Self {
            url: fedora::DEFAULT_BASE_URL.to_string(),
            namespace: fedora::DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// TOML-friendly client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfigToml {
    /// Enable HTTP/2 support
    pub http2: bool,
    /// TCP keep-alive in seconds (None = disabled)
    pub tcp_keepalive_secs: Option<u64>,
    /// TCP nodelay setting
    pub tcp_nodelay: bool,
    /// Connection pool idle timeout in seconds (None = no timeout)
    pub pool_idle_timeout_secs: Option<u64>,
    /// Maximum idle connections per host
    pub pool_max_per_host: usize,
    /// Request timeout in seconds (None = no timeout)
    pub request_timeout_secs: Option<u64>,
    /// Connect timeout in seconds (None = no timeout)
    pub connect_timeout_secs: Option<u64>,
    /// Maximum redirects to follow
    pub max_redirects: usize,
}

impl Default for ClientConfigToml {
    fn default() -> Self {
        Self {
            http2: false,
            tcp_keepalive_secs: Some(http::TCP_KEEPALIVE.as_secs()),
            tcp_nodelay: true,
            pool_idle_timeout_secs: Some(http::POOL_IDLE_TIMEOUT.as_secs()),
            pool_max_per_host: http::POOL_MAX_PER_HOST,
            request_timeout_secs: None,
            connect_timeout_secs: None,
            max_redirects: http::MAX_REDIRECTS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level for the application
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicitly named file must exist; otherwise the standard locations
    /// are searched and defaults are used when none is found.
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply `FEDORA_URL` / `FEDORA_NAMESPACE` style overrides
    ///
    /// `lookup` resolves a variable name to its value, if set.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env_vars::FEDORA_URL) {
            debug!("Fedora URL overridden from environment");
            self.fedora.url = url;
        }
        if let Some(namespace) = lookup(env_vars::FEDORA_NAMESPACE) {
            debug!("Fedora namespace overridden from environment");
            self.fedora.namespace = namespace;
        }
    }

    /// Check that the configuration can build a client
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fedora.url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "fedora.url".to_string(),
            });
        }

        normalize_base_url(&self.fedora.url).map_err(|e| ConfigError::InvalidValue {
            field: "fedora.url".to_string(),
            value: redact_url(&self.fedora.url),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Build the remote client this configuration describes
    pub fn build_remote(&self) -> FedoraResult<RemoteFedora> {
        RemoteFedora::with_config(
            &self.fedora.url,
            &self.fedora.namespace,
            &self.client.to_runtime_config(),
        )
    }

    /// Render the configuration as TOML with any URL password masked
    pub fn to_redacted_toml(&self) -> String {
        let mut shown = self.clone();
        shown.fedora.url = redact_url(&shown.fedora.url);
        toml::to_string_pretty(&shown).unwrap_or_default()
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(files::LOCAL_FILE_NAME)];
        if let Some(path) = Self::default_config_path() {
            search_paths.push(path);
        }

        let found = search_paths.into_iter().find(|path| path.exists());
        match &found {
            Some(path) => debug!("Found config file: {}", path.display()),
            None => debug!("No config file found in standard locations"),
        }
        found
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(files::USER_DIR_NAME).join(files::USER_FILE_NAME))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}

impl ClientConfigToml {
    /// Convert to runtime ClientConfig
    pub fn to_runtime_config(&self) -> ClientConfig {
        ClientConfig {
            http2: self.http2,
            tcp_keepalive: self.tcp_keepalive_secs.map(Duration::from_secs),
            tcp_nodelay: self.tcp_nodelay,
            pool_idle_timeout: self.pool_idle_timeout_secs.map(Duration::from_secs),
            pool_max_per_host: self.pool_max_per_host,
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            max_redirects: self.max_redirects,
        }
    }
}
