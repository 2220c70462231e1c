//! HTTP client configuration and building logic
//!
//! This module handles the configuration and construction of the HTTP client
//! used to reach the Fedora REST API.

use std::time::Duration;

use reqwest::{redirect, Client};
use serde::{Deserialize, Serialize};

use crate::constants::http;
use crate::errors::{FedoraError, FedoraResult};

/// Configuration for the Fedora HTTP client
///
/// No request or connect timeout is set by default: a slow repository makes
/// calls slow rather than failing them. Operators wanting bounded latency set
/// the timeouts here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Enable HTTP/2 adaptive window
    pub http2: bool,
    /// TCP keep-alive settings
    pub tcp_keepalive: Option<Duration>,
    /// TCP nodelay (disable Nagle's algorithm)
    pub tcp_nodelay: bool,
    /// Connection pool idle timeout
    pub pool_idle_timeout: Option<Duration>,
    /// Maximum number of idle connections per host
    pub pool_max_per_host: usize,
    /// Whole-request timeout, including reading the body
    pub request_timeout: Option<Duration>,
    /// Connect timeout
    pub connect_timeout: Option<Duration>,
    /// Redirects followed before giving up; redirect-backed datastreams need at least one
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http2: false,
            tcp_keepalive: Some(http::TCP_KEEPALIVE),
            tcp_nodelay: true,
            pool_idle_timeout: Some(http::POOL_IDLE_TIMEOUT),
            pool_max_per_host: http::POOL_MAX_PER_HOST,
            request_timeout: None,
            connect_timeout: None,
            max_redirects: http::MAX_REDIRECTS,
        }
    }
}

impl ClientConfig {
    /// Builds the HTTP client with the specified configuration
    pub fn build_http_client(&self) -> FedoraResult<Client> {
        let mut client_builder = Client::builder()
            .user_agent(http::USER_AGENT)
            .redirect(redirect::Policy::limited(self.max_redirects))
            .http2_keep_alive_interval(Some(http::HTTP2_KEEP_ALIVE_INTERVAL))
            .http2_keep_alive_timeout(http::HTTP2_KEEP_ALIVE_TIMEOUT)
            .tcp_nodelay(self.tcp_nodelay)
            .pool_max_idle_per_host(self.pool_max_per_host);

        if self.http2 {
            client_builder = client_builder.http2_adaptive_window(true);
        }

        if let Some(keepalive) = self.tcp_keepalive {
            client_builder = client_builder.tcp_keepalive(keepalive);
        }

        if let Some(idle_timeout) = self.pool_idle_timeout {
            client_builder = client_builder.pool_idle_timeout(idle_timeout);
        }

        if let Some(timeout) = self.request_timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(timeout) = self.connect_timeout {
            client_builder = client_builder.connect_timeout(timeout);
        }

        client_builder.build().map_err(FedoraError::Http)
    }
}
