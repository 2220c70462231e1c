//! Core HTTP operations against the Fedora REST API
//!
//! One request per call, no retries. Responses with a non-success status are
//! dropped here, which releases their connection, and turned into the error
//! vocabulary; only successful responses reach the caller.

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Response};

use crate::app::models::ContentInfo;
use crate::constants::{MD5_HEADER, SHA256_HEADER};
use crate::errors::{FedoraError, FedoraResult};

/// HTTP operations handler
#[derive(Debug, Clone)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    /// Creates a new HttpHandler around the given client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Issues a GET and returns the response if its status is a success
    ///
    /// # Errors
    ///
    /// Returns `FedoraError::Http` on a transport failure and the mapped
    /// status error otherwise. The response body is released before the
    /// error is returned.
    pub async fn get_response(&self, url: &str) -> FedoraResult<Response> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            drop(response);
            tracing::trace!(status = status.as_u16(), "Fedora returned non-success status");
            return Err(FedoraError::from_status(status.as_u16()));
        }

        tracing::trace!(status = status.as_u16(), "Fedora response received");
        Ok(response)
    }

    /// Fetches a whole response body as raw bytes
    ///
    /// The body is fully consumed, so the connection is released on every
    /// path out of this function. No charset decoding happens here.
    pub async fn get_bytes(&self, url: &str) -> FedoraResult<Bytes> {
        let response = self.get_response(url).await?;
        Ok(response.bytes().await?)
    }

    /// Get a reference to the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Build content metadata from response headers
///
/// Missing headers, and headers whose values are not visible ASCII, are left
/// empty.
pub fn content_info_from_headers(headers: &HeaderMap) -> ContentInfo {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    ContentInfo {
        content_type: header(CONTENT_TYPE.as_str()),
        length: header(CONTENT_LENGTH.as_str()),
        disposition: header(CONTENT_DISPOSITION.as_str()),
        md5: header(MD5_HEADER),
        sha256: header(SHA256_HEADER),
    }
}
