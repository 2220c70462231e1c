//! Data models for Fedora Access
//!
//! This module defines the values handed across the datastream access
//! boundary. Header-derived content metadata and the repository's own
//! datastream profile are deliberately separate types: the first is whatever
//! the transport declared, the second is what Fedora recorded.

use serde::{Deserialize, Serialize};

use crate::constants::fedora::CHECKSUM_NONE;

/// Content metadata taken from the HTTP response headers
///
/// Every field may be empty, which means "not provided" rather than
/// "verified absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInfo {
    /// MIME type from `Content-Type`
    pub content_type: String,
    /// Declared size from `Content-Length`, not checked against the body
    pub length: String,
    /// Suggested disposition from `Content-Disposition`
    pub disposition: String,
    /// Hex MD5 from `X-Content-Md5`, only sent by checksum-aware stores
    pub md5: String,
    /// Hex SHA-256 from `X-Content-Sha256`, only sent by checksum-aware stores
    pub sha256: String,
}

/// Datastream metadata as recorded by the repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsInfo {
    pub label: String,
    pub version_id: String,
    pub state: String,
    pub checksum: String,
    pub mime_type: String,
    pub location: String,
    pub location_type: String,
    pub size: String,
}

impl DsInfo {
    /// Version number taken from the suffix of `version_id`
    ///
    /// Fedora names versions `<dsname>.<N>`. Returns -1 when there is no `.`
    /// or the suffix is not an integer.
    ///
    /// ```rust
    /// use fedora_access::app::DsInfo;
    ///
    /// let info = DsInfo { version_id: "content.7".to_string(), ..Default::default() };
    /// assert_eq!(info.version(), 7);
    /// ```
    pub fn version(&self) -> i64 {
        self.version_id
            .rsplit_once('.')
            .and_then(|(_, suffix)| suffix.parse().ok())
            .unwrap_or(-1)
    }
}

/// Raw `datastreamProfile` document returned for `?format=xml`
///
/// Elements and attributes not listed here (`dsAltID`, `dsCreateDate`,
/// `pid`, namespace declarations and so on) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatastreamProfile {
    #[serde(rename = "dsLabel")]
    pub label: String,
    #[serde(rename = "dsVersionID")]
    pub version_id: String,
    #[serde(rename = "dsState")]
    pub state: String,
    #[serde(rename = "dsChecksum")]
    pub checksum: String,
    #[serde(rename = "dsMIME")]
    pub mime_type: String,
    #[serde(rename = "dsLocation")]
    pub location: String,
    #[serde(rename = "dsLocationType")]
    pub location_type: String,
    #[serde(rename = "dsSize")]
    pub size: String,
}

impl From<DatastreamProfile> for DsInfo {
    fn from(profile: DatastreamProfile) -> Self {
        Self {
            label: profile.label,
            version_id: profile.version_id,
            state: profile.state,
            checksum: normalize_checksum(profile.checksum),
            mime_type: profile.mime_type,
            location: profile.location,
            location_type: profile.location_type,
            size: profile.size,
        }
    }
}

/// Treat Fedora's `"none"` checksum placeholder as an absent checksum
///
/// This folds "explicitly none" and "not reported" together. Callers must not
/// read an empty checksum as proof that Fedora holds no checksum.
pub fn normalize_checksum(raw: String) -> String {
    if raw == CHECKSUM_NONE {
        String::new()
    } else {
        raw
    }
}
