//! The datastream access capability
//!
//! Code that serves datastreams depends on [`Fedora`] only, so the same logic
//! runs against a live repository ([`RemoteFedora`](crate::app::RemoteFedora))
//! or a prepared fixture ([`MemoryFedora`](crate::app::MemoryFedora)).

use async_trait::async_trait;

use crate::app::content::ContentStream;
use crate::app::models::{ContentInfo, DsInfo};
use crate::errors::FedoraResult;

/// A source of Fedora datastreams
///
/// `id` is the object identifier without namespace; implementations that
/// talk to a repository add their configured namespace themselves.
#[async_trait]
pub trait Fedora: std::fmt::Debug + Send + Sync {
    /// Return the contents of the `dsname` datastream of object `id`
    ///
    /// The stream is owned by the caller and released when it is closed or
    /// dropped, however much of it was read.
    ///
    /// # Errors
    ///
    /// `FedoraError::NotFound` or `FedoraError::NotAuthorized` for those
    /// repository answers; any other failure is a transport error.
    async fn get_datastream(
        &self,
        id: &str,
        dsname: &str,
    ) -> FedoraResult<(ContentStream, ContentInfo)>;

    /// Return the repository's metadata for the `dsname` datastream of object `id`
    ///
    /// # Errors
    ///
    /// Same vocabulary as [`Fedora::get_datastream`], plus decode failures.
    async fn get_datastream_info(&self, id: &str, dsname: &str) -> FedoraResult<DsInfo>;
}
