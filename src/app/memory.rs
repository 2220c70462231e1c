//! In-memory datastream store
//!
//! A deterministic stand-in for a Fedora server, intended for driving
//! datastream-serving code in tests. Entries only appear through
//! [`MemoryFedora::set`].

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::app::content::ContentStream;
use crate::app::fedora::Fedora;
use crate::app::models::{ContentInfo, DsInfo};
use crate::constants::memory;
use crate::errors::{FedoraError, FedoraResult};

/// Composite lookup key: (object id, datastream name)
type DatastreamKey = (String, String);

#[derive(Debug, Clone)]
struct StoredDatastream {
    info: DsInfo,
    content: Bytes,
}

/// Fedora stub returning datastreams previously given to [`MemoryFedora::set`]
///
/// `set` takes `&mut self`; share the store between tasks behind a lock if
/// entries change while readers are active.
#[derive(Debug, Default, Clone)]
pub struct MemoryFedora {
    data: HashMap<DatastreamKey, StoredDatastream>,
}

impl MemoryFedora {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` and `info` as datastream `dsname` of object `id`
    ///
    /// Empty fields of `info` are filled in: state `A`, version id
    /// `<dsname>.0`, location `<id>+<dsname>+<version id>`, location type
    /// `INTERNAL_ID`, and size from the length of `content`. Any earlier
    /// entry under the same key is replaced.
    pub fn set(&mut self, id: &str, dsname: &str, mut info: DsInfo, content: impl Into<Bytes>) {
        let content = content.into();

        if info.state.is_empty() {
            info.state = memory::DEFAULT_STATE.to_string();
        }
        if info.version_id.is_empty() {
            info.version_id = format!("{}.0", dsname);
        }
        if info.location.is_empty() {
            info.location = format!("{}+{}+{}", id, dsname, info.version_id);
        }
        if info.location_type.is_empty() {
            info.location_type = memory::DEFAULT_LOCATION_TYPE.to_string();
        }
        if info.size.is_empty() {
            info.size = content.len().to_string();
        }

        self.data.insert(
            (id.to_string(), dsname.to_string()),
            StoredDatastream { info, content },
        );
    }

    /// Number of stored datastreams
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn lookup(&self, id: &str, dsname: &str) -> FedoraResult<&StoredDatastream> {
        self.data
            .get(&(id.to_string(), dsname.to_string()))
            .ok_or(FedoraError::NotFound)
    }
}

#[async_trait]
impl Fedora for MemoryFedora {
    async fn get_datastream(
        &self,
        id: &str,
        dsname: &str,
    ) -> FedoraResult<(ContentStream, ContentInfo)> {
        let stored = self.lookup(id, dsname)?;
        let info = ContentInfo {
            content_type: memory::CONTENT_TYPE.to_string(),
            length: stored.info.size.clone(),
            ..Default::default()
        };
        Ok((ContentStream::from_bytes(stored.content.clone()), info))
    }

    async fn get_datastream_info(&self, id: &str, dsname: &str) -> FedoraResult<DsInfo> {
        Ok(self.lookup(id, dsname)?.info.clone())
    }
}
