//! Integration tests for the in-memory datastream store
//!
//! The store is driven only through the `Fedora` trait, the way serving code
//! sees it.

use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use tokio::sync::RwLock;

use fedora_access::app::{DsInfo, Fedora, MemoryFedora};

async fn read_all(fedora: &dyn Fedora, id: &str, dsname: &str) -> (Bytes, String) {
    let (stream, info) = fedora.get_datastream(id, dsname).await.unwrap();
    (stream.read_to_end().await.unwrap(), info.length)
}

#[tokio::test]
async fn test_unregistered_datastreams_are_not_found() {
    let mut store = MemoryFedora::new();
    store.set("present", "content", DsInfo::default(), "x");
    let fedora: &dyn Fedora = &store;

    for (id, dsname) in [("absent", "content"), ("present", "other"), ("", "")] {
        assert!(fedora.get_datastream(id, dsname).await.unwrap_err().is_not_found());
        assert!(fedora
            .get_datastream_info(id, dsname)
            .await
            .unwrap_err()
            .is_not_found());
    }
}

#[tokio::test]
async fn test_content_round_trip_for_various_sizes() {
    let mut store = MemoryFedora::new();
    let payloads: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"a".to_vec(),
        (0..=255u8).collect(),
        vec![0u8; 1 << 20],
    ];

    for (i, payload) in payloads.iter().enumerate() {
        store.set(&i.to_string(), "content", DsInfo::default(), payload.clone());
    }

    for (i, payload) in payloads.iter().enumerate() {
        let (body, length) = read_all(&store, &i.to_string(), "content").await;
        assert_eq!(&body[..], &payload[..]);
        assert_eq!(length, payload.len().to_string());
    }
}

#[tokio::test]
async fn test_default_version_id() {
    let mut store = MemoryFedora::new();
    store.set("obj", "descMetadata", DsInfo::default(), "<mods/>");

    let info = store.get_datastream_info("obj", "descMetadata").await.unwrap();
    assert_eq!(info.version_id, "descMetadata.0");
    assert_eq!(info.version(), 0);
}

#[tokio::test]
async fn test_metadata_returned_verbatim() {
    let supplied = DsInfo {
        label: "Full".to_string(),
        version_id: "content.9".to_string(),
        state: "D".to_string(),
        checksum: "abc".to_string(),
        mime_type: "image/tiff".to_string(),
        location: "http://store.example.edu/abc".to_string(),
        location_type: "URL".to_string(),
        size: "12345".to_string(),
    };

    let mut store = MemoryFedora::new();
    store.set("obj", "content", supplied.clone(), "tiny");

    let info = store.get_datastream_info("obj", "content").await.unwrap();
    assert_eq!(info, supplied);

    // Declared size wins over the actual byte count
    let (body, length) = read_all(&store, "obj", "content").await;
    assert_eq!(length, "12345");
    assert_eq!(&body[..], b"tiny");
}

#[tokio::test]
async fn test_streams_are_independent() {
    let mut store = MemoryFedora::new();
    store.set("obj", "content", DsInfo::default(), "shared bytes");

    let (mut first, _) = store.get_datastream("obj", "content").await.unwrap();
    let (second, _) = store.get_datastream("obj", "content").await.unwrap();

    // Abandon the first stream after one chunk; the second is unaffected
    assert!(first.next().await.is_some());
    first.close();

    assert_eq!(&second.read_to_end().await.unwrap()[..], b"shared bytes");
}

#[tokio::test]
async fn test_shared_store_with_external_lock() {
    let store = Arc::new(RwLock::new(MemoryFedora::new()));

    {
        let mut guard = store.write().await;
        guard.set("obj", "content", DsInfo::default(), "v1");
    }

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let guard = store.read().await;
                let info = guard.get_datastream_info("obj", "content").await.unwrap();
                info.size
            })
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.await.unwrap(), "2");
    }

    store
        .write()
        .await
        .set("obj", "content", DsInfo::default(), "version two");
    let guard = store.read().await;
    let (body, length) = read_all(&*guard, "obj", "content").await;
    assert_eq!(&body[..], b"version two");
    assert_eq!(length, "11");
}
