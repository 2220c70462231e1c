//! Canned Fedora server for integration tests
//!
//! Serves fixed responses from a local port so the remote client can be
//! exercised end to end without a real repository.

#![allow(dead_code)]

use std::time::Duration;

use axum::http::{header, HeaderMap, HeaderName, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Router;
use tokio::net::TcpListener;

pub const PDF_BODY: &[u8] = b"%PDF-1.4 pretend thesis body";
pub const STORED_BODY: &str = "stored";
pub const STORED_MD5: &str = "c9ee90255cdc1ef5f247317065e74111";
pub const STORED_SHA256: &str = "87b04e58961f9a99d853d4046a0b5b793e7c3e4bbd21f5aca8fb17c20cdb1d8b";
pub const LARGE_BODY_LEN: usize = 4 * 1024 * 1024;

/// Basic auth for fedoraAdmin:secret
const EXPECTED_AUTH: &str = "Basic ZmVkb3JhQWRtaW46c2VjcmV0";

pub const PDF_PROFILE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<datastreamProfile xmlns="http://www.fedora.info/definitions/1/0/management/"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://www.fedora.info/definitions/1/0/management/ http://www.fedora.info/definitions/1/0/datastreamProfile.xsd"
    pid="temp:pdf" dsID="content">
  <dsLabel>Thesis PDF</dsLabel>
  <dsVersionID>content.3</dsVersionID>
  <dsCreateDate>2014-02-11T16:21:03.563Z</dsCreateDate>
  <dsState>A</dsState>
  <dsMIME>application/pdf</dsMIME>
  <dsFormatURI>info:fedora/fedora-system:format/pdf</dsFormatURI>
  <dsControlGroup>M</dsControlGroup>
  <dsSize>28</dsSize>
  <dsVersionable>true</dsVersionable>
  <dsInfoType>info</dsInfoType>
  <dsLocation>temp:pdf+content+content.3</dsLocation>
  <dsLocationType>INTERNAL_ID</dsLocationType>
  <dsChecksumType>MD5</dsChecksumType>
  <dsChecksum>5eb63bbbe01eeed093cb22bb8f5acdc3</dsChecksum>
</datastreamProfile>
"#;

pub const NO_CHECKSUM_PROFILE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<datastreamProfile xmlns="http://www.fedora.info/definitions/1/0/management/" pid="temp:plain" dsID="descMetadata">
  <dsLabel>Descriptive metadata</dsLabel>
  <dsVersionID>descMetadata.0</dsVersionID>
  <dsState>A</dsState>
  <dsMIME>text/xml</dsMIME>
  <dsSize>512</dsSize>
  <dsLocation>temp:plain+descMetadata+descMetadata.0</dsLocation>
  <dsLocationType>INTERNAL_ID</dsLocationType>
  <dsChecksumType>DISABLED</dsChecksumType>
  <dsChecksum>none</dsChecksum>
</datastreamProfile>
"#;

pub const GARBLED_PROFILE: &str =
    "<datastreamProfile><dsLabel>broken</dsSize></datastreamProfile>";

/// Profile served as Latin-1 instead of UTF-8
pub const LATIN1_PROFILE: &[u8] =
    b"<datastreamProfile><dsLabel>Caf\xe9</dsLabel><dsState>A</dsState></datastreamProfile>";

/// Start the canned server and return its Fedora base URL (no trailing slash)
pub async fn spawn_fedora() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(route);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/fedora", addr)
}

async fn route(uri: Uri, headers: HeaderMap) -> Response {
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    match target {
        "/fedora/objects/temp:pdf/datastreams/content/content" => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf"),
                (header::CONTENT_DISPOSITION, "inline; filename=\"thesis.pdf\""),
            ],
            PDF_BODY,
        )
            .into_response(),
        "/fedora/objects/temp:redirected/datastreams/content/content" => {
            Redirect::temporary("/store/abc").into_response()
        }
        "/store/abc" => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain"),
                (HeaderName::from_static("x-content-md5"), STORED_MD5),
                (HeaderName::from_static("x-content-sha256"), STORED_SHA256),
            ],
            STORED_BODY,
        )
            .into_response(),
        "/fedora/objects/temp:large/datastreams/content/content" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/octet-stream")],
            vec![b'x'; LARGE_BODY_LEN],
        )
            .into_response(),
        "/fedora/objects/temp:slow/datastreams/content/content" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            (StatusCode::OK, "too late").into_response()
        }
        "/fedora/objects/temp:secured/datastreams/content/content" => {
            let authorized = headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                == Some(EXPECTED_AUTH);
            if authorized {
                (StatusCode::OK, "secret content").into_response()
            } else {
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
        }
        "/fedora/objects/temp:locked/datastreams/content/content"
        | "/fedora/objects/temp:locked/datastreams/content?format=xml" => {
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
        "/fedora/objects/temp:broken/datastreams/content/content"
        | "/fedora/objects/temp:broken/datastreams/content?format=xml" => {
            (StatusCode::INTERNAL_SERVER_ERROR, "java.lang.NullPointerException").into_response()
        }
        "/fedora/objects/temp:pdf/datastreams/content?format=xml" => xml(PDF_PROFILE),
        "/fedora/objects/temp:plain/datastreams/descMetadata?format=xml" => {
            xml(NO_CHECKSUM_PROFILE)
        }
        "/fedora/objects/temp:garbled/datastreams/content?format=xml" => xml(GARBLED_PROFILE),
        "/fedora/objects/temp:latin1/datastreams/content?format=xml" => xml(LATIN1_PROFILE),
        _ => (StatusCode::NOT_FOUND, "Object not found in low-level storage").into_response(),
    }
}

fn xml(body: impl Into<axum::body::Body>) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/xml")], body.into()).into_response()
}
