//! Datastream content handle
//!
//! A [`ContentStream`] owns whatever resource backs a datastream body: an
//! open HTTP response for the remote client, a shared buffer for the
//! in-memory store. The body is never collected by the source. Dropping the
//! handle (or calling [`ContentStream::close`]) releases the resource, and
//! ownership guarantees that happens exactly once whether or not the stream
//! was read to the end.

use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Stream of datastream body chunks
pub struct ContentStream {
    inner: BoxStream<'static, io::Result<Bytes>>,
}

impl ContentStream {
    /// Wrap a chunk stream
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self {
            inner: stream.boxed(),
        }
    }

    /// Stream that yields `bytes` as a single chunk
    pub fn from_bytes(bytes: Bytes) -> Self {
        Self::new(stream::once(async move { Ok(bytes) }))
    }

    /// Body of an HTTP response, pulled from the connection as it is polled
    pub fn from_response(response: reqwest::Response) -> Self {
        Self::new(
            response
                .bytes_stream()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e)),
        )
    }

    /// Read the remaining body into memory, then release the stream
    pub async fn read_to_end(mut self) -> io::Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.inner.try_next().await? {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }

    /// Copy the remaining body into `writer`, returning the number of bytes written
    pub async fn copy_to<W>(mut self, writer: &mut W) -> io::Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.inner.try_next().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    /// Release the underlying resource without reading further
    pub fn close(self) {
        drop(self);
    }
}

impl Stream for ContentStream {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for ContentStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStream").finish_non_exhaustive()
    }
}
