//! Streamed download handle
//!
//! Wraps a raw response so callers never touch the transport object
//! directly. The underlying body is single-pass: the consuming accessors
//! take `self`, so only one stream can ever be produced. The connection
//! stays open until the stream is drained or dropped; no timeout is imposed
//! on consumption.

use crate::error::{ApiError, ApiResult};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::header::CONTENT_TYPE;

/// A streamed file download plus its declared content type.
#[derive(Debug)]
pub struct Download {
    content_type: Option<String>,
    response: reqwest::Response,
}

impl Download {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        Self {
            content_type,
            response,
        }
    }

    /// The content type declared by the response, when present
    /// (e.g. `image/png`, `application/pdf`, `video/mp4`).
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Consume the download as a byte stream.
    pub fn bytes_stream(self) -> impl Stream<Item = ApiResult<Bytes>> {
        self.response
            .bytes_stream()
            .map(|chunk| chunk.map_err(ApiError::from))
    }

    /// Consume the download, buffering the whole body in memory.
    pub async fn bytes(self) -> ApiResult<Bytes> {
        Ok(self.response.bytes().await?)
    }
}
