//! reqwest-backed [`Transport`] implementation.
//!
//! URLs arriving from `filedrop-core` are server-relative and already
//! percent-encoded, so they are appended to the configured origin
//! verbatim. Statuses are reported as-is — the client owns the
//! accept/reject decision.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use filedrop_core::errors::TransportError;
use filedrop_core::files::UploadProgress;
use filedrop_core::transport::{ProgressSink, Transport, TransportResponse};

use crate::config::HttpConfig;

/// Upload bodies are streamed in chunks of this size so progress can be
/// observed mid-transfer.
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// HTTP transport speaking to a filedrop server.
pub struct HttpTransport {
    client: reqwest::Client,
    origin: String,
}

impl HttpTransport {
    /// Build a transport for the given server.
    ///
    /// Rejects origins without an `http`/`https` scheme up front, so a
    /// misconfigured host fails at construction rather than on the first
    /// request.
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let origin = config.origin.trim_end_matches('/').to_string();
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            return Err(TransportError::InvalidUrl(config.origin.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        Ok(Self { client, origin })
    }

    fn absolute(&self, url: &str) -> String {
        format!("{}{}", self.origin, url)
    }

    async fn collect(response: reqwest::Response) -> Result<TransportResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?
            .to_vec();
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let target = self.absolute(url);
        debug!("GET {}", target);
        let response = self
            .client
            .get(&target)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        Self::collect(response).await
    }

    async fn put(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
        progress: Option<Arc<dyn ProgressSink>>,
    ) -> Result<TransportResponse, TransportError> {
        let target = self.absolute(url);
        let total = body.len() as u64;
        debug!("PUT {} ({} bytes)", target, total);

        let request = self
            .client
            .put(&target)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(reqwest::header::CONTENT_LENGTH, total);

        let request = match progress {
            Some(sink) => request.body(reqwest::Body::wrap_stream(progress_stream(body, sink))),
            None => request.body(body),
        };

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        let response = Self::collect(response).await?;
        info!("PUT {} -> HTTP {}", target, response.status);
        Ok(response)
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let target = self.absolute(url);
        debug!("DELETE {}", target);
        let response = self
            .client
            .delete(&target)
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        Self::collect(response).await
    }
}

/// Chunk the body, reporting cumulative progress as each chunk is pulled
/// by the connection.
fn progress_stream(
    body: Vec<u8>,
    sink: Arc<dyn ProgressSink>,
) -> impl futures_util::Stream<Item = Result<Vec<u8>, std::convert::Infallible>> + Send + 'static {
    let total = body.len() as u64;
    let chunks: Vec<Vec<u8>> = body.chunks(UPLOAD_CHUNK_SIZE).map(<[u8]>::to_vec).collect();
    let mut sent = 0u64;

    futures_util::stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len() as u64;
        sink.on_progress(UploadProgress { sent, total });
        Ok(chunk)
    }))
}
