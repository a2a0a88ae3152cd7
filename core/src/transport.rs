//! Transport capability traits for the file-storage HTTP API.
//!
//! The core crate defines *what* to request; consumers inject *how* by
//! implementing [`Transport`] — the reqwest-backed `filedrop-http` crate in
//! production, recording mocks in tests. No deferred/promise primitive is
//! injected alongside it: the returned futures are the asynchronous handle.

use std::sync::Arc;

use crate::errors::TransportError;
use crate::files::UploadProgress;

/// Raw outcome of a completed HTTP exchange.
///
/// Error statuses are represented here rather than as [`TransportError`]:
/// the transport reports what the server said, the client decides what
/// rejects.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Upload progress delivery — callers inject their observer.
///
/// Implementations must be cheap (counter updates, channel sends); they are
/// invoked from the transport's body stream as chunks are consumed.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, progress: UploadProgress);
}

impl<F> ProgressSink for F
where
    F: Fn(UploadProgress) + Send + Sync,
{
    fn on_progress(&self, progress: UploadProgress) {
        self(progress)
    }
}

/// Async HTTP request capability.
///
/// Object-safe via `#[async_trait]` so the client can hold an
/// `Arc<dyn Transport>` injected at construction. URLs are server-relative
/// and already percent-encoded; implementations resolve them against their
/// configured server.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET to a server-relative URL.
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;

    /// Issue a PUT with the given body and content type.
    ///
    /// When a sink is supplied, cumulative progress is reported as the
    /// body is handed to the underlying connection.
    async fn put(
        &self,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
        progress: Option<Arc<dyn ProgressSink>>,
    ) -> Result<TransportResponse, TransportError>;

    /// Issue a DELETE to a server-relative URL.
    async fn delete(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Verify Transport is object-safe and Send + Sync.
    fn _assert_object_safe(_: &dyn Transport) {}
    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn transport_is_send_sync() {
        _assert_send_sync::<Arc<dyn Transport>>();
    }

    #[test]
    fn is_success_covers_2xx_only() {
        let ok = |status| TransportResponse {
            status,
            body: Vec::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(204).is_success());
        assert!(ok(299).is_success());
        assert!(!ok(199).is_success());
        assert!(!ok(301).is_success());
        assert!(!ok(404).is_success());
    }

    #[test]
    fn closures_are_progress_sinks() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let sink: Arc<dyn ProgressSink> = Arc::new(move |progress: UploadProgress| {
            recorder.lock().unwrap().push(progress);
        });

        sink.on_progress(UploadProgress { sent: 1, total: 2 });
        sink.on_progress(UploadProgress { sent: 2, total: 2 });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], UploadProgress { sent: 1, total: 2 });
        assert_eq!(seen[1], UploadProgress { sent: 2, total: 2 });
    }
}
