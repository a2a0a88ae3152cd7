//! Unified error types for the filedrop client crates.
//!
//! The core crate owns both error layers: [`TransportError`] for failures
//! below the HTTP status line and [`FileError`] for everything the client
//! surfaces to callers. Transport implementations map their library errors
//! into `TransportError`; the client never remaps them further.

use thiserror::Error;

/// Errors raised by a [`Transport`](crate::transport::Transport)
/// implementation before a status code was obtained.
///
/// A response carrying an error status is *not* a transport error — it is
/// reported as a normal [`TransportResponse`](crate::transport::TransportResponse)
/// and the client decides what rejects.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be built or sent (connection, TLS, DNS).
    #[error("Request failed: {0}")]
    Connect(String),

    /// The target URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A low-level I/O error while exchanging the request or response.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by [`FileClient`](crate::client::FileClient) operations.
#[derive(Error, Debug)]
pub enum FileError {
    /// The underlying transport failed; surfaced unchanged.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status the operation rejects.
    ///
    /// Carries the raw response body so callers can inspect what the
    /// server said.
    #[error("Server returned HTTP {status}")]
    Status { status: u16, body: Vec<u8> },

    /// The listing response body could not be decoded.
    #[error("Malformed listing: {0}")]
    MalformedListing(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = TransportError::Connect("connection refused".into());
        assert_eq!(err.to_string(), "Request failed: connection refused");

        let err = TransportError::InvalidUrl("not-a-url".into());
        assert_eq!(err.to_string(), "Invalid URL: not-a-url");
    }

    #[test]
    fn file_error_display() {
        let err = FileError::Status {
            status: 403,
            body: b"forbidden".to_vec(),
        };
        assert_eq!(err.to_string(), "Server returned HTTP 403");
    }

    #[test]
    fn file_error_from_transport_error() {
        let transport_err = TransportError::Connect("timed out".into());
        let file_err: FileError = transport_err.into();
        assert_eq!(
            file_err.to_string(),
            "Transport error: Request failed: timed out"
        );
    }

    #[test]
    fn transport_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broke");
        let transport_err: TransportError = io_err.into();
        assert_eq!(transport_err.to_string(), "I/O error: pipe broke");
    }

    #[test]
    fn file_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let file_err: FileError = json_err.into();
        assert!(file_err.to_string().starts_with("Malformed listing: "));
    }
}
