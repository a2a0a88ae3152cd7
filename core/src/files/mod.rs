pub mod url;

use serde::{Deserialize, Serialize};

/// A stored file as reported by the client.
///
/// `url` is derived from `name` via [`url::file_url`] and never stored
/// independently; the server only ever sends the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub url: String,
}

/// An in-memory file to upload: a name plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub data: Vec<u8>,
}

/// Cumulative upload progress, delivered to a
/// [`ProgressSink`](crate::transport::ProgressSink).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    /// Bytes handed to the transport so far.
    pub sent: u64,
    /// Total body size in bytes.
    pub total: u64,
}
