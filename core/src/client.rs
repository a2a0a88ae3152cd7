//! The file-access facade: list, upload, remove, plus permission
//! predicates.
//!
//! Stateless between calls — each operation issues exactly one request on
//! the injected transport and resolves independently. No ordering is
//! guaranteed between concurrent calls.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::errors::FileError;
use crate::files::url::{file_url, FILE_COLLECTION_URL};
use crate::files::{FileEntry, FileUpload};
use crate::permissions::{Permission, PermissionSet};
use crate::transport::{ProgressSink, Transport, TransportResponse};

/// Content type sent with uploaded file bytes.
const UPLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// Shape of the server's collection listing.
#[derive(Debug, Deserialize)]
struct Listing {
    entries: Vec<ListedFile>,
}

/// One raw listing entry. The server may send more fields; only the name
/// is consumed.
#[derive(Debug, Deserialize)]
struct ListedFile {
    name: String,
}

/// Client for the filedrop file-storage API.
///
/// Built from an injected [`Transport`] and the host-supplied permission
/// list. Cloning is cheap and shares the transport.
#[derive(Clone)]
pub struct FileClient {
    transport: Arc<dyn Transport>,
    permissions: PermissionSet,
}

impl FileClient {
    /// Build a client from an injected transport and host configuration.
    pub fn new(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            permissions: config.permission_set(),
        }
    }

    /// Build a client from an already-constructed permission set.
    pub fn with_permissions(transport: Arc<dyn Transport>, permissions: PermissionSet) -> Self {
        Self {
            transport,
            permissions,
        }
    }

    /// List the stored files.
    ///
    /// Each raw entry from the server is decorated with its derived URL.
    pub async fn list(&self) -> Result<Vec<FileEntry>, FileError> {
        debug!("GET {}", FILE_COLLECTION_URL);
        let response = self.transport.get(FILE_COLLECTION_URL).await?;
        let response = reject_error_status(response)?;
        let listing: Listing = serde_json::from_slice(&response.body)?;

        Ok(listing
            .entries
            .into_iter()
            .map(|entry| FileEntry {
                url: file_url(&entry.name),
                name: entry.name,
            })
            .collect())
    }

    /// Upload a file, discarding progress notifications.
    pub async fn upload(&self, file: FileUpload) -> Result<FileEntry, FileError> {
        self.upload_inner(file, None).await
    }

    /// Upload a file, forwarding the transport's progress notifications
    /// to the given sink.
    pub async fn upload_with_progress(
        &self,
        file: FileUpload,
        progress: Arc<dyn ProgressSink>,
    ) -> Result<FileEntry, FileError> {
        self.upload_inner(file, Some(progress)).await
    }

    async fn upload_inner(
        &self,
        file: FileUpload,
        progress: Option<Arc<dyn ProgressSink>>,
    ) -> Result<FileEntry, FileError> {
        let FileUpload { name, data } = file;
        let url = file_url(&name);
        debug!("PUT {} ({} bytes)", url, data.len());

        let response = self
            .transport
            .put(&url, data, UPLOAD_CONTENT_TYPE, progress)
            .await?;

        // The server acknowledges an upload with 200 (replaced) or 201
        // (created). Anything else rejects, other 2xx statuses included.
        match response.status {
            200 | 201 => {
                info!("Uploaded {} -> {}", name, url);
                Ok(FileEntry { name, url })
            }
            status => Err(FileError::Status {
                status,
                body: response.body,
            }),
        }
    }

    /// Delete a stored file by name.
    pub async fn remove(&self, name: &str) -> Result<(), FileError> {
        let url = file_url(name);
        debug!("DELETE {}", url);
        let response = self.transport.delete(&url).await?;
        reject_error_status(response)?;
        Ok(())
    }

    /// Server-relative URL for a file name.
    pub fn file_url(&self, name: &str) -> String {
        file_url(name)
    }

    /// Whether the user may read (list and download) files.
    pub fn can_read(&self) -> bool {
        self.permissions.allows(Permission::Read)
    }

    /// Whether the user may upload files.
    pub fn can_write(&self) -> bool {
        self.permissions.allows(Permission::Write)
    }

    /// Whether the user may delete files.
    pub fn can_delete(&self) -> bool {
        self.permissions.allows(Permission::Delete)
    }
}

/// Map an error-status response to [`FileError::Status`].
fn reject_error_status(response: TransportResponse) -> Result<TransportResponse, FileError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(FileError::Status {
            status: response.status,
            body: response.body,
        })
    }
}
