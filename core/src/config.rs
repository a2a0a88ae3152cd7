//! Host-supplied client configuration.

use serde::{Deserialize, Serialize};

use crate::permissions::PermissionSet;

/// Configuration injected by the embedding application.
///
/// The host resolves the user's permissions (from its own login/session
/// handling) and passes them in here; the client never consults any
/// ambient source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Permission names granted to the current user.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl ClientConfig {
    /// Build the permission set checked by the client's predicates.
    pub fn permission_set(&self) -> PermissionSet {
        PermissionSet::new(self.permissions.clone())
    }
}
