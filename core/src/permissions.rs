//! Client-side permission checks.
//!
//! The host application resolves what the current user may do and hands the
//! result in as a list of permission names. The client only ever tests
//! membership — no authorization logic lives here.

use serde::{Deserialize, Serialize};

/// A single operation the server may authorize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Delete,
}

impl Permission {
    /// Wire name of the permission, as the host supplies it.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Delete => "delete",
        }
    }
}

/// The ordered list of permission names granted to the current user.
///
/// Supplied once at construction and never mutated. Names that match no
/// known [`Permission`] are retained but never satisfy a check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet(Vec<String>);

impl PermissionSet {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Whether the given operation was granted.
    pub fn allows(&self, permission: Permission) -> bool {
        self.0.iter().any(|name| name == permission.as_str())
    }

    /// The raw names as supplied by the host.
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}
