//! Metadata shared by every swarm object

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Object version
///
/// Wraps the control plane's version index. Versions order by index, so
/// two snapshots of the same object compare the way the manager
/// committed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Version {
    /// Version index
    pub index: u64,
}

impl Version {
    /// Create a version from a raw index
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    /// True for objects the manager has never persisted
    pub fn is_unversioned(&self) -> bool {
        self.index == 0
    }
}

/// Version and timestamps of a swarm object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Meta {
    /// Object version
    pub version: Version,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, never earlier than creation for committed objects
    pub updated_at: DateTime<Utc>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            version: Version::default(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

/// Name and labels of an object spec
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Annotations {
    /// Object name
    #[serde(default)]
    pub name: String,
    /// Labels
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// Driver name with opaque driver options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Driver {
    /// Driver name
    #[serde(default)]
    pub name: String,
    /// Driver options
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub options: HashMap<String, String>,
}
