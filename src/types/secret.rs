//! Swarm secrets and configs
//!
//! Payloads travel base64-encoded in the API, as in the daemon's JSON
//! schema.

use super::swarm::{Annotations, Driver, Meta};
use serde::{Deserialize, Serialize};

/// Secret specification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecretSpec {
    #[serde(flatten)]
    pub annotations: Annotations,
    /// Base64-encoded secret data, only ever set on requests
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    /// External secret driver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<Driver>,
    /// Templating driver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templating: Option<Driver>,
}

/// Secret object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Secret {
    /// Secret ID
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(flatten)]
    pub meta: Meta,
    /// Secret specification
    pub spec: SecretSpec,
}

/// Config specification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigSpec {
    #[serde(flatten)]
    pub annotations: Annotations,
    /// Base64-encoded config data
    #[serde(default)]
    pub data: String,
    /// Templating driver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templating: Option<Driver>,
}

/// Config object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    /// Config ID
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(flatten)]
    pub meta: Meta,
    /// Config specification
    pub spec: ConfigSpec,
}
