//! Secret and config messages

use super::common::{base64_bytes, Annotations, Driver, Meta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretSpec {
    pub annotations: Annotations,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// External secret store, if any
    pub driver: Option<Driver>,
    pub templating: Option<Driver>,
}

/// Secret object as stored by the manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Secret {
    pub id: String,
    pub meta: Meta,
    pub spec: SecretSpec,
    /// Set for secrets the manager generated for its own use
    pub internal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSpec {
    pub annotations: Annotations,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    pub templating: Option<Driver>,
}

/// Config object as stored by the manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub id: String,
    pub meta: Meta,
    pub spec: ConfigSpec,
}
