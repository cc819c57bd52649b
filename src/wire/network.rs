//! Network messages

use super::common::{Annotations, Driver, Meta};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Address family of an IPAM pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressFamily {
    #[default]
    Unknown,
    Ipv4,
    Ipv6,
}

/// A single IPAM pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpamConfig {
    pub family: AddressFamily,
    pub subnet: String,
    pub range: String,
    pub gateway: String,
    /// Addresses reserved by the network driver, keyed by host name
    pub reserved: HashMap<String, String>,
}

/// IPAM driver and pool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpamOptions {
    pub driver: Option<Driver>,
    pub configs: Vec<IpamConfig>,
}

/// Source of a config-only network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkConfigFrom {
    Network(String),
}

/// User-settable part of a network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkSpec {
    pub annotations: Annotations,
    pub driver_config: Option<Driver>,
    pub ipv6_enabled: bool,
    pub internal: bool,
    pub ipam: Option<IpamOptions>,
    pub attachable: bool,
    pub ingress: bool,
    pub config_from: Option<NetworkConfigFrom>,
}

impl NetworkSpec {
    /// Name of the network this one takes its configuration from
    pub fn config_from_network(&self) -> Option<&str> {
        match &self.config_from {
            Some(NetworkConfigFrom::Network(name)) => Some(name.as_str()),
            None => None,
        }
    }
}

/// Network object as stored by the manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub meta: Meta,
    pub spec: NetworkSpec,
    /// Driver name and options actually in use, filled in by the allocator
    pub driver_state: Option<Driver>,
    /// Allocated IPAM state
    pub ipam: Option<IpamOptions>,
}

/// Network reference inside a service or task spec
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkAttachmentConfig {
    pub target: String,
    pub aliases: Vec<String>,
    pub driver_attachment_opts: HashMap<String, String>,
}

/// Network attached to a running task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkAttachment {
    pub network: Option<Network>,
    pub addresses: Vec<String>,
    pub aliases: Vec<String>,
}
