//! Network types

use super::swarm::{Annotations, Driver, Meta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Network scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkScope {
    /// Local to this node
    Local,
    /// Swarm-wide
    #[default]
    Swarm,
    /// Global
    Global,
}

impl std::fmt::Display for NetworkScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkScope::Local => write!(f, "local"),
            NetworkScope::Swarm => write!(f, "swarm"),
            NetworkScope::Global => write!(f, "global"),
        }
    }
}

/// Network a config-only network takes its settings from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigReference {
    /// Network name
    pub network: String,
}

/// IPAM pool in the plain inspect view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpamConfig {
    /// Subnet in CIDR format
    #[serde(default)]
    pub subnet: String,
    /// IP range
    #[serde(default, rename = "IPRange")]
    pub ip_range: String,
    /// Gateway address
    #[serde(default)]
    pub gateway: String,
    /// Auxiliary addresses
    #[serde(
        default,
        rename = "AuxiliaryAddresses",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub aux_address: HashMap<String, String>,
}

/// IPAM configuration in the plain inspect view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ipam {
    /// IPAM driver
    #[serde(default)]
    pub driver: String,
    /// Driver options
    #[serde(default)]
    pub options: HashMap<String, String>,
    /// IP pool configurations, in allocation priority order
    #[serde(default)]
    pub config: Vec<IpamConfig>,
}

/// Network as returned by the plain network inspect endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkResource {
    pub name: String,
    pub id: String,
    pub created: DateTime<Utc>,
    pub scope: NetworkScope,
    pub driver: String,
    #[serde(rename = "EnableIPv6")]
    pub enable_ipv6: bool,
    #[serde(rename = "IPAM")]
    pub ipam: Ipam,
    pub internal: bool,
    pub attachable: bool,
    pub ingress: bool,
    pub config_from: ConfigReference,
    pub options: HashMap<String, String>,
    pub labels: HashMap<String, String>,
}

/// IPAM pool in the swarm view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpamPoolConfig {
    #[serde(default)]
    pub subnet: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub gateway: String,
}

/// IPAM options in the swarm view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpamOptions {
    #[serde(default)]
    pub driver: Driver,
    #[serde(default)]
    pub configs: Vec<IpamPoolConfig>,
}

impl IpamOptions {
    /// True when neither a driver nor any pool is set
    pub fn is_empty(&self) -> bool {
        self.driver.name.is_empty() && self.driver.options.is_empty() && self.configs.is_empty()
    }
}

/// User-settable part of a swarm network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkSpec {
    #[serde(flatten)]
    pub annotations: Annotations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_configuration: Option<Driver>,
    #[serde(default, rename = "IPv6Enabled")]
    pub ipv6_enabled: bool,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub attachable: bool,
    #[serde(default)]
    pub ingress: bool,
    #[serde(default, rename = "IPAMOptions")]
    pub ipam_options: IpamOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_from: Option<ConfigReference>,
    /// Always `swarm` for networks read from the manager
    #[serde(default)]
    pub scope: NetworkScope,
}

/// Swarm network object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Network {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(flatten)]
    pub meta: Meta,
    pub spec: NetworkSpec,
    pub driver_state: Driver,
    #[serde(rename = "IPAMOptions")]
    pub ipam_options: IpamOptions,
}

/// Network attached to a task, with the addresses assigned on it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAttachment {
    pub network: Network,
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// Body of a network create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkCreateRequest {
    pub name: String,
    #[serde(default)]
    pub driver: String,
    /// Accepted for API compatibility; the manager assigns the scope
    #[serde(default)]
    pub scope: String,
    #[serde(default, rename = "EnableIPv6")]
    pub enable_ipv6: bool,
    #[serde(default, rename = "IPAM")]
    pub ipam: Option<Ipam>,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub attachable: bool,
    #[serde(default)]
    pub ingress: bool,
    #[serde(default)]
    pub config_from: Option<ConfigReference>,
    #[serde(default)]
    pub options: HashMap<String, String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}
