//! Swarm node types

use super::service::Resources;
use super::swarm::{Annotations, Meta};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Node role in the swarm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// Worker node
    #[default]
    Worker,
    /// Manager node
    Manager,
}

/// Node state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    /// Node is unknown
    #[default]
    Unknown,
    /// Node is down
    Down,
    /// Node is ready
    Ready,
    /// Node is disconnected
    Disconnected,
}

/// Node availability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeAvailability {
    /// Node is active
    #[default]
    Active,
    /// Node is paused
    Pause,
    /// Node is draining
    Drain,
}

/// Manager reachability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reachability {
    #[default]
    Unknown,
    Unreachable,
    Reachable,
}

/// Swarm node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    /// Node ID
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(flatten)]
    pub meta: Meta,
    /// Node spec
    pub spec: NodeSpec,
    /// Node description
    pub description: NodeDescription,
    /// Node status
    pub status: NodeStatus,
    /// Manager status (if manager)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_status: Option<ManagerStatus>,
}

impl Node {
    /// Check if node is a manager
    pub fn is_manager(&self) -> bool {
        self.manager_status.is_some()
    }

    /// Check if node is leader
    pub fn is_leader(&self) -> bool {
        self.manager_status
            .as_ref()
            .map(|s| s.leader)
            .unwrap_or(false)
    }
}

/// User-settable part of a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeSpec {
    #[serde(flatten)]
    pub annotations: Annotations,
    /// Desired role
    #[serde(default)]
    pub role: NodeRole,
    /// Availability
    #[serde(default)]
    pub availability: NodeAvailability,
}

/// Node description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeDescription {
    /// Hostname
    pub hostname: String,
    /// Platform info
    pub platform: Platform,
    /// Resources
    pub resources: Resources,
    /// Engine info
    pub engine: EngineDescription,
}

/// Platform info
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Platform {
    /// Architecture
    pub architecture: String,
    /// OS
    #[serde(rename = "OS")]
    pub os: String,
}

/// Engine description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineDescription {
    /// Engine version
    pub engine_version: String,
    /// Engine labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Plugins
    #[serde(default)]
    pub plugins: Vec<PluginDescription>,
}

/// Plugin description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginDescription {
    /// Plugin type
    #[serde(rename = "Type")]
    pub kind: String,
    /// Plugin name
    pub name: String,
}

/// Node status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeStatus {
    /// State
    pub state: NodeState,
    /// Message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Address
    pub addr: String,
}

/// Manager status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagerStatus {
    /// Is leader
    #[serde(default)]
    pub leader: bool,
    /// Reachability
    pub reachability: Reachability,
    /// Address
    pub addr: String,
}
