//! Swarm task types

use super::network::NetworkAttachment;
use super::service::{PortConfig, TaskSpec};
use super::swarm::Meta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Task state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Task is new
    #[default]
    New,
    /// Task is pending
    Pending,
    /// Task has network resources allocated
    Allocated,
    /// Task is assigned
    Assigned,
    /// Task is accepted
    Accepted,
    /// Task is preparing
    Preparing,
    /// Task is ready
    Ready,
    /// Task is starting
    Starting,
    /// Task is running
    Running,
    /// Task completed
    Complete,
    /// Task shutdown
    Shutdown,
    /// Task failed
    Failed,
    /// Task rejected
    Rejected,
    /// Task removed
    Remove,
    /// Task is orphaned
    Orphaned,
}

impl TaskState {
    /// Check if the task has reached a final state
    pub fn is_terminal(&self) -> bool {
        *self > TaskState::Running
    }
}

/// Swarm task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    /// Task ID
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(flatten)]
    pub meta: Meta,
    /// Task name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Labels
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Task spec
    pub spec: TaskSpec,
    /// Service ID
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    /// Slot (for replicated services)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u64>,
    /// Node ID
    #[serde(default, rename = "NodeID", skip_serializing_if = "String::is_empty")]
    pub node_id: String,
    /// Task status
    pub status: TaskStatus,
    /// Desired state
    pub desired_state: TaskState,
    /// Network attachments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks_attachments: Vec<NetworkAttachment>,
}

/// Task status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskStatus {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// State
    pub state: TaskState,
    /// Message
    #[serde(default)]
    pub message: String,
    /// Error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
    /// Container status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_status: Option<ContainerStatus>,
    /// Published port status
    #[serde(default)]
    pub port_status: PortStatus,
}

/// Container status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerStatus {
    /// Container ID
    #[serde(rename = "ContainerID")]
    pub container_id: String,
    /// PID
    #[serde(rename = "PID")]
    pub pid: i32,
    /// Exit code
    pub exit_code: i32,
}

/// Published port status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortConfig>,
}
