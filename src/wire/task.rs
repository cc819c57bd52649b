//! Task messages

use super::common::{Annotations, Meta, Timestamp};
use super::network::NetworkAttachment;
use super::service::{PortConfig, TaskSpec};
use serde::{Deserialize, Serialize};

/// Task lifecycle state
///
/// Variants are declared in lifecycle order so `Ord` follows progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    #[default]
    New,
    Pending,
    Allocated,
    Assigned,
    Accepted,
    Preparing,
    Ready,
    Starting,
    Running,
    Complete,
    Shutdown,
    Failed,
    Rejected,
    Remove,
    Orphaned,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerStatus {
    pub container_id: String,
    pub pid: i32,
    pub exit_code: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortStatus {
    pub ports: Vec<PortConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskStatus {
    pub timestamp: Option<Timestamp>,
    pub state: TaskState,
    pub message: String,
    pub err: String,
    pub container: Option<ContainerStatus>,
    pub port_status: Option<PortStatus>,
}

/// Task object as stored by the manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub meta: Meta,
    pub annotations: Annotations,
    pub spec: TaskSpec,
    pub service_id: String,
    pub slot: u64,
    pub node_id: String,
    pub status: TaskStatus,
    pub desired_state: TaskState,
    pub networks: Vec<NetworkAttachment>,
}
