//! Node conversion

use super::meta::{annotations_from_grpc, annotations_to_grpc, meta_from_grpc};
use crate::error::Result;
use crate::types::node::{
    EngineDescription, ManagerStatus, Node, NodeAvailability, NodeDescription, NodeRole, NodeSpec,
    NodeState, NodeStatus, Platform, PluginDescription, Reachability,
};
use crate::types::service::Resources;
use crate::wire;
use crate::wire::node as wn;
use tracing::trace;

/// Convert a wire node
///
/// The reported role is the desired role from the spec; manager status
/// is only present for nodes that are raft members.
pub fn node_from_grpc(node: &wire::Node) -> Result<Node> {
    trace!(id = %node.id, "converting node");

    Ok(Node {
        id: node.id.clone(),
        meta: meta_from_grpc(&node.meta)?,
        spec: NodeSpec {
            annotations: annotations_from_grpc(&node.spec.annotations),
            role: role_from_grpc(node.spec.desired_role),
            availability: match node.spec.availability {
                wn::Availability::Active => NodeAvailability::Active,
                wn::Availability::Pause => NodeAvailability::Pause,
                wn::Availability::Drain => NodeAvailability::Drain,
            },
        },
        description: node
            .description
            .as_ref()
            .map(description_from_grpc)
            .unwrap_or_default(),
        status: NodeStatus {
            state: match node.status.state {
                wn::NodeState::Unknown => NodeState::Unknown,
                wn::NodeState::Down => NodeState::Down,
                wn::NodeState::Ready => NodeState::Ready,
                wn::NodeState::Disconnected => NodeState::Disconnected,
            },
            message: node.status.message.clone(),
            addr: node.status.addr.clone(),
        },
        manager_status: node.manager_status.as_ref().map(|m| ManagerStatus {
            leader: m.leader,
            reachability: match m.reachability {
                wn::Reachability::Unknown => Reachability::Unknown,
                wn::Reachability::Unreachable => Reachability::Unreachable,
                wn::Reachability::Reachable => Reachability::Reachable,
            },
            addr: m.addr.clone(),
        }),
    })
}

fn role_from_grpc(role: wn::NodeRole) -> NodeRole {
    match role {
        wn::NodeRole::Worker => NodeRole::Worker,
        wn::NodeRole::Manager => NodeRole::Manager,
    }
}

fn description_from_grpc(description: &wn::NodeDescription) -> NodeDescription {
    NodeDescription {
        hostname: description.hostname.clone(),
        platform: description
            .platform
            .as_ref()
            .map(|p| Platform {
                architecture: p.architecture.clone(),
                os: p.os.clone(),
            })
            .unwrap_or_default(),
        resources: description
            .resources
            .as_ref()
            .map(|r| Resources {
                nano_cpus: r.nano_cpus,
                memory_bytes: r.memory_bytes,
            })
            .unwrap_or_default(),
        engine: description
            .engine
            .as_ref()
            .map(|e| EngineDescription {
                engine_version: e.engine_version.clone(),
                labels: e.labels.clone(),
                plugins: e
                    .plugins
                    .iter()
                    .map(|p| PluginDescription {
                        kind: p.kind.clone(),
                        name: p.name.clone(),
                    })
                    .collect(),
            })
            .unwrap_or_default(),
    }
}

/// Convert a node spec to its wire form
///
/// Membership is decided by the manager and left at its default.
pub fn node_spec_to_grpc(spec: &NodeSpec) -> wire::NodeSpec {
    wire::NodeSpec {
        annotations: annotations_to_grpc(&spec.annotations),
        desired_role: match spec.role {
            NodeRole::Worker => wn::NodeRole::Worker,
            NodeRole::Manager => wn::NodeRole::Manager,
        },
        availability: match spec.availability {
            NodeAvailability::Active => wn::Availability::Active,
            NodeAvailability::Pause => wn::Availability::Pause,
            NodeAvailability::Drain => wn::Availability::Drain,
        },
        ..Default::default()
    }
}
