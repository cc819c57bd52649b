//! Task conversion
//!
//! Tasks are created by the orchestrator only, so there is no reverse
//! conversion.

use super::meta::meta_from_grpc;
use super::network::network_attachment_from_grpc;
use super::service::{port_config_from_grpc, task_spec_from_grpc};
use super::timestamp::timestamp_from_grpc;
use crate::error::Result;
use crate::types::task::{ContainerStatus, PortStatus, Task, TaskState, TaskStatus};
use crate::wire;
use crate::wire::task as wt;
use chrono::{DateTime, Utc};
use tracing::trace;

/// Convert a wire task
pub fn task_from_grpc(task: &wire::Task) -> Result<Task> {
    trace!(id = %task.id, service = %task.service_id, "converting task");

    let status = &task.status;
    let timestamp = match &status.timestamp {
        Some(ts) => timestamp_from_grpc(ts)?,
        None => DateTime::<Utc>::UNIX_EPOCH,
    };

    Ok(Task {
        id: task.id.clone(),
        meta: meta_from_grpc(&task.meta)?,
        name: task.annotations.name.clone(),
        labels: task.annotations.labels.clone(),
        spec: task_spec_from_grpc(&task.spec)?,
        service_id: task.service_id.clone(),
        // Global service tasks have no slot
        slot: (task.slot != 0).then_some(task.slot),
        node_id: task.node_id.clone(),
        status: TaskStatus {
            timestamp,
            state: state_from_grpc(status.state),
            message: status.message.clone(),
            err: status.err.clone(),
            container_status: status.container.as_ref().map(|c| ContainerStatus {
                container_id: c.container_id.clone(),
                pid: c.pid,
                exit_code: c.exit_code,
            }),
            port_status: PortStatus {
                ports: status
                    .port_status
                    .as_ref()
                    .map(|p| p.ports.iter().map(port_config_from_grpc).collect())
                    .unwrap_or_default(),
            },
        },
        desired_state: state_from_grpc(task.desired_state),
        networks_attachments: task
            .networks
            .iter()
            .map(network_attachment_from_grpc)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn state_from_grpc(state: wt::TaskState) -> TaskState {
    match state {
        wt::TaskState::New => TaskState::New,
        wt::TaskState::Pending => TaskState::Pending,
        wt::TaskState::Allocated => TaskState::Allocated,
        wt::TaskState::Assigned => TaskState::Assigned,
        wt::TaskState::Accepted => TaskState::Accepted,
        wt::TaskState::Preparing => TaskState::Preparing,
        wt::TaskState::Ready => TaskState::Ready,
        wt::TaskState::Starting => TaskState::Starting,
        wt::TaskState::Running => TaskState::Running,
        wt::TaskState::Complete => TaskState::Complete,
        wt::TaskState::Shutdown => TaskState::Shutdown,
        wt::TaskState::Failed => TaskState::Failed,
        wt::TaskState::Rejected => TaskState::Rejected,
        wt::TaskState::Remove => TaskState::Remove,
        wt::TaskState::Orphaned => TaskState::Orphaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_task() -> wire::Task {
        wire::Task {
            id: "task5f6g".to_string(),
            meta: wire::Meta {
                version: wire::Version { index: 51 },
                created_at: Some(wire::Timestamp::new(1_700_000_000, 0)),
                updated_at: Some(wire::Timestamp::new(1_700_000_030, 0)),
            },
            annotations: wire::Annotations {
                name: "web.2".to_string(),
                ..Default::default()
            },
            spec: wire::TaskSpec {
                container: Some(wire::service::ContainerSpec {
                    image: "nginx:1.25".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            service_id: "svc9x8y7".to_string(),
            slot: 2,
            node_id: "node01abc".to_string(),
            status: wt::TaskStatus {
                timestamp: Some(wire::Timestamp::new(1_700_000_029, 123)),
                state: wt::TaskState::Running,
                message: "started".to_string(),
                err: String::new(),
                container: Some(wt::ContainerStatus {
                    container_id: "c0ffee".to_string(),
                    pid: 4242,
                    exit_code: 0,
                }),
                port_status: None,
            },
            desired_state: wt::TaskState::Running,
            networks: vec![wire::NetworkAttachment {
                network: Some(wire::Network {
                    id: "nw1a2b3c".to_string(),
                    ..Default::default()
                }),
                addresses: vec!["10.0.9.7/24".to_string()],
                aliases: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_task_from_grpc() {
        let task = task_from_grpc(&running_task()).unwrap();

        assert_eq!(task.id, "task5f6g");
        assert_eq!(task.name, "web.2");
        assert_eq!(task.service_id, "svc9x8y7");
        assert_eq!(task.slot, Some(2));
        assert_eq!(task.status.state, TaskState::Running);
        assert_eq!(task.status.timestamp.timestamp_subsec_nanos(), 123);
        assert_eq!(task.status.container_status.as_ref().unwrap().pid, 4242);
        assert!(task.status.port_status.ports.is_empty());
        assert_eq!(task.networks_attachments[0].network.id, "nw1a2b3c");
        assert_eq!(
            task.spec.container_spec.as_ref().unwrap().image,
            "nginx:1.25"
        );
    }

    #[test]
    fn test_global_task_has_no_slot() {
        let mut wire_task = running_task();
        wire_task.slot = 0;
        assert_eq!(task_from_grpc(&wire_task).unwrap().slot, None);
    }

    #[test]
    fn test_completed_state() {
        let mut wire_task = running_task();
        wire_task.status.state = wt::TaskState::Complete;
        wire_task.desired_state = wt::TaskState::Shutdown;

        let task = task_from_grpc(&wire_task).unwrap();
        assert_eq!(task.status.state, TaskState::Complete);
        assert!(task.status.state.is_terminal());
        assert!(!TaskState::Running.is_terminal());

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["Status"]["State"], "complete");
        assert_eq!(json["DesiredState"], "shutdown");
    }

    #[test]
    fn test_bad_attachment_timestamp_fails_task() {
        let mut wire_task = running_task();
        if let Some(network) = wire_task.networks[0].network.as_mut() {
            network.meta.created_at = Some(wire::Timestamp::new(0, -3));
        }

        assert!(task_from_grpc(&wire_task).unwrap_err().is_format());
    }

    #[test]
    fn test_missing_status_timestamp() {
        let mut wire_task = running_task();
        wire_task.status.timestamp = None;

        let task = task_from_grpc(&wire_task).unwrap();
        assert_eq!(task.status.timestamp, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_protocol_state_names() {
        let task: wire::Task = serde_json::from_str(
            r#"{"id": "t1", "status": {"state": "ALLOCATED"}, "desiredState": "COMPLETE"}"#,
        )
        .unwrap();
        assert_eq!(task.status.state, wt::TaskState::Allocated);
        assert_eq!(task.desired_state, wt::TaskState::Complete);

        let task = task_from_grpc(&task).unwrap();
        assert_eq!(task.status.state, TaskState::Allocated);
        assert!(TaskState::Pending < TaskState::Allocated);
        assert!(TaskState::Allocated < TaskState::Assigned);
        assert!(!TaskState::Allocated.is_terminal());

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["Status"]["State"], "allocated");
        assert_eq!(json["DesiredState"], "complete");
    }
}
