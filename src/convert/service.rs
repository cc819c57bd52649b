//! Service conversion

use super::meta::{annotations_from_grpc, annotations_to_grpc, meta_from_grpc};
use super::timestamp::{duration_to_grpc, optional_duration_from_grpc, optional_timestamp_from_grpc};
use crate::error::Result;
use crate::types::service::{
    ContainerSpec, Endpoint, EndpointSpec, EndpointVirtualIp, FailureAction,
    NetworkAttachmentConfig, Placement, PortConfig, PortProtocol, PublishMode, ResolutionMode,
    ResourceRequirements, Resources, RestartCondition, RestartPolicy, Service, ServiceMode,
    ServiceSpec, TaskSpec, UpdateConfig, UpdateOrder, UpdateState, UpdateStatus,
};
use crate::wire;
use crate::wire::service as ws;
use tracing::trace;

/// Convert a wire service
pub fn service_from_grpc(service: &wire::Service) -> Result<Service> {
    trace!(id = %service.id, "converting service");

    Ok(Service {
        id: service.id.clone(),
        meta: meta_from_grpc(&service.meta)?,
        spec: service_spec_from_grpc(&service.spec)?,
        previous_spec: service
            .previous_spec
            .as_ref()
            .map(service_spec_from_grpc)
            .transpose()?,
        endpoint: service
            .endpoint
            .as_ref()
            .map(endpoint_from_grpc)
            .unwrap_or_default(),
        update_status: service
            .update_status
            .as_ref()
            .map(update_status_from_grpc)
            .transpose()?,
    })
}

fn service_spec_from_grpc(spec: &wire::ServiceSpec) -> Result<ServiceSpec> {
    Ok(ServiceSpec {
        annotations: annotations_from_grpc(&spec.annotations),
        task_template: task_spec_from_grpc(&spec.task)?,
        mode: spec.mode.as_ref().map(|mode| match mode {
            ws::ServiceMode::Replicated { replicas } => ServiceMode::Replicated {
                replicas: *replicas,
            },
            ws::ServiceMode::Global {} => ServiceMode::Global {},
        }),
        update_config: spec
            .update
            .as_ref()
            .map(update_config_from_grpc)
            .transpose()?,
        rollback_config: spec
            .rollback
            .as_ref()
            .map(update_config_from_grpc)
            .transpose()?,
        endpoint_spec: spec.endpoint.as_ref().map(endpoint_spec_from_grpc),
    })
}

/// Convert a task template; shared with task conversion
pub(crate) fn task_spec_from_grpc(spec: &wire::TaskSpec) -> Result<TaskSpec> {
    Ok(TaskSpec {
        container_spec: spec.container.as_ref().map(|c| ContainerSpec {
            image: c.image.clone(),
            labels: c.labels.clone(),
            command: c.command.clone(),
            args: c.args.clone(),
            env: c.env.clone(),
            dir: c.dir.clone(),
            user: c.user.clone(),
            hostname: c.hostname.clone(),
        }),
        resources: spec.resources.as_ref().map(|r| ResourceRequirements {
            limits: r.limits.as_ref().map(resources_from_grpc),
            reservations: r.reservations.as_ref().map(resources_from_grpc),
        }),
        restart_policy: spec
            .restart
            .as_ref()
            .map(restart_policy_from_grpc)
            .transpose()?,
        placement: spec.placement.as_ref().map(|p| Placement {
            constraints: p.constraints.clone(),
        }),
        networks: spec
            .networks
            .iter()
            .map(|n| NetworkAttachmentConfig {
                target: n.target.clone(),
                aliases: n.aliases.clone(),
                driver_opts: n.driver_attachment_opts.clone(),
            })
            .collect(),
        force_update: spec.force_update,
    })
}

fn resources_from_grpc(r: &ws::Resources) -> Resources {
    Resources {
        nano_cpus: r.nano_cpus,
        memory_bytes: r.memory_bytes,
    }
}

fn restart_policy_from_grpc(p: &ws::RestartPolicy) -> Result<RestartPolicy> {
    Ok(RestartPolicy {
        condition: match p.condition {
            ws::RestartCondition::None => RestartCondition::None,
            ws::RestartCondition::OnFailure => RestartCondition::OnFailure,
            ws::RestartCondition::Any => RestartCondition::Any,
        },
        delay: optional_duration_from_grpc(p.delay.as_ref())?,
        max_attempts: Some(p.max_attempts),
        window: optional_duration_from_grpc(p.window.as_ref())?,
    })
}

fn update_config_from_grpc(c: &ws::UpdateConfig) -> Result<UpdateConfig> {
    Ok(UpdateConfig {
        parallelism: c.parallelism,
        delay: optional_duration_from_grpc(c.delay.as_ref())?.unwrap_or_default(),
        failure_action: match c.failure_action {
            ws::FailureAction::Pause => FailureAction::Pause,
            ws::FailureAction::Continue => FailureAction::Continue,
            ws::FailureAction::Rollback => FailureAction::Rollback,
        },
        monitor: optional_duration_from_grpc(c.monitor.as_ref())?.unwrap_or_default(),
        order: match c.order {
            ws::UpdateOrder::StopFirst => UpdateOrder::StopFirst,
            ws::UpdateOrder::StartFirst => UpdateOrder::StartFirst,
        },
    })
}

fn endpoint_spec_from_grpc(spec: &ws::EndpointSpec) -> EndpointSpec {
    EndpointSpec {
        mode: match spec.mode {
            ws::ResolutionMode::Vip => ResolutionMode::Vip,
            ws::ResolutionMode::Dnsrr => ResolutionMode::Dnsrr,
        },
        ports: spec.ports.iter().map(port_config_from_grpc).collect(),
    }
}

/// Convert a published port; shared with task conversion
pub(crate) fn port_config_from_grpc(port: &ws::PortConfig) -> PortConfig {
    PortConfig {
        name: port.name.clone(),
        protocol: match port.protocol {
            ws::PortProtocol::Tcp => PortProtocol::Tcp,
            ws::PortProtocol::Udp => PortProtocol::Udp,
            ws::PortProtocol::Sctp => PortProtocol::Sctp,
        },
        target_port: port.target_port,
        published_port: port.published_port,
        publish_mode: match port.publish_mode {
            ws::PublishMode::Ingress => PublishMode::Ingress,
            ws::PublishMode::Host => PublishMode::Host,
        },
    }
}

fn endpoint_from_grpc(endpoint: &wire::Endpoint) -> Endpoint {
    Endpoint {
        spec: endpoint
            .spec
            .as_ref()
            .map(endpoint_spec_from_grpc)
            .unwrap_or_default(),
        ports: endpoint.ports.iter().map(port_config_from_grpc).collect(),
        virtual_ips: endpoint
            .virtual_ips
            .iter()
            .map(|vip| EndpointVirtualIp {
                network_id: vip.network_id.clone(),
                addr: vip.addr.clone(),
            })
            .collect(),
    }
}

fn update_status_from_grpc(status: &ws::UpdateStatus) -> Result<UpdateStatus> {
    Ok(UpdateStatus {
        state: match status.state {
            ws::UpdateState::Unknown => UpdateState::Unknown,
            ws::UpdateState::Updating => UpdateState::Updating,
            ws::UpdateState::Paused => UpdateState::Paused,
            ws::UpdateState::Completed => UpdateState::Completed,
            ws::UpdateState::RollbackStarted => UpdateState::RollbackStarted,
            ws::UpdateState::RollbackPaused => UpdateState::RollbackPaused,
            ws::UpdateState::RollbackCompleted => UpdateState::RollbackCompleted,
        },
        started_at: optional_timestamp_from_grpc(status.started_at.as_ref())?,
        completed_at: optional_timestamp_from_grpc(status.completed_at.as_ref())?,
        message: status.message.clone(),
    })
}

/// Convert a service spec to its wire form
///
/// A spec without a mode is submitted as a single replica.
pub fn service_spec_to_grpc(spec: &ServiceSpec) -> wire::ServiceSpec {
    let mode = match &spec.mode {
        Some(ServiceMode::Global {}) => ws::ServiceMode::Global {},
        Some(ServiceMode::Replicated { replicas }) => ws::ServiceMode::Replicated {
            replicas: *replicas,
        },
        None => ws::ServiceMode::Replicated { replicas: 1 },
    };

    wire::ServiceSpec {
        annotations: annotations_to_grpc(&spec.annotations),
        task: task_spec_to_grpc(&spec.task_template),
        mode: Some(mode),
        update: spec.update_config.as_ref().map(update_config_to_grpc),
        rollback: spec.rollback_config.as_ref().map(update_config_to_grpc),
        endpoint: spec.endpoint_spec.as_ref().map(endpoint_spec_to_grpc),
    }
}

fn task_spec_to_grpc(spec: &TaskSpec) -> wire::TaskSpec {
    wire::TaskSpec {
        container: spec.container_spec.as_ref().map(|c| ws::ContainerSpec {
            image: c.image.clone(),
            labels: c.labels.clone(),
            command: c.command.clone(),
            args: c.args.clone(),
            env: c.env.clone(),
            dir: c.dir.clone(),
            user: c.user.clone(),
            hostname: c.hostname.clone(),
        }),
        resources: spec.resources.as_ref().map(|r| ws::ResourceRequirements {
            limits: r.limits.as_ref().map(resources_to_grpc),
            reservations: r.reservations.as_ref().map(resources_to_grpc),
        }),
        restart: spec.restart_policy.as_ref().map(|p| ws::RestartPolicy {
            condition: match p.condition {
                RestartCondition::None => ws::RestartCondition::None,
                RestartCondition::OnFailure => ws::RestartCondition::OnFailure,
                RestartCondition::Any => ws::RestartCondition::Any,
            },
            delay: p.delay.map(duration_to_grpc),
            max_attempts: p.max_attempts.unwrap_or_default(),
            window: p.window.map(duration_to_grpc),
        }),
        placement: spec.placement.as_ref().map(|p| ws::Placement {
            constraints: p.constraints.clone(),
        }),
        networks: spec
            .networks
            .iter()
            .map(|n| wire::NetworkAttachmentConfig {
                target: n.target.clone(),
                aliases: n.aliases.clone(),
                driver_attachment_opts: n.driver_opts.clone(),
            })
            .collect(),
        force_update: spec.force_update,
    }
}

fn resources_to_grpc(r: &Resources) -> ws::Resources {
    ws::Resources {
        nano_cpus: r.nano_cpus,
        memory_bytes: r.memory_bytes,
    }
}

fn update_config_to_grpc(c: &UpdateConfig) -> ws::UpdateConfig {
    ws::UpdateConfig {
        parallelism: c.parallelism,
        delay: Some(duration_to_grpc(c.delay)),
        failure_action: match c.failure_action {
            FailureAction::Pause => ws::FailureAction::Pause,
            FailureAction::Continue => ws::FailureAction::Continue,
            FailureAction::Rollback => ws::FailureAction::Rollback,
        },
        monitor: (c.monitor != 0).then(|| duration_to_grpc(c.monitor)),
        order: match c.order {
            UpdateOrder::StopFirst => ws::UpdateOrder::StopFirst,
            UpdateOrder::StartFirst => ws::UpdateOrder::StartFirst,
        },
    }
}

fn endpoint_spec_to_grpc(spec: &EndpointSpec) -> ws::EndpointSpec {
    ws::EndpointSpec {
        mode: match spec.mode {
            ResolutionMode::Vip => ws::ResolutionMode::Vip,
            ResolutionMode::Dnsrr => ws::ResolutionMode::Dnsrr,
        },
        ports: spec
            .ports
            .iter()
            .map(|port| ws::PortConfig {
                name: port.name.clone(),
                protocol: match port.protocol {
                    PortProtocol::Tcp => ws::PortProtocol::Tcp,
                    PortProtocol::Udp => ws::PortProtocol::Udp,
                    PortProtocol::Sctp => ws::PortProtocol::Sctp,
                },
                target_port: port.target_port,
                published_port: port.published_port,
                publish_mode: match port.publish_mode {
                    PublishMode::Ingress => ws::PublishMode::Ingress,
                    PublishMode::Host => ws::PublishMode::Host,
                },
            })
            .collect(),
    }
}
