//! Domain types exposed through the daemon API
//!
//! These serialize straight into the daemon's API JSON: PascalCase keys,
//! RFC 3339 timestamps, enum values in lower case. They are built fresh
//! by the converters in [`crate::convert`] and never mutated afterwards.

pub mod network;
pub mod node;
pub mod secret;
pub mod service;
pub mod swarm;
pub mod task;

pub use network::{
    ConfigReference, Ipam, IpamConfig, IpamOptions, IpamPoolConfig, Network, NetworkAttachment,
    NetworkCreateRequest, NetworkResource, NetworkScope, NetworkSpec,
};
pub use node::{Node, NodeAvailability, NodeRole, NodeSpec, NodeState};
pub use secret::{Config, ConfigSpec, Secret, SecretSpec};
pub use service::{Endpoint, EndpointSpec, Service, ServiceMode, ServiceSpec, TaskSpec};
pub use swarm::{Annotations, Driver, Meta, Version};
pub use task::{Task, TaskState};
