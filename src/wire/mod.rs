//! Control-plane wire messages
//!
//! These mirror the swarm manager's protocol messages as they arrive
//! from the cluster client, already decoded. Nothing in this crate
//! mutates them; the converters only borrow.
//!
//! Every message derives `serde` so manager dumps can be loaded with
//! the inspection tool. Field names follow the protocol's JSON mapping
//! (lower camel case) and enums use the protocol's constant names.

pub mod common;
pub mod network;
pub mod node;
pub mod secret;
pub mod service;
pub mod task;

pub use common::{Annotations, Driver, Duration, Meta, Timestamp, Version};
pub use network::{
    IpamConfig, IpamOptions, Network, NetworkAttachment, NetworkAttachmentConfig, NetworkConfigFrom,
    NetworkSpec,
};
pub use node::{Node, NodeSpec};
pub use secret::{Config, ConfigSpec, Secret, SecretSpec};
pub use service::{Endpoint, EndpointSpec, Service, ServiceSpec, TaskSpec};
pub use task::{Task, TaskState};

/// A top-level object stored by the manager
pub trait WireObject {
    /// Control-plane assigned identifier
    fn object_id(&self) -> &str;
}

macro_rules! impl_wire_object {
    ($($ty:ty),+) => {
        $(impl WireObject for $ty {
            fn object_id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_wire_object!(Network, Service, Node, Task, Secret, Config);
