//! Control-plane to API conversion
//!
//! Each entity kind has a `*_from_grpc` function turning a borrowed wire
//! message into a freshly allocated domain value, and where the API can
//! submit that kind, a `*_to_grpc` function for the reverse direction.
//! Conversions are pure: no I/O, no shared state, no locking.
//!
//! The first malformed field fails the whole object. List responses go
//! through [`convert_all`], which keeps the objects that converted and
//! reports the rest by ID.

pub mod config;
pub mod meta;
pub mod network;
pub mod node;
pub mod secret;
pub mod service;
pub mod task;
pub mod timestamp;

pub use config::{config_from_grpc, config_spec_to_grpc};
pub use meta::meta_from_grpc;
pub use network::{
    basic_network_create_to_grpc, basic_network_from_grpc, is_ingress_network,
    network_attachment_from_grpc, network_from_grpc, network_spec_to_grpc,
};
pub use node::{node_from_grpc, node_spec_to_grpc};
pub use secret::{secret_from_grpc, secret_spec_to_grpc};
pub use service::{service_from_grpc, service_spec_to_grpc};
pub use task::task_from_grpc;
pub use timestamp::{duration_from_grpc, duration_to_grpc, timestamp_from_grpc, timestamp_to_grpc};

use crate::error::{ConvertError, Result};
use crate::wire::WireObject;
use tracing::warn;

/// An object that could not be converted
#[derive(Debug)]
pub struct ConversionFailure {
    /// ID of the offending wire object
    pub id: String,
    pub error: ConvertError,
}

/// Result of converting a list of wire objects
#[derive(Debug)]
pub struct Converted<T> {
    pub items: Vec<T>,
    pub failures: Vec<ConversionFailure>,
}

impl<T> Default for Converted<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> Converted<T> {
    /// True when every object converted
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Map converted items, keeping failures as they are
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Converted<U> {
        Converted {
            items: self.items.into_iter().map(f).collect(),
            failures: self.failures,
        }
    }
}

/// Convert every object of a list response
///
/// Input order is preserved among the converted items.
pub fn convert_all<W, D, F>(objects: &[W], convert: F) -> Converted<D>
where
    W: WireObject,
    F: Fn(&W) -> Result<D>,
{
    let mut converted = Converted::default();

    for object in objects {
        match convert(object) {
            Ok(item) => converted.items.push(item),
            Err(error) => {
                warn!(id = %object.object_id(), "Failed to convert object: {}", error);
                converted.failures.push(ConversionFailure {
                    id: object.object_id().to_string(),
                    error,
                });
            }
        }
    }

    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire;

    fn network(id: &str, nanos: i32) -> wire::Network {
        wire::Network {
            id: id.to_string(),
            meta: wire::Meta {
                version: wire::Version { index: 1 },
                created_at: Some(wire::Timestamp::new(1_515_642_840, nanos)),
                updated_at: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_convert_all_keeps_good_objects() {
        let networks = vec![
            network("aaa", 0),
            network("bad", 1_000_000_000),
            network("ccc", 5),
        ];

        let converted = convert_all(&networks, network_from_grpc);

        assert!(!converted.is_complete());
        let ids: Vec<_> = converted.items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["aaa", "ccc"]);
        assert_eq!(converted.failures.len(), 1);
        assert_eq!(converted.failures[0].id, "bad");
        assert!(converted.failures[0].error.is_format());
    }

    #[test]
    fn test_convert_all_empty() {
        let converted = convert_all(&Vec::<wire::Network>::new(), basic_network_from_grpc);
        assert!(converted.is_complete());
        assert!(converted.items.is_empty());
    }

    #[test]
    fn test_converted_map() {
        let networks = vec![network("aaa", 0), network("bad", -1)];
        let names = convert_all(&networks, network_from_grpc).map(|n| n.id);
        assert_eq!(names.items, vec!["aaa".to_string()]);
        assert_eq!(names.failures.len(), 1);
    }
}
