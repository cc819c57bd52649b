//! Control-plane dump inspection
//!
//! Loads wire objects from JSON, either a single object or an array as
//! returned by a list call, and converts them to their API form.

use crate::convert::{self, Converted};
use crate::error::{ConvertError, Result};
use crate::wire::{self, WireObject};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Kind of object held in a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Network,
    Service,
    Node,
    Task,
    Secret,
    Config,
}

impl FromStr for ObjectKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "network" | "networks" => Ok(Self::Network),
            "service" | "services" => Ok(Self::Service),
            "node" | "nodes" => Ok(Self::Node),
            "task" | "tasks" => Ok(Self::Task),
            "secret" | "secrets" => Ok(Self::Secret),
            "config" | "configs" => Ok(Self::Config),
            _ => Err(ConvertError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Service => "service",
            Self::Node => "node",
            Self::Task => "task",
            Self::Secret => "secret",
            Self::Config => "config",
        };
        write!(f, "{}", name)
    }
}

/// Convert a JSON dump of wire objects of the given kind
///
/// Malformed JSON fails the whole call; objects that parse but fail
/// conversion are reported in the result's failures.
pub fn convert_json(kind: ObjectKind, input: &str) -> Result<Converted<serde_json::Value>> {
    match kind {
        ObjectKind::Network => {
            convert_dump::<wire::Network, _, _>(input, convert::network_from_grpc)
        }
        ObjectKind::Service => {
            convert_dump::<wire::Service, _, _>(input, convert::service_from_grpc)
        }
        ObjectKind::Node => convert_dump::<wire::Node, _, _>(input, convert::node_from_grpc),
        ObjectKind::Task => convert_dump::<wire::Task, _, _>(input, convert::task_from_grpc),
        ObjectKind::Secret => convert_dump::<wire::Secret, _, _>(input, convert::secret_from_grpc),
        ObjectKind::Config => convert_dump::<wire::Config, _, _>(input, convert::config_from_grpc),
    }
}

/// Read and convert a dump file
pub fn inspect_file(kind: ObjectKind, path: &Path) -> Result<Converted<serde_json::Value>> {
    debug!("Inspecting {} dump {:?}", kind, path);
    let input = std::fs::read_to_string(path)?;
    convert_json(kind, &input)
}

fn convert_dump<W, D, F>(input: &str, convert: F) -> Result<Converted<serde_json::Value>>
where
    W: WireObject + DeserializeOwned,
    D: Serialize,
    F: Fn(&W) -> Result<D>,
{
    let value: serde_json::Value = serde_json::from_str(input)?;
    let objects: Vec<W> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    debug!("Loaded {} objects", objects.len());

    let converted = convert::convert_all(&objects, convert);
    let mut values = Converted {
        items: Vec::with_capacity(converted.items.len()),
        failures: converted.failures,
    };
    for item in &converted.items {
        values.items.push(serde_json::to_value(item)?);
    }
    Ok(values)
}
