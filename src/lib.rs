//! swarm-convert - swarm control-plane to API conversion
//!
//! Translates objects read from a swarm manager into the daemon's API
//! representation, and API requests back into manager specs:
//!
//! - Timestamp and duration codec with range validation
//! - Version and metadata mapping
//! - Networks, services, nodes, tasks, secrets and configs
//! - Batch conversion with per-object failures
//! - Platform support check for cluster mode
//! - Dump inspection for the `swarm-convert` tool

pub mod convert;
pub mod error;
pub mod inspect;
pub mod system;
pub mod types;
pub mod wire;

pub use error::{ConvertError, Result};
