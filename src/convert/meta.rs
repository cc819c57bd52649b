//! Version, timestamps and the small sub-messages every object shares

use super::timestamp::timestamp_from_grpc;
use crate::error::Result;
use crate::types::{Annotations, Driver, Meta, Version};
use crate::wire;
use chrono::{DateTime, Utc};
use tracing::trace;

/// Convert control-plane metadata
///
/// A missing creation time maps to the Unix epoch. A missing or zero
/// update time falls back to the creation time, so objects that were
/// never updated (or never committed) still carry a usable `UpdatedAt`.
pub fn meta_from_grpc(meta: &wire::Meta) -> Result<Meta> {
    let created_at = match &meta.created_at {
        Some(ts) => timestamp_from_grpc(ts)?,
        None => DateTime::<Utc>::UNIX_EPOCH,
    };

    let updated_at = match &meta.updated_at {
        Some(ts) if !ts.is_zero() => timestamp_from_grpc(ts)?,
        _ => {
            trace!("updated_at unset, using created_at");
            created_at
        }
    };

    Ok(Meta {
        version: Version::new(meta.version.index),
        created_at,
        updated_at,
    })
}

pub fn annotations_from_grpc(annotations: &wire::Annotations) -> Annotations {
    Annotations {
        name: annotations.name.clone(),
        labels: annotations.labels.clone(),
    }
}

pub fn annotations_to_grpc(annotations: &Annotations) -> wire::Annotations {
    wire::Annotations {
        name: annotations.name.clone(),
        labels: annotations.labels.clone(),
    }
}

pub fn driver_from_grpc(driver: &wire::Driver) -> Driver {
    Driver {
        name: driver.name.clone(),
        options: driver.options.clone(),
    }
}

pub fn driver_to_grpc(driver: &Driver) -> wire::Driver {
    wire::Driver {
        name: driver.name.clone(),
        options: driver.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn wire_meta(index: u64, created: Option<i64>, updated: Option<i64>) -> wire::Meta {
        wire::Meta {
            version: wire::Version { index },
            created_at: created.map(|s| wire::Timestamp::new(s, 0)),
            updated_at: updated.map(|s| wire::Timestamp::new(s, 0)),
        }
    }

    #[test]
    fn test_meta_from_grpc() {
        let meta = meta_from_grpc(&wire_meta(42, Some(1_000), Some(2_000))).unwrap();
        assert_eq!(meta.version, Version::new(42));
        assert_eq!(meta.created_at.timestamp(), 1_000);
        assert_eq!(meta.updated_at.timestamp(), 2_000);
    }

    #[test]
    fn test_updated_falls_back_to_created() {
        let missing = meta_from_grpc(&wire_meta(3, Some(1_000), None)).unwrap();
        assert_eq!(missing.updated_at, missing.created_at);

        let zero = meta_from_grpc(&wire_meta(3, Some(1_000), Some(0))).unwrap();
        assert_eq!(zero.updated_at, zero.created_at);
    }

    #[test]
    fn test_unversioned_meta() {
        let meta = meta_from_grpc(&wire::Meta::default()).unwrap();
        assert!(meta.version.is_unversioned());
        assert_eq!(meta.created_at, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(meta.updated_at, meta.created_at);
    }

    #[test]
    fn test_version_order_follows_index() {
        let older = meta_from_grpc(&wire_meta(7, Some(1_000), None)).unwrap();
        let newer = meta_from_grpc(&wire_meta(8, Some(1_000), Some(1_500))).unwrap();
        assert!(older.version < newer.version);
        assert!(!older.version.is_unversioned());
    }

    #[test]
    fn test_bad_timestamp_propagates() {
        let meta = wire::Meta {
            version: wire::Version { index: 1 },
            created_at: Some(wire::Timestamp::new(1_000, 0)),
            updated_at: Some(wire::Timestamp::new(1_000, 1_000_000_000)),
        };
        assert!(meta_from_grpc(&meta).unwrap_err().is_format());
    }

    #[test]
    fn test_annotations_round_trip() {
        let wire_annotations = wire::Annotations {
            name: "backend".to_string(),
            labels: HashMap::from([("tier".to_string(), "db".to_string())]),
        };
        let annotations = annotations_from_grpc(&wire_annotations);
        assert_eq!(annotations.name, "backend");
        assert_eq!(annotations_to_grpc(&annotations), wire_annotations);
    }
}
