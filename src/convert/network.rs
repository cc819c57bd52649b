//! Network conversion
//!
//! Two read views exist. [`network_from_grpc`] produces the swarm view
//! with version, both timestamps and the spec as submitted.
//! [`basic_network_from_grpc`] produces the flat view served by the
//! plain network inspect endpoint, built from the allocated state.
//!
//! Missing IPAM blocks and driver state become empty values rather than
//! `None`, so API consumers never see `null` where a list or map belongs.

use super::meta::{
    annotations_from_grpc, annotations_to_grpc, driver_from_grpc, driver_to_grpc, meta_from_grpc,
};
use crate::error::Result;
use crate::types::{
    ConfigReference, Ipam, IpamConfig, IpamOptions, IpamPoolConfig, Network,
    NetworkAttachment, NetworkCreateRequest, NetworkResource, NetworkScope, NetworkSpec,
};
use crate::wire;
use tracing::trace;

/// IPAM driver used when a request leaves the driver name empty
pub const DEFAULT_IPAM_DRIVER: &str = "default";

/// Label older managers put on the ingress network
const LEGACY_INGRESS_LABEL: &str = "com.docker.swarm.internal";
const LEGACY_INGRESS_NAME: &str = "ingress";

/// Check if a wire network is the routing-mesh ingress network
pub fn is_ingress_network(network: &wire::Network) -> bool {
    if network.spec.ingress {
        return true;
    }

    // Networks created before the ingress flag existed are recognized by name and label
    network.spec.annotations.name == LEGACY_INGRESS_NAME
        && network
            .spec
            .annotations
            .labels
            .contains_key(LEGACY_INGRESS_LABEL)
}

/// Convert a wire network to the swarm network view
pub fn network_from_grpc(network: &wire::Network) -> Result<Network> {
    trace!(id = %network.id, "converting network");

    let spec = &network.spec;

    Ok(Network {
        id: network.id.clone(),
        meta: meta_from_grpc(&network.meta)?,
        spec: NetworkSpec {
            annotations: annotations_from_grpc(&spec.annotations),
            driver_configuration: spec.driver_config.as_ref().map(driver_from_grpc),
            ipv6_enabled: spec.ipv6_enabled,
            internal: spec.internal,
            attachable: spec.attachable,
            ingress: is_ingress_network(network),
            ipam_options: ipam_from_grpc(spec.ipam.as_ref()),
            config_from: spec.config_from_network().map(|name| ConfigReference {
                network: name.to_string(),
            }),
            scope: NetworkScope::Swarm,
        },
        driver_state: network
            .driver_state
            .as_ref()
            .map(driver_from_grpc)
            .unwrap_or_default(),
        ipam_options: ipam_from_grpc(network.ipam.as_ref()),
    })
}

/// Convert a wire network to the plain inspect view
pub fn basic_network_from_grpc(network: &wire::Network) -> Result<NetworkResource> {
    trace!(id = %network.id, "converting basic network");

    let meta = meta_from_grpc(&network.meta)?;
    let spec = &network.spec;
    let driver_state = network.driver_state.clone().unwrap_or_default();

    Ok(NetworkResource {
        name: spec.annotations.name.clone(),
        id: network.id.clone(),
        created: meta.created_at,
        scope: NetworkScope::Swarm,
        driver: driver_state.name,
        enable_ipv6: spec.ipv6_enabled,
        ipam: basic_ipam_from_grpc(network.ipam.as_ref()),
        internal: spec.internal,
        attachable: spec.attachable,
        ingress: is_ingress_network(network),
        config_from: ConfigReference {
            network: spec.config_from_network().unwrap_or_default().to_string(),
        },
        options: driver_state.options,
        labels: spec.annotations.labels.clone(),
    })
}

/// Convert a network attached to a task
pub fn network_attachment_from_grpc(
    attachment: &wire::NetworkAttachment,
) -> Result<NetworkAttachment> {
    let network = match &attachment.network {
        Some(network) => network_from_grpc(network)?,
        None => Network::default(),
    };

    Ok(NetworkAttachment {
        network,
        addresses: attachment.addresses.clone(),
    })
}

fn ipam_from_grpc(ipam: Option<&wire::IpamOptions>) -> IpamOptions {
    let Some(ipam) = ipam else {
        return IpamOptions::default();
    };

    IpamOptions {
        driver: ipam
            .driver
            .as_ref()
            .map(driver_from_grpc)
            .unwrap_or_default(),
        configs: ipam
            .configs
            .iter()
            .map(|config| IpamPoolConfig {
                subnet: config.subnet.clone(),
                range: config.range.clone(),
                gateway: config.gateway.clone(),
            })
            .collect(),
    }
}

fn basic_ipam_from_grpc(ipam: Option<&wire::IpamOptions>) -> Ipam {
    let Some(ipam) = ipam else {
        return Ipam::default();
    };

    let driver = ipam.driver.clone().unwrap_or_default();

    Ipam {
        driver: driver.name,
        options: driver.options,
        config: ipam
            .configs
            .iter()
            .map(|config| IpamConfig {
                subnet: config.subnet.clone(),
                ip_range: config.range.clone(),
                gateway: config.gateway.clone(),
                aux_address: config.reserved.clone(),
            })
            .collect(),
    }
}

/// Convert a network create request to a wire network spec
///
/// The requested scope is ignored: networks created through the manager
/// are always swarm scoped.
pub fn basic_network_create_to_grpc(create: &NetworkCreateRequest) -> wire::NetworkSpec {
    let ipam = create.ipam.as_ref().map(|ipam| wire::IpamOptions {
        driver: Some(wire::Driver {
            name: ipam_driver_name(&ipam.driver),
            options: ipam.options.clone(),
        }),
        configs: ipam
            .config
            .iter()
            .map(|config| wire::network::IpamConfig {
                subnet: config.subnet.clone(),
                range: config.ip_range.clone(),
                gateway: config.gateway.clone(),
                ..Default::default()
            })
            .collect(),
    });

    wire::NetworkSpec {
        annotations: wire::Annotations {
            name: create.name.clone(),
            labels: create.labels.clone(),
        },
        driver_config: Some(wire::Driver {
            name: create.driver.clone(),
            options: create.options.clone(),
        }),
        ipv6_enabled: create.enable_ipv6,
        internal: create.internal,
        ipam,
        attachable: create.attachable,
        ingress: create.ingress,
        config_from: create
            .config_from
            .as_ref()
            .map(|from| wire::NetworkConfigFrom::Network(from.network.clone())),
    }
}

/// Convert a swarm network spec back to its wire form
///
/// `ingress` is sent as read. A legacy ingress network, recognized by
/// name and label, is therefore resubmitted with the ingress flag set,
/// which upgrades it to the current marking.
pub fn network_spec_to_grpc(spec: &NetworkSpec) -> wire::NetworkSpec {
    let ipam = if spec.ipam_options.is_empty() {
        None
    } else {
        let driver = &spec.ipam_options.driver;
        Some(wire::IpamOptions {
            driver: Some(wire::Driver {
                name: ipam_driver_name(&driver.name),
                options: driver.options.clone(),
            }),
            configs: spec
                .ipam_options
                .configs
                .iter()
                .map(|config| wire::network::IpamConfig {
                    subnet: config.subnet.clone(),
                    range: config.range.clone(),
                    gateway: config.gateway.clone(),
                    ..Default::default()
                })
                .collect(),
        })
    };

    wire::NetworkSpec {
        annotations: annotations_to_grpc(&spec.annotations),
        driver_config: spec.driver_configuration.as_ref().map(driver_to_grpc),
        ipv6_enabled: spec.ipv6_enabled,
        internal: spec.internal,
        ipam,
        attachable: spec.attachable,
        ingress: spec.ingress,
        config_from: spec
            .config_from
            .as_ref()
            .map(|from| wire::NetworkConfigFrom::Network(from.network.clone())),
    }
}

fn ipam_driver_name(name: &str) -> String {
    if name.is_empty() {
        DEFAULT_IPAM_DRIVER.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::timestamp::timestamp_to_grpc;
    use chrono::DateTime;
    use std::collections::HashMap;

    fn overlay_network() -> wire::Network {
        wire::Network {
            id: "nw1a2b3c".to_string(),
            meta: wire::Meta {
                version: wire::Version { index: 12 },
                created_at: Some(wire::Timestamp::new(1_515_642_840, 0)),
                updated_at: Some(wire::Timestamp::new(1_515_646_440, 500)),
            },
            spec: wire::NetworkSpec {
                annotations: wire::Annotations {
                    name: "backend".to_string(),
                    labels: HashMap::from([("tier".to_string(), "db".to_string())]),
                },
                driver_config: Some(wire::Driver {
                    name: "overlay".to_string(),
                    options: HashMap::new(),
                }),
                attachable: true,
                ipam: Some(wire::IpamOptions {
                    driver: None,
                    configs: vec![wire::network::IpamConfig {
                        subnet: "10.0.9.0/24".to_string(),
                        ..Default::default()
                    }],
                }),
                ..Default::default()
            },
            driver_state: Some(wire::Driver {
                name: "overlay".to_string(),
                options: HashMap::from([(
                    "com.docker.network.driver.overlay.vxlanid_list".to_string(),
                    "4097".to_string(),
                )]),
            }),
            ipam: Some(wire::IpamOptions {
                driver: Some(wire::Driver {
                    name: "default".to_string(),
                    options: HashMap::new(),
                }),
                configs: vec![
                    wire::network::IpamConfig {
                        family: wire::network::AddressFamily::Ipv4,
                        subnet: "10.0.9.0/24".to_string(),
                        gateway: "10.0.9.1".to_string(),
                        ..Default::default()
                    },
                    wire::network::IpamConfig {
                        family: wire::network::AddressFamily::Ipv4,
                        subnet: "10.0.10.0/24".to_string(),
                        gateway: "10.0.10.1".to_string(),
                        ..Default::default()
                    },
                ],
            }),
        }
    }

    #[test]
    fn test_basic_network_created_at() {
        let expected = DateTime::parse_from_rfc3339("2018-01-10T19:54:00-08:00").unwrap();
        let nw = wire::Network {
            meta: wire::Meta {
                version: wire::Version { index: 1 },
                created_at: Some(timestamp_to_grpc(&expected).unwrap()),
                updated_at: None,
            },
            ..Default::default()
        };

        let n = basic_network_from_grpc(&nw).unwrap();
        assert_eq!(n.created, expected);
    }

    #[test]
    fn test_network_from_grpc() {
        let n = network_from_grpc(&overlay_network()).unwrap();

        assert_eq!(n.id, "nw1a2b3c");
        assert_eq!(n.meta.version.index, 12);
        assert_eq!(n.meta.created_at.timestamp(), 1_515_642_840);
        assert_eq!(n.meta.updated_at.timestamp(), 1_515_646_440);
        assert_eq!(n.spec.annotations.name, "backend");
        assert_eq!(n.spec.annotations.labels["tier"], "db");
        assert_eq!(n.spec.driver_configuration.unwrap().name, "overlay");
        assert!(n.spec.attachable);
        assert!(!n.spec.ingress);
        assert_eq!(n.spec.scope, NetworkScope::Swarm);
        assert_eq!(n.spec.ipam_options.configs.len(), 1);
        assert_eq!(
            n.driver_state.options["com.docker.network.driver.overlay.vxlanid_list"],
            "4097"
        );
    }

    #[test]
    fn test_ipam_order_preserved() {
        let n = basic_network_from_grpc(&overlay_network()).unwrap();

        let subnets: Vec<&str> = n.ipam.config.iter().map(|c| c.subnet.as_str()).collect();
        assert_eq!(subnets, ["10.0.9.0/24", "10.0.10.0/24"]);
        assert_eq!(n.ipam.driver, "default");
        assert_eq!(n.driver, "overlay");
        assert_eq!(n.scope, NetworkScope::Swarm);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let wire_network = overlay_network();
        assert_eq!(
            network_from_grpc(&wire_network).unwrap(),
            network_from_grpc(&wire_network).unwrap()
        );
        assert_eq!(
            basic_network_from_grpc(&wire_network).unwrap(),
            basic_network_from_grpc(&wire_network).unwrap()
        );
    }

    #[test]
    fn test_version_order_passes_through() {
        let first = overlay_network();
        let mut second = first.clone();
        second.meta.version.index = 13;

        let a = network_from_grpc(&first).unwrap();
        let b = network_from_grpc(&second).unwrap();
        assert!(a.meta.version < b.meta.version);
    }

    #[test]
    fn test_missing_ipam_is_empty() {
        let nw = wire::Network {
            id: "bare".to_string(),
            ..Default::default()
        };

        let basic = basic_network_from_grpc(&nw).unwrap();
        assert!(basic.ipam.config.is_empty());
        assert!(basic.options.is_empty());

        let n = network_from_grpc(&nw).unwrap();
        assert!(n.ipam_options.is_empty());
        assert!(n.spec.ipam_options.configs.is_empty());
        assert!(n.spec.driver_configuration.is_none());

        let json = serde_json::to_value(&basic).unwrap();
        assert_eq!(json["IPAM"]["Config"], serde_json::json!([]));
    }

    #[test]
    fn test_malformed_timestamp_is_reported() {
        let mut nw = overlay_network();
        nw.meta.created_at = Some(wire::Timestamp::new(1_515_642_840, 1_000_000_000));

        assert!(network_from_grpc(&nw).unwrap_err().is_format());
        assert!(basic_network_from_grpc(&nw).unwrap_err().is_format());
    }

    #[test]
    fn test_ingress_detection() {
        let mut nw = overlay_network();
        assert!(!is_ingress_network(&nw));

        nw.spec.ingress = true;
        assert!(is_ingress_network(&nw));

        let mut legacy = overlay_network();
        legacy.spec.annotations.name = "ingress".to_string();
        assert!(!is_ingress_network(&legacy));
        legacy
            .spec
            .annotations
            .labels
            .insert(LEGACY_INGRESS_LABEL.to_string(), String::new());
        assert!(is_ingress_network(&legacy));
        assert!(basic_network_from_grpc(&legacy).unwrap().ingress);
    }

    #[test]
    fn test_legacy_ingress_resubmitted_with_flag() {
        let mut legacy = overlay_network();
        legacy.spec.annotations.name = LEGACY_INGRESS_NAME.to_string();
        legacy
            .spec
            .annotations
            .labels
            .insert(LEGACY_INGRESS_LABEL.to_string(), String::new());
        assert!(!legacy.spec.ingress);

        let n = network_from_grpc(&legacy).unwrap();
        let spec = network_spec_to_grpc(&n.spec);
        assert!(spec.ingress);
        assert!(spec.annotations.labels.contains_key(LEGACY_INGRESS_LABEL));

        // Already marked networks keep the flag and nothing else changes
        let mut resubmitted = legacy.clone();
        resubmitted.spec = spec;
        assert!(is_ingress_network(&resubmitted));

        let plain = network_spec_to_grpc(&network_from_grpc(&overlay_network()).unwrap().spec);
        assert!(!plain.ingress);
    }

    #[test]
    fn test_config_from() {
        let mut nw = overlay_network();
        nw.spec.config_from = Some(wire::NetworkConfigFrom::Network("template".to_string()));

        let n = network_from_grpc(&nw).unwrap();
        assert_eq!(n.spec.config_from.unwrap().network, "template");

        let basic = basic_network_from_grpc(&nw).unwrap();
        assert_eq!(basic.config_from.network, "template");
    }

    #[test]
    fn test_network_json_shape() {
        let n = network_from_grpc(&overlay_network()).unwrap();
        let json = serde_json::to_value(&n).unwrap();

        assert_eq!(json["ID"], "nw1a2b3c");
        assert_eq!(json["Version"]["Index"], 12);
        assert_eq!(json["CreatedAt"], "2018-01-11T03:54:00Z");
        assert_eq!(json["Spec"]["Name"], "backend");
        assert_eq!(json["Spec"]["Scope"], "swarm");
    }

    #[test]
    fn test_network_create_to_grpc() {
        let create = NetworkCreateRequest {
            name: "frontend".to_string(),
            driver: "overlay".to_string(),
            scope: "local".to_string(),
            attachable: true,
            ipam: Some(Ipam {
                driver: String::new(),
                options: HashMap::new(),
                config: vec![IpamConfig {
                    subnet: "10.1.0.0/16".to_string(),
                    ip_range: "10.1.1.0/24".to_string(),
                    gateway: "10.1.0.1".to_string(),
                    aux_address: HashMap::new(),
                }],
            }),
            labels: HashMap::from([("env".to_string(), "prod".to_string())]),
            ..Default::default()
        };

        let spec = basic_network_create_to_grpc(&create);
        assert_eq!(spec.annotations.name, "frontend");
        assert_eq!(spec.annotations.labels["env"], "prod");
        assert_eq!(spec.driver_config.unwrap().name, "overlay");
        assert!(spec.attachable);

        let ipam = spec.ipam.unwrap();
        assert_eq!(ipam.driver.unwrap().name, DEFAULT_IPAM_DRIVER);
        assert_eq!(ipam.configs[0].range, "10.1.1.0/24");
        assert!(ipam.configs[0].reserved.is_empty());
    }

    #[test]
    fn test_network_spec_round_trip_through_wire() {
        let original = overlay_network();
        let n = network_from_grpc(&original).unwrap();

        let spec = network_spec_to_grpc(&n.spec);
        assert_eq!(spec.annotations, original.spec.annotations);
        assert_eq!(spec.driver_config, original.spec.driver_config);
        assert_eq!(spec.attachable, original.spec.attachable);

        let ipam = spec.ipam.unwrap();
        assert_eq!(ipam.driver.unwrap().name, DEFAULT_IPAM_DRIVER);
        assert_eq!(ipam.configs[0].subnet, "10.0.9.0/24");
    }

    #[test]
    fn test_empty_ipam_not_submitted() {
        let spec = network_spec_to_grpc(&NetworkSpec::default());
        assert!(spec.ipam.is_none());
        assert!(spec.driver_config.is_none());
    }

    #[test]
    fn test_network_attachment_without_network() {
        let attachment = wire::NetworkAttachment {
            network: None,
            addresses: vec!["10.0.0.3/24".to_string()],
            aliases: Vec::new(),
        };

        let a = network_attachment_from_grpc(&attachment).unwrap();
        assert_eq!(a.network, Network::default());
        assert_eq!(a.addresses, ["10.0.0.3/24"]);
    }
}
