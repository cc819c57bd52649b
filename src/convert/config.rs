//! Config conversion

use super::meta::{
    annotations_from_grpc, annotations_to_grpc, driver_from_grpc, driver_to_grpc, meta_from_grpc,
};
use crate::error::{ConvertError, Result};
use crate::types::secret::{Config, ConfigSpec};
use crate::wire;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Convert a wire config, base64-encoding its payload
pub fn config_from_grpc(config: &wire::Config) -> Result<Config> {
    Ok(Config {
        id: config.id.clone(),
        meta: meta_from_grpc(&config.meta)?,
        spec: ConfigSpec {
            annotations: annotations_from_grpc(&config.spec.annotations),
            data: STANDARD.encode(&config.spec.data),
            templating: config.spec.templating.as_ref().map(driver_from_grpc),
        },
    })
}

/// Convert a config spec to its wire form
pub fn config_spec_to_grpc(spec: &ConfigSpec) -> Result<wire::ConfigSpec> {
    let data = STANDARD
        .decode(spec.data.as_bytes())
        .map_err(|e| ConvertError::Format(format!("Invalid base64 config data: {}", e)))?;

    Ok(wire::ConfigSpec {
        annotations: annotations_to_grpc(&spec.annotations),
        data,
        templating: spec.templating.as_ref().map(driver_to_grpc),
    })
}
