//! Secret conversion
//!
//! Secret payloads are write-only: the manager never returns them and
//! the converted object never carries them.

use super::meta::{
    annotations_from_grpc, annotations_to_grpc, driver_from_grpc, driver_to_grpc, meta_from_grpc,
};
use crate::error::{ConvertError, Result};
use crate::types::secret::{Secret, SecretSpec};
use crate::wire;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

/// Convert a wire secret
pub fn secret_from_grpc(secret: &wire::Secret) -> Result<Secret> {
    trace!(id = %secret.id, "converting secret");

    Ok(Secret {
        id: secret.id.clone(),
        meta: meta_from_grpc(&secret.meta)?,
        spec: SecretSpec {
            annotations: annotations_from_grpc(&secret.spec.annotations),
            data: String::new(),
            driver: secret.spec.driver.as_ref().map(driver_from_grpc),
            templating: secret.spec.templating.as_ref().map(driver_from_grpc),
        },
    })
}

/// Convert a secret spec to its wire form, decoding the payload
pub fn secret_spec_to_grpc(spec: &SecretSpec) -> Result<wire::SecretSpec> {
    let data = STANDARD
        .decode(spec.data.as_bytes())
        .map_err(|e| ConvertError::Format(format!("Invalid base64 secret data: {}", e)))?;

    Ok(wire::SecretSpec {
        annotations: annotations_to_grpc(&spec.annotations),
        data,
        driver: spec.driver.as_ref().map(driver_to_grpc),
        templating: spec.templating.as_ref().map(driver_to_grpc),
    })
}
