//! Cluster mode platform support

use crate::error::{ConvertError, Result};
use tracing::debug;

/// OS and architecture pairs the cluster mode runs on
pub const SUPPORTED_PLATFORMS: &[(&str, &str)] = &[
    ("linux", "x86_64"),
    ("linux", "aarch64"),
    ("linux", "arm"),
    ("linux", "powerpc64"),
    ("linux", "s390x"),
    ("windows", "x86_64"),
];

/// Check an OS and architecture pair, as named by `std::env::consts`
pub fn is_supported(os: &str, arch: &str) -> bool {
    SUPPORTED_PLATFORMS
        .iter()
        .any(|(o, a)| *o == os && *a == arch)
}

/// Fail with [`ConvertError::NotSupportedPlatform`] for unsupported pairs
pub fn check_platform_for(os: &str, arch: &str) -> Result<()> {
    if is_supported(os, arch) {
        Ok(())
    } else {
        debug!(os, arch, "platform not supported for cluster mode");
        Err(ConvertError::NotSupportedPlatform)
    }
}

/// Check the platform this process runs on
pub fn check_platform() -> Result<()> {
    check_platform_for(std::env::consts::OS, std::env::consts::ARCH)
}
