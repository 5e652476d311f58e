//! Version selection.

use std::path::PathBuf;

use crate::util::host::Host;

use super::{candidates, describe_versions, DiscoveryError, ToolchainVersion, SUPPORTED_VERSIONS};

/// Return the best supported version installed on `host`.
pub fn select_version(host: &dyn Host) -> Result<&'static ToolchainVersion, DiscoveryError> {
    select_version_from(host, SUPPORTED_VERSIONS)
}

/// Return the first entry of `versions` that is installed on `host`.
///
/// A version counts as installed if its `vs<year>_install` variable names an
/// existing path, or if any edition directory exists in its default location.
/// Later entries are never checked once one matches.
pub fn select_version_from<'a>(
    host: &dyn Host,
    versions: &'a [ToolchainVersion],
) -> Result<&'a ToolchainVersion, DiscoveryError> {
    for version in versions {
        if has_override(host, version) || has_default_install(host, version) {
            tracing::debug!("Selected Visual Studio {}", version);
            return Ok(version);
        }
    }

    Err(DiscoveryError::NoSupportedVersionFound {
        supported: describe_versions(versions),
    })
}

fn has_override(host: &dyn Host, version: &ToolchainVersion) -> bool {
    let var = version.override_var();
    let Some(value) = host.env_var(&var) else {
        return false;
    };

    let path = PathBuf::from(value);
    if host.exists(&path) {
        tracing::debug!("{} points at {}", var, path.display());
        true
    } else {
        tracing::debug!("Ignoring {}: {} does not exist", var, path.display());
        false
    }
}

fn has_default_install(host: &dyn Host, version: &ToolchainVersion) -> bool {
    candidates(host, version)
        .iter()
        .any(|candidate| host.exists(&candidate.path))
}
