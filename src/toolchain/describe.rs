//! Describing a located installation.

use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::config::{Config, ToolsSelection};
use crate::util::host::Host;

use super::{DiscoveryError, ProgramFiles, ToolchainVersion};

/// Windows SDK version reported unless configured otherwise.
pub const SDK_VERSION: &str = "10.0.18362.0";

/// Compiler-tools container, relative to the install directory.
const TOOLS_SUBDIR: [&str; 3] = ["VC", "Tools", "MSVC"];

/// Windows SDK root, relative to `%ProgramFiles(x86)%`.
const SDK_SUBDIR: [&str; 2] = ["Windows Kits", "10"];

/// Everything the build needs to know about the toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainDescriptor {
    /// Visual Studio install directory, without trailing separators.
    pub install_dir: PathBuf,
    /// MSVC tools subversion, e.g. `14.30.30705`.
    pub tools_version: String,
    /// Windows SDK root.
    pub sdk_dir: PathBuf,
    /// Windows SDK version.
    pub sdk_version: String,
    /// Selected Visual Studio version.
    pub version: &'static ToolchainVersion,
}

/// Directory listing the installed MSVC tools subversions.
pub fn tools_dir(install_dir: &Path) -> PathBuf {
    TOOLS_SUBDIR
        .iter()
        .fold(install_dir.to_path_buf(), |dir, part| dir.join(part))
}

/// Windows SDK root on `host`. Does not depend on the selected version.
pub fn sdk_dir(host: &dyn Host) -> PathBuf {
    SDK_SUBDIR
        .iter()
        .fold(ProgramFiles::X86.base_dir(host), |dir, part| dir.join(part))
}

/// Describe the installation at `install_dir`.
pub fn describe(
    host: &dyn Host,
    install_dir: &Path,
    version: &'static ToolchainVersion,
    config: &Config,
) -> Result<ToolchainDescriptor, DiscoveryError> {
    let container = tools_dir(install_dir);
    let entries = host
        .list_dir(&container)
        .map_err(|source| DiscoveryError::ToolsListingFailed {
            path: container.clone(),
            source,
        })?;

    let Some(tools_version) = pick_tools_version(&entries, config.tools_selection()) else {
        return Err(DiscoveryError::ToolsListingFailed {
            path: container,
            source: io::Error::new(io::ErrorKind::NotFound, "no compiler tools installed"),
        });
    };
    let tools_version = tools_version.trim_end_matches(['\\', '/']).to_string();
    tracing::debug!("Using MSVC tools {} from {}", tools_version, container.display());

    // Empty overrides count as unset; every descriptor field must be populated.
    let sdk_dir = config
        .sdk
        .path
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| sdk_dir(host));
    let sdk_version = config
        .sdk
        .version
        .clone()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| SDK_VERSION.to_string());

    Ok(ToolchainDescriptor {
        install_dir: install_dir.to_path_buf(),
        tools_version,
        sdk_dir,
        sdk_version,
        version,
    })
}

/// Pick the most recent tools subversion out of a directory listing.
///
/// `ListingOrder` trusts the enumeration order and takes the last entry.
/// `HighestVersion` compares entries as versions; entries that do not parse
/// rank below every entry that does.
pub fn pick_tools_version(entries: &[String], policy: ToolsSelection) -> Option<&str> {
    let picked = match policy {
        ToolsSelection::ListingOrder => entries.last(),
        ToolsSelection::HighestVersion => entries.iter().max_by(|a, b| compare_versions(a, b)),
    };
    picked.map(String::as_str)
}

fn compare_versions(a: &str, b: &str) -> Ordering {
    parse_dotted(a)
        .cmp(&parse_dotted(b))
        .then_with(|| a.cmp(b))
}

/// Parse `14.30.30705.1` into its numeric parts, any number of them.
fn parse_dotted(name: &str) -> Option<Vec<u64>> {
    name.split('.').map(|part| part.parse().ok()).collect()
}
