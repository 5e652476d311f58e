//! Visual Studio toolchain discovery.
//!
//! A discovery pass runs three stages in order:
//! 1. [`select_version`] picks the highest-priority supported version that is installed
//! 2. [`resolve_install_dir`] finds the preferred edition directory for it
//! 3. [`describe`] reads the compiler-tools subversion and assembles the result
//!
//! Every stage reads the machine through a [`Host`], never directly.

pub mod describe;
pub mod error;
pub mod resolve;
pub mod select;

use std::fmt;
use std::path::PathBuf;

use crate::util::config::Config;
use crate::util::host::Host;

pub use describe::{describe, pick_tools_version, ToolchainDescriptor, SDK_VERSION};
pub use error::DiscoveryError;
pub use resolve::{
    candidates, normalize_path, resolve_install_dir, Edition, InstallationCandidate,
    ProgramFiles,
};
pub use select::{select_version, select_version_from};

/// A supported Visual Studio release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainVersion {
    /// Product year; the identifier used in paths, variables and output.
    pub year: u16,
    /// Internal version number shown in diagnostics.
    pub display: &'static str,
    /// Preferred MSVC toolset tag.
    pub toolset: &'static str,
}

/// Supported versions, highest priority first.
///
/// The first entry is the packaged default.
pub const SUPPORTED_VERSIONS: &[ToolchainVersion] = &[
    ToolchainVersion {
        year: 2022,
        display: "17.0",
        toolset: "VC143",
    },
    ToolchainVersion {
        year: 2019,
        display: "16.0",
        toolset: "VC142",
    },
    ToolchainVersion {
        year: 2017,
        display: "15.0",
        toolset: "VC141",
    },
];

impl ToolchainVersion {
    /// The packaged default version.
    pub fn packaged() -> &'static ToolchainVersion {
        &SUPPORTED_VERSIONS[0]
    }

    /// Label used in paths and output, e.g. `2019`.
    pub fn label(&self) -> String {
        self.year.to_string()
    }

    /// Name of the environment variable that can point at this version's install.
    pub fn override_var(&self) -> String {
        format!("vs{}_install", self.year)
    }

    /// Whether this version installs under the native program directory.
    pub fn is_at_least_packaged(&self) -> bool {
        self.year >= Self::packaged().year
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display, self.year)
    }
}

/// Render a version list for diagnostics, e.g. `17.0 (2022), 16.0 (2019)`.
pub fn describe_versions(versions: &[ToolchainVersion]) -> String {
    versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run a full discovery pass.
pub fn discover(host: &dyn Host, config: &Config) -> Result<ToolchainDescriptor, DiscoveryError> {
    let version = select_version(host)?;
    let install_dir = resolve_install_dir(host, version)?;
    describe(host, &install_dir, version, config)
}

/// Select a version and resolve its install directory, without describing it.
pub fn locate(host: &dyn Host) -> Result<(&'static ToolchainVersion, PathBuf), DiscoveryError> {
    let version = select_version(host)?;
    let install_dir = resolve_install_dir(host, version)?;
    Ok((version, install_dir))
}
