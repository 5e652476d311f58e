//! Installation directory resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::host::Host;

use super::{DiscoveryError, ToolchainVersion};

/// Vendor directory under the program directory.
pub const VENDOR_DIR: &str = "Microsoft Visual Studio";

/// Program-directory convention a version installs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramFiles {
    /// `%ProgramFiles%`
    Native,
    /// `%ProgramFiles(x86)%`
    X86,
}

impl ProgramFiles {
    /// Convention used by a given version.
    pub fn for_version(version: &ToolchainVersion) -> Self {
        if version.is_at_least_packaged() {
            ProgramFiles::Native
        } else {
            ProgramFiles::X86
        }
    }

    /// Environment variable holding the directory.
    pub fn env_var(self) -> &'static str {
        match self {
            ProgramFiles::Native => "ProgramFiles",
            ProgramFiles::X86 => "ProgramFiles(x86)",
        }
    }

    /// Directory used when the variable is not set.
    pub fn fallback(self) -> &'static str {
        match self {
            ProgramFiles::Native => "C:\\Program Files",
            ProgramFiles::X86 => "C:\\Program Files (x86)",
        }
    }

    /// Resolve the directory on `host`.
    pub fn base_dir(self, host: &dyn Host) -> PathBuf {
        host.env_var(self.env_var())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(self.fallback()))
    }
}

/// Visual Studio edition, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    Enterprise,
    Professional,
    Community,
    Preview,
    BuildTools,
}

impl Edition {
    /// All editions, most preferred first.
    pub const ALL: [Edition; 5] = [
        Edition::Enterprise,
        Edition::Professional,
        Edition::Community,
        Edition::Preview,
        Edition::BuildTools,
    ];

    /// Directory name of the edition.
    pub fn as_str(self) -> &'static str {
        match self {
            Edition::Enterprise => "Enterprise",
            Edition::Professional => "Professional",
            Edition::Community => "Community",
            Edition::Preview => "Preview",
            Edition::BuildTools => "BuildTools",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory an edition would be installed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationCandidate {
    pub path: PathBuf,
    pub edition: Edition,
}

/// Directory holding every edition of `version`, e.g.
/// `C:\Program Files\Microsoft Visual Studio\2022`.
pub fn version_root(host: &dyn Host, version: &ToolchainVersion) -> PathBuf {
    ProgramFiles::for_version(version)
        .base_dir(host)
        .join(VENDOR_DIR)
        .join(version.label())
}

/// Edition directories for `version`, most preferred first.
pub fn candidates(host: &dyn Host, version: &ToolchainVersion) -> Vec<InstallationCandidate> {
    let root = version_root(host, version);
    Edition::ALL
        .iter()
        .map(|&edition| InstallationCandidate {
            path: root.join(edition.as_str()),
            edition,
        })
        .collect()
}

/// Find the install directory of `version`.
///
/// Returns the first existing edition in [`Edition::ALL`] order.
pub fn resolve_install_dir(
    host: &dyn Host,
    version: &ToolchainVersion,
) -> Result<PathBuf, DiscoveryError> {
    for candidate in candidates(host, version) {
        if host.exists(&candidate.path) {
            tracing::debug!(
                "Using Visual Studio {} {} at {}",
                version.year,
                candidate.edition,
                candidate.path.display()
            );
            return Ok(normalize_path(&candidate.path));
        }
        tracing::debug!("No {} edition at {}", candidate.edition, candidate.path.display());
    }

    Err(DiscoveryError::InstallDirNotFound {
        label: version.label(),
        root: version_root(host, version),
    })
}

/// Strip trailing path separators.
///
/// A path made only of separators is returned unchanged.
pub fn normalize_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => {
            let trimmed = s.trim_end_matches(['\\', '/']);
            if trimmed.is_empty() {
                path.to_path_buf()
            } else {
                PathBuf::from(trimmed)
            }
        }
        None => path.to_path_buf(),
    }
}
