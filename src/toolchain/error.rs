//! Discovery error types.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error ending a discovery pass. None of these are retried.
#[derive(Debug, Error, Diagnostic)]
pub enum DiscoveryError {
    #[error("no supported Visual Studio can be found; supported versions are: {supported}")]
    #[diagnostic(
        code(vslocate::no_supported_version),
        help("install a supported Visual Studio, or set vs<year>_install to an existing installation")
    )]
    NoSupportedVersionFound { supported: String },

    #[error("Visual Studio {label} not found under {}", .root.display())]
    #[diagnostic(
        code(vslocate::install_dir_not_found),
        help("expected an Enterprise, Professional, Community, Preview or BuildTools directory")
    )]
    InstallDirNotFound { label: String, root: PathBuf },

    #[error("failed to list compiler tools in {}", .path.display())]
    #[diagnostic(
        code(vslocate::tools_listing_failed),
        help("make sure the \"MSVC build tools\" component is installed")
    )]
    ToolsListingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
