//! Rendering a toolchain descriptor for the build.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::toolchain::ToolchainDescriptor;
use crate::util::gn::to_gn_string;

/// Output format for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// GN variable assignments (default)
    #[default]
    Gn,
    /// Machine-readable JSON object
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gn" => Ok(OutputFormat::Gn),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OutputFormatParseError(s.to_string())),
        }
    }
}

/// Error parsing output format option.
#[derive(Debug, Clone)]
pub struct OutputFormatParseError(pub String);

impl std::fmt::Display for OutputFormatParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid output format '{}', valid values: gn, json", self.0)
    }
}

impl std::error::Error for OutputFormatParseError {}

/// JSON shape of a descriptor.
#[derive(Debug, Serialize)]
struct DescriptorJson<'a> {
    vs_path: String,
    vc_version: &'a str,
    sdk_path: String,
    sdk_version: &'a str,
    vs_version: String,
    vs_display_version: &'a str,
    vc_toolset: &'a str,
}

/// Render `desc` in the requested format.
pub fn format_descriptor(desc: &ToolchainDescriptor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Gn => Ok(format_gn(desc)),
        OutputFormat::Json => format_json(desc),
    }
}

/// One GN assignment per field, in a fixed order.
pub fn format_gn(desc: &ToolchainDescriptor) -> String {
    let fields = [
        ("vs_path", desc.install_dir.display().to_string()),
        ("vc_version", desc.tools_version.clone()),
        ("sdk_path", desc.sdk_dir.display().to_string()),
        ("sdk_version", desc.sdk_version.clone()),
        ("vs_version", desc.version.label()),
    ];

    let mut output = String::new();
    for (name, value) in fields {
        // Writing to a String cannot fail.
        let _ = writeln!(output, "{} = {}", name, to_gn_string(&value));
    }
    output
}

/// Pretty-printed JSON object.
pub fn format_json(desc: &ToolchainDescriptor) -> Result<String> {
    let json = DescriptorJson {
        vs_path: desc.install_dir.display().to_string(),
        vc_version: &desc.tools_version,
        sdk_path: desc.sdk_dir.display().to_string(),
        sdk_version: &desc.sdk_version,
        vs_version: desc.version.label(),
        vs_display_version: desc.version.display,
        vc_toolset: desc.version.toolset,
    };

    let mut output =
        serde_json::to_string_pretty(&json).context("failed to serialize toolchain descriptor")?;
    output.push('\n');
    Ok(output)
}
