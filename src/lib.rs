//! vslocate - Locate the installed Visual Studio toolchain
//!
//! This crate provides the discovery pass used by the `vslocate` binary:
//! version selection, install directory resolution, and describing the
//! installed MSVC tools for a GN build.

pub mod ops;
pub mod toolchain;
pub mod util;

/// Test utilities for vslocate unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory machine for discovery tests.
#[cfg(test)]
pub mod test_support;

pub use toolchain::{discover, DiscoveryError, ToolchainDescriptor, ToolchainVersion};
pub use util::config::Config;
