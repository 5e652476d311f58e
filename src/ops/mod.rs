//! High-level operations.
//!
//! This module contains the output side of vslocate commands.

pub mod emit;

pub use emit::{format_descriptor, format_gn, format_json, OutputFormat};
