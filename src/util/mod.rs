//! Shared utilities

pub mod config;
pub mod gn;
pub mod host;

pub use config::Config;
pub use host::{Host, SystemHost};
