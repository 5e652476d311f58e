//! Command implementations

pub mod completions;
pub mod describe;
pub mod install_dir;
pub mod select;
pub mod versions;
