//! Access to the machine being inspected.
//!
//! Discovery only ever reads environment variables, checks whether paths
//! exist, and lists directories. Those three operations go through [`Host`]
//! so tests can run the whole pass against an in-memory machine.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Read-only view of the environment and filesystem.
pub trait Host {
    /// Look up an environment variable. Empty values count as unset.
    fn env_var(&self, name: &str) -> Option<OsString>;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the entries directly under `path`, in enumeration order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// The real machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn env_var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name).filter(|v| !v.is_empty())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // NTFS enumerates in name order; other filesystems do not, so pin it.
        names.sort();
        Ok(names)
    }
}
