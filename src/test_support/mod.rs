//! Test utilities for vslocate unit tests.
//!
//! Provides an in-memory [`Host`] so discovery can be exercised against
//! arbitrary machine layouts without touching real environment variables or
//! the real filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use vslocate::test_support::{FakeHost, InstallFixture};
//!
//! #[test]
//! fn test_example() {
//!     let mut host = FakeHost::windows();
//!     InstallFixture::vs2022_enterprise().apply(&mut host);
//!
//!     let version = select_version(&host).unwrap();
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::host::Host;

// Re-export fixtures for convenience
pub use fixtures::*;

/// In-memory machine for testing.
///
/// Directories are listed in the order they were added, which lets tests
/// control the enumeration order discovery sees.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    env: HashMap<String, OsString>,
    dirs: Vec<PathBuf>,
    unreadable: Vec<PathBuf>,
}

impl FakeHost {
    /// Create an empty machine with no environment.
    pub fn new() -> Self {
        FakeHost::default()
    }

    /// Create a machine with both program directories set.
    pub fn windows() -> Self {
        let mut host = FakeHost::new();
        host.set_env("ProgramFiles", PF);
        host.set_env("ProgramFiles(x86)", PF_X86);
        host
    }

    /// Set an environment variable.
    pub fn set_env(&mut self, name: &str, value: impl Into<OsString>) {
        self.env.insert(name.to_string(), value.into());
    }

    /// Add a directory and all of its parents.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        if self.dirs.contains(&path) {
            return;
        }

        let mut ancestors: Vec<PathBuf> = path
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();
        ancestors.reverse();
        for parent in ancestors {
            if !self.dirs.contains(&parent) {
                self.dirs.push(parent);
            }
        }
        self.dirs.push(path);
    }

    /// Remove a directory and everything below it.
    pub fn remove_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.dirs.retain(|d| !d.starts_with(path));
    }

    /// Make listing `path` fail with a permission error.
    pub fn deny_listing(&mut self, path: impl AsRef<Path>) {
        self.unreadable.push(path.as_ref().to_path_buf());
    }
}

impl Host for FakeHost {
    fn env_var(&self, name: &str) -> Option<OsString> {
        self.env.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| d == path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        if self.unreadable.iter().any(|d| d == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("access denied: {}", path.display()),
            ));
        }
        if !self.exists(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {}", path.display()),
            ));
        }

        Ok(self
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_host_adds_parents() {
        let mut host = FakeHost::new();
        host.add_dir("C:/a/b/c");

        assert!(host.exists(Path::new("C:/a")));
        assert!(host.exists(Path::new("C:/a/b")));
        assert_eq!(host.list_dir(Path::new("C:/a/b")).unwrap(), vec!["c"]);
    }

    #[test]
    fn test_fake_host_lists_in_insertion_order() {
        let mut host = FakeHost::new();
        host.add_dir("C:/x/2");
        host.add_dir("C:/x/1");

        assert_eq!(host.list_dir(Path::new("C:/x")).unwrap(), vec!["2", "1"]);
    }

    #[test]
    fn test_fake_host_missing_dir() {
        let host = FakeHost::new();
        let err = host.list_dir(Path::new("C:/missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_fixture_apply() {
        let mut host = FakeHost::windows();
        let fixture = InstallFixture::vs2019_community();
        fixture.apply(&mut host);

        assert!(host.exists(&fixture.install_dir()));
        let tools = host
            .list_dir(&fixture.install_dir().join("VC/Tools/MSVC"))
            .unwrap();
        assert_eq!(tools, vec!["14.28.29910", "14.29.30133"]);
    }
}
