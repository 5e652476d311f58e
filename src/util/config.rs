//! Configuration file support for vslocate.
//!
//! Two implicit locations are merged, project over global:
//! - Global: `~/.vslocate/config.toml`
//! - Project: `.vslocate/config.toml` in the current directory
//!
//! A file passed with `--config` is applied last and must load cleanly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// vslocate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Windows SDK settings
    pub sdk: SdkConfig,

    /// Toolchain discovery settings
    pub toolchain: ToolchainConfig,
}

/// Windows SDK overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// SDK version string to report instead of the built-in one
    pub version: Option<String>,

    /// SDK root to report instead of `<ProgramFiles(x86)>/Windows Kits/10`
    pub path: Option<PathBuf>,
}

/// Toolchain discovery behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// How the compiler-tools subversion is picked
    pub tools_selection: Option<ToolsSelection>,
}

/// Policy for picking one compiler-tools subversion out of the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolsSelection {
    /// Last entry of the name-ordered directory listing.
    #[default]
    ListingOrder,
    /// Greatest entry when compared as a dotted version number.
    HighestVersion,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration, falling back to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.sdk.version.is_some() {
            self.sdk.version = other.sdk.version;
        }
        if other.sdk.path.is_some() {
            self.sdk.path = other.sdk.path;
        }
        if other.toolchain.tools_selection.is_some() {
            self.toolchain.tools_selection = other.toolchain.tools_selection;
        }
    }

    /// Effective compiler-tools selection policy.
    pub fn tools_selection(&self) -> ToolsSelection {
        self.toolchain.tools_selection.unwrap_or_default()
    }
}

/// Load merged configuration.
///
/// Order of precedence (highest to lowest):
/// 1. Explicit file (`--config`), which must exist and parse
/// 2. Project config (`.vslocate/config.toml`)
/// 3. Global config (`~/.vslocate/config.toml`)
/// 4. Defaults
pub fn load_config(
    global_path: Option<&Path>,
    project_path: &Path,
    explicit: Option<&Path>,
) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge(Config::load_or_default(global));
    }

    config.merge(Config::load_or_default(project_path));

    if let Some(explicit) = explicit {
        config.merge(Config::load(explicit)?);
    }

    Ok(config)
}

/// Load configuration for the current directory and user.
pub fn load_effective_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let global = global_config_path();
    load_config(global.as_deref(), &project_config_path(&cwd), explicit)
}

/// Get the global vslocate config directory (~/.vslocate).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".vslocate"))
}

/// Get the global config path (~/.vslocate/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.vslocate/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".vslocate").join("config.toml")
}
