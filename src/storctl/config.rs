//! # Configuration
//!
//! storctl keeps a small JSON file, `config.json`, in its config directory.
//!
//! ## Locations
//!
//! The config directory is, in priority order:
//! 1. `--config-dir`
//! 2. `STORCTL_CONFIG_DIR`
//! 3. the platform config directory (via the `directories` crate)
//!
//! The cluster data file is `--data`, else `STORCTL_DATA`, else `cluster.json`
//! inside the config directory.
//!
//! ## Available Settings
//!
//! | Key | Description |
//! |-----|-------------|
//! | `nodes-format` | Default `--format` for `storctl node ls` |
//! | `volumes-format` | Default `--format` for `storctl volume ls` |
//! | `policies-format` | Default `--format` for `storctl policy ls` |
//! | `users-format` | Default `--format` for `storctl user ls` |
//! | `namespaces-format` | Default `--format` for `storctl namespace ls` |
//!
//! A configured format is ignored when `-q` is given, so quiet listings always
//! print identifiers.

use crate::error::{Result, StorctlError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stencil::TABLE_FORMAT_KEY;

const CONFIG_FILENAME: &str = "config.json";
pub const DATA_FILENAME: &str = "cluster.json";

pub const CONFIG_DIR_ENV: &str = "STORCTL_CONFIG_DIR";
pub const DATA_ENV: &str = "STORCTL_DATA";

/// Config keys as typed on the command line, in display order.
pub const KEYS: [&str; 5] = [
    "nodes-format",
    "volumes-format",
    "policies-format",
    "users-format",
    "namespaces-format",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorctlConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces_format: Option<String>,
}

impl StorctlConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    fn slot(&self, key: &str) -> Option<&Option<String>> {
        match key {
            "nodes-format" => Some(&self.nodes_format),
            "volumes-format" => Some(&self.volumes_format),
            "policies-format" => Some(&self.policies_format),
            "users-format" => Some(&self.users_format),
            "namespaces-format" => Some(&self.namespaces_format),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "nodes-format" => Some(&mut self.nodes_format),
            "volumes-format" => Some(&mut self.volumes_format),
            "policies-format" => Some(&mut self.policies_format),
            "users-format" => Some(&mut self.users_format),
            "namespaces-format" => Some(&mut self.namespaces_format),
            _ => None,
        }
    }

    /// The value of `key`, `Ok(None)` when unset.
    pub fn get(&self, key: &str) -> Result<Option<&str>> {
        self.slot(key)
            .map(|value| value.as_deref())
            .ok_or_else(|| unknown_key(key))
    }

    /// Sets `key`; an empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = self.slot_mut(key).ok_or_else(|| unknown_key(key))?;
        *slot = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        Ok(())
    }

    /// The configured list format for a resource kind (`node`, `volume`, ...).
    pub fn format_for(&self, kind: &str) -> Option<&str> {
        let value = match kind {
            "node" => &self.nodes_format,
            "volume" => &self.volumes_format,
            "policy" => &self.policies_format,
            "user" => &self.users_format,
            "namespace" => &self.namespaces_format,
            _ => return None,
        };
        value.as_deref()
    }
}

fn unknown_key(key: &str) -> StorctlError {
    StorctlError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

/// Picks the selector for `ls`: the flag, else the configured default unless
/// quiet, else `table`.
pub fn list_format(flag: Option<&str>, configured: Option<&str>, quiet: bool) -> String {
    match (flag.filter(|f| !f.is_empty()), configured) {
        (Some(flag), _) => flag.to_string(),
        (None, Some(configured)) if !quiet && !configured.is_empty() => configured.to_string(),
        _ => TABLE_FORMAT_KEY.to_string(),
    }
}

pub fn resolve_config_dir(flag: Option<PathBuf>, env: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag.or(env) {
        return Ok(dir);
    }
    ProjectDirs::from("io", "storctl", "storctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StorctlError::Config("Could not determine config directory".to_string()))
}

pub fn resolve_data_path(flag: Option<PathBuf>, env: Option<PathBuf>, config_dir: &Path) -> PathBuf {
    flag.or(env)
        .unwrap_or_else(|| config_dir.join(DATA_FILENAME))
}
