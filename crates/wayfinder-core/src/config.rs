//! Configuration for wayfinder
//!
//! Stored in `config.toml`, looked up in `$WAYFINDER_CONFIG_DIR` or the
//! platform config directory (`~/.config/wayfinder` on Linux).

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::graph::{CoverageMode, Strategy};

pub use types::{Config, RoadsConfig, SearchConfig, DEFAULT_K};

const CONFIG_DIR: &str = "wayfinder";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "WAYFINDER_CONFIG_DIR";

impl Config {
    /// Default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load an explicit config file, or the default one if present.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file.
    ///
    /// A relative `map` path is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&content)?;
        check_search_tags(&table)?;
        let mut config: Config = toml::Value::Table(table).try_into()?;

        if let (Some(map), Some(dir)) = (config.map.as_mut(), path.parent()) {
            if map.is_relative() {
                *map = dir.join(&*map);
            }
        }

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }
}

/// Reject unknown `search.strategy` and `search.coverage` tags with their
/// own error variants before the typed deserialize.
fn check_search_tags(table: &toml::Table) -> Result<()> {
    let Some(search) = table.get("search").and_then(toml::Value::as_table) else {
        return Ok(());
    };
    if let Some(strategy) = search.get("strategy").and_then(toml::Value::as_str) {
        strategy.parse::<Strategy>()?;
    }
    if let Some(mode) = search.get("coverage").and_then(toml::Value::as_str) {
        mode.parse::<CoverageMode>()?;
    }
    Ok(())
}
