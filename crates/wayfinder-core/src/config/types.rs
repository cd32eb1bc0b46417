use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::{BlockedRoad, CoverageMode, Strategy};

/// Default number of routes returned by k-shortest search
pub const DEFAULT_K: usize = 3;

/// Wayfinder configuration (`config.toml`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Road map used when `--map` is not given
    pub map: Option<PathBuf>,

    pub search: SearchConfig,

    pub roads: RoadsConfig,
}

/// Defaults for the search commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub k: usize,
    pub coverage: CoverageMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            k: DEFAULT_K,
            coverage: CoverageMode::default(),
        }
    }
}

/// Road closures applied before every search
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadsConfig {
    pub blocked: Vec<BlockedRoad>,
}
