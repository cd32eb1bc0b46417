//! Road network loading shared by all commands

use tracing::{debug, warn};

use crate::cli::Cli;
use wayfinder_core::config::Config;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{BlockedRoad, Graph};
use wayfinder_core::roadmap::RoadMap;

/// A loaded road map with its closures applied
pub struct Network {
    pub map: RoadMap,
    /// Graph after blocked roads are removed
    pub graph: Graph,
    pub blocked: Vec<BlockedRoad>,
    pub config: Config,
}

impl Network {
    /// Resolve config and map, then close every blocked road.
    ///
    /// `--map` wins over the config's `map`; with neither, the built-in
    /// sample network is used. Closures from config and `--block` combine.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = Config::discover(cli.config.as_deref())?;

        let map = match cli.map.as_ref().or(config.map.as_ref()) {
            Some(path) => RoadMap::load(path)?,
            None => {
                debug!("no road map given, using sample network");
                RoadMap::sample()
            }
        };

        let blocked: Vec<BlockedRoad> = config
            .roads
            .blocked
            .iter()
            .chain(cli.blocked.iter())
            .cloned()
            .collect();

        for BlockedRoad(a, b) in &blocked {
            for city in [a, b] {
                if !map.cities.contains(city) {
                    warn!(city = %city, "blocked road names an unknown city");
                }
            }
        }

        let graph = map.graph_without(&blocked);

        Ok(Self {
            map,
            graph,
            blocked,
            config,
        })
    }

    pub fn cities(&self) -> &[String] {
        &self.map.cities
    }
}
