//! `wayfinder roads` - show adjacency after closures

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::network::Network;
use wayfinder_core::error::Result;
use wayfinder_core::graph::Road;

#[derive(Serialize)]
struct CityRoads<'a> {
    city: &'a str,
    roads: &'a [Road],
}

/// Execute the roads command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let entries: Vec<CityRoads<'_>> = network
        .cities()
        .iter()
        .map(|city| CityRoads {
            city,
            roads: network.graph.roads(city).unwrap_or_default(),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "blocked": network.blocked,
                "cities": entries,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for entry in &entries {
                if entry.roads.is_empty() {
                    println!("{}: (no roads)", entry.city);
                    continue;
                }
                let roads: Vec<String> = entry
                    .roads
                    .iter()
                    .map(|road| format!("{} ({})", road.to, road.distance))
                    .collect();
                println!("{}: {}", entry.city, roads.join(", "));
            }
            if !network.blocked.is_empty() && !cli.quiet {
                let blocked: Vec<String> = network.blocked.iter().map(|b| b.to_string()).collect();
                println!();
                println!("Blocked: {}", blocked.join(", "));
            }
        }
    }
    Ok(())
}
