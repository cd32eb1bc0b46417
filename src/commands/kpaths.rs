//! `wayfinder kpaths` - k cheapest simple routes

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::network::Network;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{k_shortest_paths, Route};

#[derive(Serialize)]
struct RankedRoute<'a> {
    rank: usize,
    path: &'a [String],
    cost: f64,
}

#[derive(Serialize)]
struct KpathsOutput<'a> {
    from: &'a str,
    to: &'a str,
    k: usize,
    paths: Vec<RankedRoute<'a>>,
}

/// Execute the kpaths command
pub fn execute(cli: &Cli, network: &Network, from: &str, to: &str, k: Option<usize>) -> Result<()> {
    let k = k.unwrap_or(network.config.search.k);
    let routes = k_shortest_paths(network.cities(), &network.graph, from, to, k)?;

    match cli.format {
        OutputFormat::Json => {
            let output = KpathsOutput {
                from,
                to,
                k,
                paths: routes
                    .iter()
                    .enumerate()
                    .map(|(i, route)| RankedRoute {
                        rank: i + 1,
                        path: &route.cities,
                        cost: route.cost.value(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, &routes, from, to, k),
    }
    Ok(())
}

fn output_human(cli: &Cli, routes: &[Route], from: &str, to: &str, k: usize) {
    if routes.is_empty() {
        println!("No paths found from {} to {}", from, to);
        return;
    }

    for (i, route) in routes.iter().enumerate() {
        println!("Path {}: {} (cost: {})", i + 1, route, route.cost);
    }

    if routes.len() < k && !cli.quiet {
        println!();
        println!("Only {} of {} requested paths exist", routes.len(), k);
    }
}
