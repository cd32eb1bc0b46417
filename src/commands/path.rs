//! `wayfinder path` - uninformed route search

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::network::Network;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{find_path, Route, Strategy};

#[derive(Serialize)]
struct PathOutput<'a> {
    from: &'a str,
    to: &'a str,
    strategy: Strategy,
    found: bool,
    path: &'a [String],
    cost: f64,
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    network: &Network,
    from: &str,
    to: &str,
    strategy: Option<Strategy>,
) -> Result<()> {
    let strategy = strategy.unwrap_or(network.config.search.strategy);
    let route = find_path(network.cities(), &network.graph, from, to, strategy)?;

    match cli.format {
        OutputFormat::Json => output_json(&route, from, to, strategy),
        OutputFormat::Human => {
            output_human(cli, &route, from, to);
            Ok(())
        }
    }
}

fn output_json(route: &Route, from: &str, to: &str, strategy: Strategy) -> Result<()> {
    let output = PathOutput {
        from,
        to,
        strategy,
        found: route.is_found(),
        path: &route.cities,
        cost: route.cost.value(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, route: &Route, from: &str, to: &str) {
    if !route.is_found() {
        println!("No path found from {} to {}", from, to);
        return;
    }

    println!("{}", route);
    if !cli.quiet {
        let plural = if route.hops() == 1 { "" } else { "s" };
        println!("Cost: {} ({} hop{})", route.cost, route.hops(), plural);
    }
}
