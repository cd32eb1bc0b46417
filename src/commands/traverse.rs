//! `wayfinder traverse` - routes visiting every city

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::network::Network;
use wayfinder_core::error::Result;
use wayfinder_core::graph::{find_coverage_path, greedy_coverage_sweep, Coverage, CoverageMode};

#[derive(Serialize)]
struct TraverseOutput<'a> {
    start: &'a str,
    mode: CoverageMode,
    complete: bool,
    path: &'a [String],
    cost: f64,
}

/// Execute the traverse command
pub fn execute(
    cli: &Cli,
    network: &Network,
    start: &str,
    mode: Option<CoverageMode>,
) -> Result<()> {
    let mode = mode.unwrap_or(network.config.search.coverage);
    let coverage = match mode {
        CoverageMode::Backtracking => {
            find_coverage_path(network.cities(), &network.graph, start)?
        }
        CoverageMode::Greedy => greedy_coverage_sweep(network.cities(), &network.graph, start)?,
    };

    match cli.format {
        OutputFormat::Json => {
            let output = TraverseOutput {
                start,
                mode,
                complete: coverage.complete,
                path: &coverage.route.cities,
                cost: coverage.route.cost.value(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, &coverage, start, mode),
    }
    Ok(())
}

fn output_human(cli: &Cli, coverage: &Coverage, start: &str, mode: CoverageMode) {
    match (mode, coverage.complete) {
        (CoverageMode::Backtracking, false) => {
            println!("No complete traversal found from {}", start);
        }
        (_, complete) => {
            println!("{}", coverage.route);
            println!("Total cost: {}", coverage.route.cost);
            if mode == CoverageMode::Greedy && !cli.quiet {
                if complete {
                    println!("Visit order from a greedy sweep; consecutive cities may not share a road");
                } else {
                    println!("Greedy sweep did not reach every city");
                }
            }
        }
    }
}
