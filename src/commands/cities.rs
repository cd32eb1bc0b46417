//! `wayfinder cities` - list the city universe

use crate::cli::{Cli, OutputFormat};
use crate::commands::network::Network;
use wayfinder_core::error::Result;

/// Execute the cities command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "cities": network.cities() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for city in network.cities() {
                println!("{}", city);
            }
        }
    }
    Ok(())
}
