//! Command implementations for all wayfinder commands

use tracing::debug;

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use wayfinder_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let network = ctx.load_network()?;

        let result = match self {
            Commands::Cities => commands::cities::execute(ctx.cli, &network),
            Commands::Roads => commands::roads::execute(ctx.cli, &network),
            Commands::Path { from, to, strategy } => {
                commands::path::execute(ctx.cli, &network, from, to, *strategy)
            }
            Commands::Kpaths { from, to, k } => {
                commands::kpaths::execute(ctx.cli, &network, from, to, *k)
            }
            Commands::Traverse { start, mode } => {
                commands::traverse::execute(ctx.cli, &network, start, *mode)
            }
        };

        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
