//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use crate::commands::network::Network;
use wayfinder_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the road map and configuration, with closures applied
    pub fn load_network(&self) -> Result<Network> {
        let network = Network::load(self.cli)?;
        wayfinder_core::trace_time!(self.start, "load_network", cities = network.cities().len());
        Ok(network)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wayfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route search over small weighted road networks.");
        println!();
        println!("Run `wayfinder --help` for usage information.");
        Ok(())
    }
}
