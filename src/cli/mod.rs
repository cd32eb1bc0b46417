//! CLI argument parsing for wayfinder
//!
//! Global flags: --map, --config, --block, --format, --quiet, --verbose

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use output::parse_format;
use parse::{parse_blocked_road, parse_coverage_mode, parse_strategy};
use wayfinder_core::graph::{BlockedRoad, CoverageMode, Strategy};

/// Wayfinder - route search over small weighted road networks
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Road map file (TOML, JSON or YAML); defaults to the built-in sample
    #[arg(long, global = true, env = "WAYFINDER_MAP")]
    pub map: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Close the road between two cities, written CITY:CITY (repeatable)
    #[arg(
        long = "block",
        global = true,
        value_parser = parse_blocked_road,
        action = clap::ArgAction::Append
    )]
    pub blocked: Vec<BlockedRoad>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the cities in the road map
    Cities,

    /// Show each city's roads after closures are applied
    Roads,

    /// Find a route between two cities with breadth- or depth-first search
    Path {
        /// Starting city
        from: String,

        /// Destination city
        to: String,

        /// Search strategy: bfs or dfs
        #[arg(long, short, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// List the k cheapest simple routes between two cities
    Kpaths {
        /// Starting city
        from: String,

        /// Destination city
        to: String,

        /// Maximum number of routes
        #[arg(short, long)]
        k: Option<usize>,
    },

    /// Find a route from a city that visits every city
    Traverse {
        /// Starting city
        start: String,

        /// Search mode: backtracking or greedy
        #[arg(long, short, value_parser = parse_coverage_mode)]
        mode: Option<CoverageMode>,
    },
}
