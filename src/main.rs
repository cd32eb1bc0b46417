//! Wayfinder - route search CLI for small weighted road networks
//!
//! Finds breadth-first and depth-first routes, the k cheapest simple routes,
//! and routes that visit every city, optionally with roads closed.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use wayfinder_core::error::{ExitCode as WayfinderExitCode, WayfinderError};
use wayfinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let args: Vec<String> = env::args().skip(1).collect();
            return report_parse_error(err, wants_json(&args));
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WayfinderExitCode::Success as u8),
        Err(e) => report(&e, cli.format == OutputFormat::Json, cli.quiet),
    }
}

/// Report a failed argument parse.
///
/// A value rejected by one of our parsers (strategy, coverage mode, blocked
/// road) is reported as that error, with its own type and exit code. Other
/// clap failures keep clap's rendering unless JSON output was requested.
fn report_parse_error(err: clap::Error, json: bool) -> ExitCode {
    if let Some(error) = rejected_value(&err) {
        return report(&error, json, false);
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ if !json => err.exit(),
        ErrorKind::ArgumentConflict => WayfinderError::DuplicateFormat,
        _ => WayfinderError::UsageError(err.to_string()),
    };
    report(&error, true, false)
}

/// Recover the core error behind a clap value-validation failure
fn rejected_value(err: &clap::Error) -> Option<WayfinderError> {
    if err.kind() != ErrorKind::ValueValidation {
        return None;
    }

    let source = std::error::Error::source(err)?.downcast_ref::<WayfinderError>()?;
    match source {
        WayfinderError::InvalidStrategy { value } => Some(WayfinderError::InvalidStrategy {
            value: value.clone(),
        }),
        WayfinderError::UnknownFormat(value) => Some(WayfinderError::UnknownFormat(value.clone())),
        WayfinderError::InvalidValue { context, value } => {
            Some(WayfinderError::invalid_value(context, value))
        }
        WayfinderError::Unsupported {
            context,
            value,
            supported,
        } => Some(WayfinderError::unsupported(context, value, supported)),
        _ => None,
    }
}

fn report(error: &WayfinderError, json: bool, quiet: bool) -> ExitCode {
    if json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

/// True when the raw arguments ask for `--format json`
fn wants_json(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wants_json() {
        assert!(wants_json(&args(&["path", "A", "B", "--format", "json"])));
        assert!(wants_json(&args(&["--format=json", "cities"])));
        assert!(!wants_json(&args(&["--format", "human", "json"])));
        assert!(!wants_json(&args(&["cities"])));
    }

    #[test]
    fn test_rejected_strategy_keeps_variant() {
        let err = Cli::try_parse_from(["wayfinder", "path", "A", "B", "--strategy", "astar"])
            .unwrap_err();
        assert!(matches!(
            rejected_value(&err),
            Some(WayfinderError::InvalidStrategy { ref value }) if value == "astar"
        ));
    }

    #[test]
    fn test_rejected_blocked_road_keeps_variant() {
        let err = Cli::try_parse_from(["wayfinder", "--block", "Gondar", "cities"]).unwrap_err();
        assert!(matches!(
            rejected_value(&err),
            Some(WayfinderError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unknown_subcommand_is_not_a_rejected_value() {
        let err = Cli::try_parse_from(["wayfinder", "teleport"]).unwrap_err();
        assert!(rejected_value(&err).is_none());
    }
}
