//! Error types and exit codes for wayfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unrecognized strategy)
//! - 3: Data error (unknown city, incomplete graph, invalid map file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the wayfinder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown city, invalid map (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfinder operations
#[derive(Error, Debug)]
pub enum WayfinderError {
    // Usage errors (exit code 2)
    #[error("unknown strategy: {value} (expected: bfs or dfs)")]
    InvalidStrategy { value: String },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unknown city: {name}")]
    UnknownCity { name: String },

    #[error("cities missing from the road map: {}", .missing.join(", "))]
    IncompleteGraph { missing: Vec<String> },

    #[error("road map not found: {path:?}")]
    MapNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfinderError {
    /// Create an error for a city outside the declared universe
    pub fn unknown_city(name: impl Into<String>) -> Self {
        WayfinderError::UnknownCity { name: name.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        WayfinderError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfinderError::InvalidStrategy { .. }
            | WayfinderError::UnknownFormat(_)
            | WayfinderError::DuplicateFormat
            | WayfinderError::UsageError(_)
            | WayfinderError::Unsupported { .. } => ExitCode::Usage,

            WayfinderError::UnknownCity { .. }
            | WayfinderError::IncompleteGraph { .. }
            | WayfinderError::MapNotFound { .. }
            | WayfinderError::InvalidValue { .. } => ExitCode::Data,

            WayfinderError::Io(_)
            | WayfinderError::Yaml(_)
            | WayfinderError::Json(_)
            | WayfinderError::Toml(_)
            | WayfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfinderError::InvalidStrategy { .. } => "invalid_strategy",
            WayfinderError::UnknownFormat(_) => "unknown_format",
            WayfinderError::DuplicateFormat => "duplicate_format",
            WayfinderError::UsageError(_) => "usage_error",
            WayfinderError::InvalidValue { .. } => "invalid_value",
            WayfinderError::Unsupported { .. } => "unsupported",
            WayfinderError::UnknownCity { .. } => "unknown_city",
            WayfinderError::IncompleteGraph { .. } => "incomplete_graph",
            WayfinderError::MapNotFound { .. } => "map_not_found",
            WayfinderError::Io(_) => "io_error",
            WayfinderError::Yaml(_) => "yaml_error",
            WayfinderError::Json(_) => "json_error",
            WayfinderError::Toml(_) => "toml_error",
            WayfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let WayfinderError::IncompleteGraph { missing } = self {
            error_obj["missing"] = serde_json::json!(missing);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for wayfinder operations
pub type Result<T> = std::result::Result<T, WayfinderError>;
