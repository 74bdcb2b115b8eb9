//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid vertex or weight arguments)
//! - 3: Data error (invalid maze or config file, duplicate vertex)

mod macros;

use std::fmt::Debug;
use thiserror::Error;

/// Exit codes for the graphwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid maze or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or walking a graph
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex already in graph: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("invalid edge weight: {weight} (weights must be non-negative)")]
    InvalidWeight { weight: i64 },

    #[error("invalid maze: {reason}")]
    InvalidMaze { reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex that is already present
    pub fn duplicate_vertex(vertex: &impl Debug) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a vertex that is missing from the graph
    pub fn unknown_vertex(vertex: &impl Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an invalid maze description
    pub fn invalid_maze(reason: impl Into<String>) -> Self {
        GraphError::InvalidMaze {
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownVertex { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::InvalidValue { .. }
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::DuplicateVertex { .. }
            | GraphError::InvalidMaze { .. }
            | GraphError::Toml(_) => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::InvalidMaze { .. } => "invalid_maze",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;
