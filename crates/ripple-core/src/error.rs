//! Error types and exit codes for ripple
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range vertices)

use thiserror::Error;

/// Exit codes for the ripple CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ripple operations
#[derive(Error, Debug)]
pub enum RippleError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("vertex {vertex} out of bounds for graph with {vertex_count} vertices")]
    VertexOutOfBounds { vertex: usize, vertex_count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RippleError {
    /// Create an error for a vertex index outside `[0, vertex_count)`
    pub fn vertex_out_of_bounds(vertex: usize, vertex_count: usize) -> Self {
        RippleError::VertexOutOfBounds {
            vertex,
            vertex_count,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RippleError::UnknownFormat(_)
            | RippleError::DuplicateFormat
            | RippleError::UsageError(_)
            | RippleError::VertexOutOfBounds { .. } => ExitCode::Usage,

            RippleError::Io(_) | RippleError::Json(_) | RippleError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            RippleError::UnknownFormat(_) => "unknown_format",
            RippleError::DuplicateFormat => "duplicate_format",
            RippleError::UsageError(_) => "usage_error",
            RippleError::VertexOutOfBounds { .. } => "vertex_out_of_bounds",
            RippleError::Io(_) => "io_error",
            RippleError::Json(_) => "json_error",
            RippleError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;
