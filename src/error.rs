//! Error types for the anofox-analysis library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while constructing data structures or configuring
/// analysis functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Too few configuration arguments for the function.
    #[error("missing arguments: need at least {expected}, got {got}")]
    MissingArguments { expected: usize, got: usize },

    /// A configuration argument could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),
}
