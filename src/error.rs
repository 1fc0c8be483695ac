//! Unified error types for whatsmy-gpu
//!
//! This module defines all error types used throughout the plugin.
//! Uses thiserror for ergonomic error definitions.
//!
//! Per-device read failures inside the enumerators never surface here;
//! they degrade to missing fields on the record. Only argument-handling
//! conditions and a last-resort catch-all reach the plugin boundary.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Enumeration returned an empty sequence
    #[error("No GPUs detected.")]
    NoGpusDetected,

    /// Numeric argument outside the valid index range
    #[error("GPU index {index} out of range. Available GPUs: 0-{}", .count - 1)]
    IndexOutOfRange { index: i64, count: usize },

    /// Argument is neither a recognized keyword nor an in-range integer
    #[error("Invalid argument '{0}'.")]
    InvalidArgument(String),

    /// More than one argument supplied
    #[error("Too many arguments.")]
    TooManyArguments,

    /// Unexpected failure caught at the plugin boundary
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let err = AppError::IndexOutOfRange { index: 5, count: 3 };
        assert_eq!(err.to_string(), "GPU index 5 out of range. Available GPUs: 0-2");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = AppError::InvalidArgument("banana".to_string());
        assert!(err.to_string().contains("banana"));
    }

    #[test]
    fn test_no_gpus_display() {
        let err = AppError::NoGpusDetected;
        assert!(err.to_string().contains("No GPUs"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }
}
