//! Error types for step-sort.
//!
//! The sorting algorithms themselves never fail; errors only arise at the
//! configuration and report export boundary.

use thiserror::Error;

/// Result type for step-sort operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring runs or exporting reports.
#[derive(Debug, Error)]
pub enum Error {
    /// The algorithm identifier does not name one of the supported sorts.
    #[error("unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),

    /// The requested array size is outside the accepted bounds.
    #[error("array size {size} out of range [{min}, {max}]")]
    SizeOutOfRange { size: usize, min: usize, max: usize },

    /// The animation delay is outside the accepted bounds.
    #[error("delay {delay}s out of range [{min}, {max}]")]
    DelayOutOfRange { delay: f64, min: f64, max: f64 },

    /// The random value range contains no values.
    #[error("empty value range {low}..={high}")]
    EmptyValueRange { low: u32, high: u32 },

    /// A command line argument could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV report could not be parsed.
    #[error("invalid report: {0}")]
    InvalidReport(String),
}
