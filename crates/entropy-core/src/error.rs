//! Error types for entropy computation
//!
//! Provides a unified error type for all entropy-stats crates.

use thiserror::Error;

/// Core error type for entropy operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data (empty samples, non-finite values, bad bucket counts)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires at least one sample"))
    }

    /// Create an error for a bucket count that cannot partition a range
    pub fn invalid_bucket_count(n_buckets: usize) -> Self {
        Self::InvalidInput(format!("Bucket count must be positive, got {n_buckets}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Returns true for the input-validation family of errors
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
