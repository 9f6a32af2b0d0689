//! Error types for entropy-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Entropy core error: {0}")]
    Core(#[from] entropy_core::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Type mismatch in column {column}: expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for caller contract violations: bad data, bad bucket counts, wrong dtypes
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput(_) | Self::TypeMismatch { .. } => true,
            Self::Core(e) => e.is_invalid_input(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
