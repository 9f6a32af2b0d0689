//! Polars integration for column entropy
//!
//! This crate computes the Shannon entropy of DataFrame columns through a
//! single extension trait, optionally discretizing numeric columns into
//! equal-width buckets first.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use entropy_polars::{column_entropy, ColumnEntropyExt, EntropyConfig};
//!
//! let df = df![
//!     "flat_type" => ["3 ROOM", "4 ROOM", "3 ROOM", "4 ROOM"],
//!     "floor_area" => [67.0, 92.0, 68.0, 121.0],
//! ].unwrap();
//!
//! assert_eq!(df.column_entropy("flat_type", &EntropyConfig::categorical()).unwrap(), 1.0);
//!
//! // Same thing with the flag-style entry point
//! let h = column_entropy(&df, "floor_area", true, 2).unwrap();
//! assert!(h > 0.0);
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use methods::column_entropy;
pub use traits::*;
