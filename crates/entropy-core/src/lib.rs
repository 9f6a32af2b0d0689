//! Core types for entropy computation
//!
//! This crate provides the pieces every other entropy-stats crate builds on:
//! the shared [`Error`] type, the [`FrequencyTable`] used to count categorical
//! samples, and Shannon entropy over those counts.
//!
//! # Example
//!
//! ```rust
//! use entropy_core::{entropy, FrequencyTable};
//!
//! let flat_types = ["3 ROOM", "4 ROOM", "4 ROOM", "5 ROOM"];
//! let h = entropy(&flat_types).unwrap();
//! assert!((h - 1.5).abs() < 1e-12);
//!
//! let table = FrequencyTable::from_values(&flat_types);
//! assert_eq!(table.distinct(), 3);
//! assert_eq!(table.count(&"4 ROOM"), 2);
//! ```

pub mod error;
pub mod frequency;
pub mod shannon;

// Re-export core types
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use shannon::{entropy, entropy_iter, float_entropy};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
