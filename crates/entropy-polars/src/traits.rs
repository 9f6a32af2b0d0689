//! Extension trait for entropy on Polars DataFrames

use polars::prelude::*;
use crate::{EntropyConfig, Result};

/// Extension trait for entropy operations on Polars DataFrames
pub trait ColumnEntropyExt {
    /// Shannon entropy (bits) of one column
    ///
    /// # Arguments
    /// * `column` - Column name
    /// * `config` - Discretization and null handling
    ///
    /// # Errors
    /// `ColumnNotFound` for unknown names, `TypeMismatch` when discretizing
    /// a non-numeric column, `InvalidInput` for columns without values.
    fn column_entropy(&self, column: &str, config: &EntropyConfig) -> Result<f64>;

    /// Entropy of several columns at once
    ///
    /// # Returns
    /// Single-row DataFrame with columns named `{column}_entropy`
    fn columns_entropy(&self, columns: &[&str], config: &EntropyConfig) -> Result<DataFrame>;
}
