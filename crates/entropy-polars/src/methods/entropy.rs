//! Column entropy implementations

use polars::prelude::*;
use entropy_core::FrequencyTable;
use entropy_histogram::bucketize;
use ordered_float::OrderedFloat;
use std::hash::Hash;
use tracing::debug;
use crate::{ColumnEntropyExt, Discretization, EntropyConfig, Error, NullPolicy, Result};

/// Entropy of `column` in `df`, discretizing into `n_buckets` when `bucketize` is set
///
/// Flag-style counterpart of [`ColumnEntropyExt::column_entropy`].
pub fn column_entropy(
    df: &DataFrame,
    column: &str,
    bucketize: bool,
    n_buckets: usize,
) -> Result<f64> {
    df.column_entropy(column, &EntropyConfig::from_flags(bucketize, n_buckets))
}

impl ColumnEntropyExt for DataFrame {
    fn column_entropy(&self, column: &str, config: &EntropyConfig) -> Result<f64> {
        let col = self.column(column)
            .map_err(|_| Error::ColumnNotFound(column.to_string()))?;

        let h = match config.discretization {
            Discretization::Categorical => categorical_entropy(col, config.nulls)?,
            Discretization::EqualWidth { n_buckets } => {
                bucketized_entropy(col, n_buckets, config.nulls)?
            }
        };

        debug!(
            column,
            dtype = %col.dtype(),
            method = %config.name(),
            entropy = h,
            "column entropy"
        );
        Ok(h)
    }

    fn columns_entropy(&self, columns: &[&str], config: &EntropyConfig) -> Result<DataFrame> {
        let mut result_columns: Vec<Column> = Vec::with_capacity(columns.len());

        for col_name in columns {
            let h = self.column_entropy(col_name, config)?;
            let name = format!("{}_entropy", col_name);
            result_columns.push(Series::new(name.as_str().into(), vec![h]).into());
        }

        Ok(DataFrame::new(result_columns)?)
    }
}

fn is_signed_integer(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Int64 | DataType::Int32 | DataType::Int16 | DataType::Int8)
}

fn is_unsigned_integer(dtype: &DataType) -> bool {
    matches!(dtype, DataType::UInt64 | DataType::UInt32 | DataType::UInt16 | DataType::UInt8)
}

fn is_float(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float64 | DataType::Float32)
}

fn is_numeric(dtype: &DataType) -> bool {
    is_signed_integer(dtype) || is_unsigned_integer(dtype) || is_float(dtype)
}

fn categorical_entropy(column: &Column, nulls: NullPolicy) -> Result<f64> {
    let dtype = column.dtype();

    if is_signed_integer(dtype) {
        let cast = column.cast(&DataType::Int64)?;
        keyed_entropy(column.name(), cast.i64()?.into_iter(), nulls)
    } else if is_unsigned_integer(dtype) {
        let cast = column.cast(&DataType::UInt64)?;
        keyed_entropy(column.name(), cast.u64()?.into_iter(), nulls)
    } else if is_float(dtype) {
        let cast = column.cast(&DataType::Float64)?;
        let values = cast.f64()?.into_iter().map(|v| v.map(OrderedFloat));
        keyed_entropy(column.name(), values, nulls)
    } else {
        // Strings, booleans, categoricals and temporal types compare by their text form
        let cast = column.cast(&DataType::String)?;
        keyed_entropy(column.name(), cast.str()?.into_iter(), nulls)
    }
}

fn bucketized_entropy(column: &Column, n_buckets: usize, nulls: NullPolicy) -> Result<f64> {
    let dtype = column.dtype();
    if !is_numeric(dtype) {
        return Err(Error::TypeMismatch {
            column: column.name().to_string(),
            expected: "numeric".to_string(),
            got: dtype.to_string(),
        });
    }

    let cast = column.cast(&DataType::Float64)?;
    let ca = cast.f64()?;
    let present: Vec<f64> = ca.into_iter().flatten().collect();
    if present.is_empty() {
        return Err(no_values(column.name()));
    }

    let mut table: FrequencyTable<Option<usize>> =
        bucketize(&present, n_buckets)?.into_iter().map(Some).collect();
    if nulls == NullPolicy::AsCategory {
        table.extend(std::iter::repeat(None).take(ca.null_count()));
    }

    Ok(table.entropy()?)
}

fn keyed_entropy<K, I>(name: &PlSmallStr, values: I, nulls: NullPolicy) -> Result<f64>
where
    K: Hash + Eq,
    I: Iterator<Item = Option<K>>,
{
    let table: FrequencyTable<Option<K>> = match nulls {
        NullPolicy::Skip => values.filter(Option::is_some).collect(),
        NullPolicy::AsCategory => values.collect(),
    };
    if table.is_empty() {
        return Err(no_values(name));
    }
    Ok(table.entropy()?)
}

fn no_values(name: &str) -> Error {
    Error::InvalidInput(format!("column {name} has no values to measure"))
}
