//! Table readers

use crate::{DataFormat, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Read a CSV or JSON table into a DataFrame
pub fn read_table(path: &Path, format: DataFormat) -> Result<DataFrame> {
    info!(path = %path.display(), ?format, "reading table");
    let df = match format {
        DataFormat::Csv => CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?,
        DataFormat::Json => JsonReader::new(File::open(path)?).finish()?,
    };
    debug!(rows = df.height(), columns = df.width(), "table loaded");
    Ok(df)
}

/// Parse the listed columns to Float64, leaving unparsable cells null
///
/// Columns that are missing or already numeric are left alone.
pub fn coerce_numeric(mut df: DataFrame, columns: &[String]) -> Result<DataFrame> {
    for name in columns {
        let Ok(column) = df.column(name) else {
            debug!(column = %name, "numeric column not present, skipping");
            continue;
        };
        if column.dtype() == &DataType::String {
            let parsed = column.cast(&DataType::Float64)?;
            df.with_column(parsed)?;
        }
    }
    Ok(df)
}
