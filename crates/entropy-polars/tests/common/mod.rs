//! Common test utilities for entropy-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// Small in-memory stand-in for the HDB resale table
pub fn resale_fixture() -> DataFrame {
    df![
        "flat_type" => [
            "3 ROOM", "4 ROOM", "3 ROOM", "4 ROOM", "5 ROOM", "5 ROOM", "3 ROOM", "4 ROOM"
        ],
        "storey_range" => ["01 TO 03"; 8],
        "floor_area_sqm" => [67.0, 92.0, 68.0, 95.0, 121.0, 118.0, 73.0, 90.0],
        "lease_commence_date" => [1979i64, 1985, 1979, 1985, 1999, 1999, 1979, 1985],
    ]
    .unwrap()
}

/// Helper function to create a test DataFrame with specific values
pub fn create_test_df(values: &[f64]) -> DataFrame {
    df!["values" => values].unwrap()
}

/// Helper function to extract a single value from a result DataFrame
pub fn extract_single_value(df: &DataFrame, col_name: &str) -> f64 {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .get(0)
        .unwrap()
}
