//! Tests for edge cases and error handling

mod common;

use approx::assert_relative_eq;
use common::*;
use polars::prelude::*;
use entropy_polars::{column_entropy, ColumnEntropyExt, EntropyConfig, Error, NullPolicy};

#[test]
fn test_unknown_column() {
    let df = resale_fixture();
    let err = column_entropy(&df, "nonexistent", false, 5).unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(ref name) if name == "nonexistent"));
    assert!(!err.is_invalid_input());

    let err = df
        .columns_entropy(&["flat_type", "nonexistent"], &EntropyConfig::categorical())
        .unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound(_)));
}

#[test]
fn test_bucketize_non_numeric() {
    let df = resale_fixture();
    let err = column_entropy(&df, "flat_type", true, 5).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert!(err.is_invalid_input());
}

#[test]
fn test_zero_buckets() {
    let df = create_test_df(&[1.0, 2.0, 3.0]);
    let err = column_entropy(&df, "values", true, 0).unwrap_err();
    assert!(matches!(err, Error::Core(_)));
    assert!(err.is_invalid_input());
}

#[test]
fn test_empty_column() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("values"), Vec::<f64>::new()).into()
    ]).unwrap();

    assert!(column_entropy(&df, "values", false, 5).unwrap_err().is_invalid_input());
    assert!(column_entropy(&df, "values", true, 5).unwrap_err().is_invalid_input());
}

#[test]
fn test_nan_rejected_when_bucketizing() {
    let df = create_test_df(&[1.0, f64::NAN, 3.0]);
    assert!(column_entropy(&df, "values", true, 2).unwrap_err().is_invalid_input());
    // As categories NaN is just another value
    assert_relative_eq!(
        column_entropy(&df, "values", false, 2).unwrap(),
        3.0_f64.log2(),
        epsilon = 1e-12
    );
}

#[test]
fn test_null_policies() {
    let df = DataFrame::new(vec![
        Series::new(
            PlSmallStr::from("payment_type"),
            vec![Some("1"), Some("2"), None, None],
        )
        .into(),
        Series::new(PlSmallStr::from("fare"), vec![Some(5.0), Some(15.0), None, None]).into(),
    ]).unwrap();

    let skip = EntropyConfig::categorical();
    let as_category = EntropyConfig::categorical().with_nulls(NullPolicy::AsCategory);
    assert_relative_eq!(df.column_entropy("payment_type", &skip).unwrap(), 1.0);
    assert_relative_eq!(df.column_entropy("payment_type", &as_category).unwrap(), 1.5);

    let bucketed = EntropyConfig::bucketized(2);
    assert_relative_eq!(df.column_entropy("fare", &bucketed).unwrap(), 1.0);
    assert_relative_eq!(
        df.column_entropy("fare", &bucketed.with_nulls(NullPolicy::AsCategory)).unwrap(),
        1.5
    );
}

#[test]
fn test_all_null_column() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("values"), vec![None::<f64>, None]).into()
    ]).unwrap();
    assert!(column_entropy(&df, "values", false, 5).unwrap_err().is_invalid_input());

    let as_category = EntropyConfig::categorical().with_nulls(NullPolicy::AsCategory);
    assert_eq!(df.column_entropy("values", &as_category).unwrap(), 0.0);
}
