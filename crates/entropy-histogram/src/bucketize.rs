//! Discretization of numeric samples into equal-width buckets

use crate::boundaries::BucketBoundaries;
use entropy_core::{Error, Result};
use num_traits::ToPrimitive;
use tracing::debug;

/// Order of the assignments returned by [`bucketize_with_order`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketOrder {
    /// Assignments follow the ascending order of the values
    #[default]
    Sorted,
    /// Assignments line up with the caller's input positions
    Original,
}

/// Bucket indices in ascending value order
///
/// The sample is sorted and walked once with a bucket pointer that advances
/// while the current value exceeds the bucket's upper threshold, so empty
/// buckets are skipped and the pointer never leaves `0..n_buckets`. The
/// returned sequence is therefore non-decreasing and does not line up with
/// the input positions; use [`bucketize_aligned`] when it must.
///
/// ```rust
/// use entropy_histogram::bucketize;
///
/// assert_eq!(bucketize(&[5, 1, 3, 2, 4], 5).unwrap(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(bucketize(&[5.0, 5.0, 5.0, 5.0], 3).unwrap(), vec![0, 0, 0, 0]);
/// ```
pub fn bucketize<T: ToPrimitive>(values: &[T], n_buckets: usize) -> Result<Vec<usize>> {
    let mut sorted = to_f64(values)?;
    let boundaries = BucketBoundaries::equal_width(&sorted, n_buckets)?;
    sorted.sort_by(f64::total_cmp);
    Ok(bucketize_sorted(&sorted, &boundaries))
}

/// Bucket indices aligned with the input positions
pub fn bucketize_aligned<T: ToPrimitive>(values: &[T], n_buckets: usize) -> Result<Vec<usize>> {
    let data = to_f64(values)?;
    let boundaries = BucketBoundaries::equal_width(&data, n_buckets)?;
    let buckets: Vec<usize> = data.iter().map(|&v| boundaries.assign(v)).collect();
    debug!(n = buckets.len(), n_buckets, "bucketized in input order");
    Ok(buckets)
}

/// Bucketize with an explicit output order
pub fn bucketize_with_order<T: ToPrimitive>(
    values: &[T],
    n_buckets: usize,
    order: BucketOrder,
) -> Result<Vec<usize>> {
    match order {
        BucketOrder::Sorted => bucketize(values, n_buckets),
        BucketOrder::Original => bucketize_aligned(values, n_buckets),
    }
}

/// Single pass over ascending data
pub(crate) fn bucketize_sorted(sorted: &[f64], boundaries: &BucketBoundaries) -> Vec<usize> {
    let thresholds = boundaries.thresholds();
    let last = thresholds.len() - 1;
    let mut bucket = 0;
    let mut out = Vec::with_capacity(sorted.len());

    for &value in sorted {
        while bucket < last && value > thresholds[bucket] {
            bucket += 1;
        }
        out.push(bucket);
    }

    debug!(n = out.len(), n_buckets = thresholds.len(), "bucketized in sorted order");
    out
}

fn to_f64<T: ToPrimitive>(values: &[T]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|v| v.to_f64().ok_or_else(|| Error::non_finite("bucketization input")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_value_own_bucket() {
        assert_eq!(bucketize(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_degenerate_zero_width() {
        assert_eq!(bucketize(&[5, 5, 5, 5], 3).unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(bucketize_aligned(&[5, 5, 5, 5], 3).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_skips_empty_buckets() {
        // Gap between 1 and 10 leaves buckets 1..=3 empty
        let values = [0.0, 1.0, 10.0];
        assert_eq!(bucketize(&values, 5).unwrap(), vec![0, 0, 4]);
    }

    #[test]
    fn test_sorted_vs_aligned() {
        let values = [9.0, 0.0, 4.5, 9.0, 1.0];
        assert_eq!(bucketize(&values, 2).unwrap(), vec![0, 0, 0, 1, 1]);
        assert_eq!(bucketize_aligned(&values, 2).unwrap(), vec![1, 0, 0, 1, 0]);
        assert_eq!(
            bucketize_with_order(&values, 2, BucketOrder::Original).unwrap(),
            bucketize_aligned(&values, 2).unwrap()
        );
    }

    #[test]
    fn test_rounding_never_overflows() {
        // 0.1 steps accumulate rounding error; the maximum must still fit
        let values: Vec<f64> = (0..=30).map(|i| i as f64 * 0.1).collect();
        let buckets = bucketize(&values, 3).unwrap();
        assert_eq!(buckets.len(), values.len());
        assert_eq!(*buckets.last().unwrap(), 2);
        assert!(buckets.iter().all(|&b| b < 3));
    }

    #[test]
    fn test_errors() {
        let empty: [f64; 0] = [];
        assert!(bucketize(&empty, 5).unwrap_err().is_invalid_input());
        assert!(bucketize(&[1.0, 2.0], 0).unwrap_err().is_invalid_input());
        assert!(bucketize_aligned(&[f64::NAN], 1).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_extreme_finite_range() {
        let values = [-1.0e308, 0.0, 1.0e308];
        assert_eq!(bucketize(&values, 2).unwrap(), vec![0, 0, 1]);
        assert_eq!(bucketize_aligned(&[1.0e308, -1.0e308, 0.0], 2).unwrap(), vec![1, 0, 0]);
    }

    #[test]
    fn test_integer_input() {
        assert_eq!(bucketize(&[10u32, 20, 30, 40], 2).unwrap(), vec![0, 0, 1, 1]);
        assert_eq!(bucketize_aligned(&[40i64, 10, 30, 20], 2).unwrap(), vec![1, 0, 1, 0]);
    }
}
